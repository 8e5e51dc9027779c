//! Errors raised while building rules
//!
//! A rule rejecting some text is never an error; it is reported through
//! [`ValidationResult`](crate::ValidationResult). The errors here only come
//! from constructing rules out of user-supplied patterns or configuration.

use thiserror::Error;

pub type RuleResult<T> = Result<T, RuleError>;

/// Failure to construct a rule or a rule set
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid rule configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl RuleError {
    /// The offending pattern, if this error came from a regex rule
    pub fn pattern(&self) -> Option<&str> {
        match self {
            RuleError::InvalidPattern { pattern, .. } => Some(pattern),
            RuleError::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = RuleError::InvalidPattern {
            pattern: "(".to_string(),
            source,
        };

        assert_eq!(error.pattern(), Some("("));
        assert!(error.to_string().starts_with("invalid pattern `(`"));
    }

    #[test]
    fn test_json_error_conversion() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: RuleError = source.into();

        assert!(error.pattern().is_none());
        assert!(error.to_string().starts_with("invalid rule configuration"));
    }
}
