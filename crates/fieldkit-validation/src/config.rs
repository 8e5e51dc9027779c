//! Declarative rule configuration
//!
//! Lets a host describe a field's rules as data (for example in a JSON form
//! definition) instead of building them in code:
//!
//! ```rust
//! use fieldkit_validation::RuleSetConfig;
//!
//! let config = RuleSetConfig::from_json(r#"{
//!     "ignore_empty": true,
//!     "rules": [
//!         { "rule": "numbers_only" },
//!         { "rule": "max_length", "length": 2, "message": "Too old" }
//!     ]
//! }"#).unwrap();
//!
//! let rules = config.build().unwrap();
//! assert_eq!(rules.validate(Some("120")).message(), Some("Too old"));
//! ```

use crate::error::RuleResult;
use crate::rules::{RuleSet, TextRules};
use crate::traits::Rule;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Serializable description of one built-in rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleSpec {
    Mail {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Zipcode {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    ExactLength {
        length: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    MinLength {
        length: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    MaxLength {
        length: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    NotEmpty {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    NumbersOnly {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Pattern {
        pattern: String,
        #[serde(default)]
        case_insensitive: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

/// Apply an optional message override through the rule's own builder
macro_rules! with_message {
    ($rule:expr, $message:expr) => {{
        let rule = $rule;
        match $message {
            Some(message) => rule.message(message.clone()),
            None => rule,
        }
    }};
}

impl RuleSpec {
    /// Instantiate the described rule
    pub fn to_rule(&self) -> RuleResult<Arc<dyn Rule>> {
        let rule: Arc<dyn Rule> = match self {
            RuleSpec::Mail { message } => Arc::new(with_message!(TextRules::mail(), message)),
            RuleSpec::Zipcode { message } => {
                Arc::new(with_message!(TextRules::zipcode(), message))
            }
            RuleSpec::ExactLength { length, message } => {
                Arc::new(with_message!(TextRules::exact_length(*length), message))
            }
            RuleSpec::MinLength { length, message } => {
                Arc::new(with_message!(TextRules::min_length(*length), message))
            }
            RuleSpec::MaxLength { length, message } => {
                Arc::new(with_message!(TextRules::max_length(*length), message))
            }
            RuleSpec::NotEmpty { message } => {
                Arc::new(with_message!(TextRules::not_empty(), message))
            }
            RuleSpec::NumbersOnly { message } => {
                Arc::new(with_message!(TextRules::numbers_only(), message))
            }
            RuleSpec::Pattern {
                pattern,
                case_insensitive,
                message,
            } => {
                let rule = if *case_insensitive {
                    crate::PatternRule::new_case_insensitive(pattern)?
                } else {
                    TextRules::pattern(pattern)?
                };
                Arc::new(with_message!(rule, message))
            }
        };

        Ok(rule)
    }
}

/// Serializable description of a whole rule set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    #[serde(default)]
    pub ignore_empty: bool,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

impl RuleSetConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> RuleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a live rule set, preserving rule order
    pub fn build(&self) -> RuleResult<RuleSet> {
        let mut rules = RuleSet::new().ignoring_empty(self.ignore_empty);
        for spec in &self.rules {
            rules.add_shared(spec.to_rule()?);
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;

    #[test]
    fn test_build_preserves_order_and_policy() {
        let config = RuleSetConfig {
            ignore_empty: true,
            rules: vec![
                RuleSpec::NotEmpty { message: None },
                RuleSpec::MinLength {
                    length: 3,
                    message: Some("Too short".to_string()),
                },
                RuleSpec::Mail { message: None },
            ],
        };

        let rules = config.build().unwrap();

        assert!(rules.ignores_empty());
        assert_eq!(rules.rule_names(), vec!["not_empty", "min_length", "mail"]);
        assert_eq!(rules.validate(Some("ab")).message(), Some("Too short"));
        assert_eq!(rules.validate(Some("abcd")).message(), Some("Email is not valid."));
    }

    #[test]
    fn test_from_json_with_defaults() {
        let config = RuleSetConfig::from_json(r#"{ "rules": [{ "rule": "zipcode" }] }"#).unwrap();

        assert!(!config.ignore_empty);
        assert_eq!(config.rules, vec![RuleSpec::Zipcode { message: None }]);
    }

    #[test]
    fn test_pattern_spec() {
        let config = RuleSetConfig::from_json(
            r#"{ "rules": [{ "rule": "pattern", "pattern": "[a-z]+", "case_insensitive": true }] }"#,
        )
        .unwrap();
        let rules = config.build().unwrap();

        assert!(rules.validate(Some("ABC")).is_valid());
        assert!(!rules.validate(Some("AB1")).is_valid());
    }

    #[test]
    fn test_invalid_pattern_fails_build() {
        let config = RuleSetConfig {
            ignore_empty: false,
            rules: vec![RuleSpec::Pattern {
                pattern: "(".to_string(),
                case_insensitive: false,
                message: None,
            }],
        };

        assert!(matches!(
            config.build(),
            Err(RuleError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_unknown_rule_is_a_json_error() {
        let error = RuleSetConfig::from_json(r#"{ "rules": [{ "rule": "telepathy" }] }"#).unwrap_err();
        assert!(matches!(error, RuleError::Json(_)));
    }

    #[test]
    fn test_spec_round_trips_through_json() {
        let spec = RuleSpec::ExactLength {
            length: 5,
            message: None,
        };
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(json, serde_json::json!({ "rule": "exact_length", "length": 5 }));
    }
}
