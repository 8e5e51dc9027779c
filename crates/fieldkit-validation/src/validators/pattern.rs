//! Pattern-based rules using regular expressions

use crate::error::{RuleError, RuleResult};
use crate::traits::Rule;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static ZIPCODE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{5}(?:-\d{4})?$").unwrap());

/// Rule that requires the whole text to match a regular expression
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Regex,
    /// Pattern as supplied, before anchoring
    source: String,
    name: &'static str,
    message: String,
}

impl PatternRule {
    /// Create a pattern rule. The pattern is anchored so it must match the
    /// entire text, not just a substring.
    pub fn new(pattern: &str) -> RuleResult<Self> {
        Self::compile(pattern, "")
    }

    /// Create a case-insensitive pattern rule
    pub fn new_case_insensitive(pattern: &str) -> RuleResult<Self> {
        Self::compile(pattern, "(?i)")
    }

    fn compile(pattern: &str, flags: &str) -> RuleResult<Self> {
        let anchored = format!("{}^(?:{})$", flags, pattern);
        let regex = Regex::new(&anchored).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: regex,
            source: pattern.to_string(),
            name: "pattern",
            message: "Text does not match the required pattern.".to_string(),
        })
    }

    /// US zipcode: five digits with an optional four digit extension
    pub fn zipcode() -> Self {
        Self {
            pattern: ZIPCODE_PATTERN.clone(),
            source: r"\d{5}(-\d{4})?".to_string(),
            name: "zipcode",
            message: "Zipcode is not valid.".to_string(),
        }
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the pattern string as supplied
    pub fn pattern_string(&self) -> &str {
        &self.source
    }
}

impl Rule for PatternRule {
    fn validate(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn rule_name(&self) -> &'static str {
        self.name
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({
            "pattern": self.source,
            "message": self.message,
        }))
    }
}
