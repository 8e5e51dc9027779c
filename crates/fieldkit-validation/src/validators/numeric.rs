//! Digits-only rule

use crate::traits::Rule;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// `\d` is Unicode-aware: any character in the decimal number category
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d*$").unwrap());

/// Rule that accepts only decimal digits.
///
/// The empty string contains no non-digit and therefore passes; combine with
/// [`NotEmptyRule`](crate::NotEmptyRule) or a minimum length to require input.
#[derive(Debug, Clone)]
pub struct NumbersOnlyRule {
    message: String,
}

impl NumbersOnlyRule {
    pub fn new() -> Self {
        Self {
            message: "You must enter only numbers.".to_string(),
        }
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for NumbersOnlyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NumbersOnlyRule {
    fn validate(&self, text: &str) -> bool {
        DIGITS.is_match(text)
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn rule_name(&self) -> &'static str {
        "numbers_only"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "message": self.message }))
    }
}
