//! Non-blank text rule

use crate::traits::Rule;
use serde_json::Value;

/// Rule that rejects text consisting only of whitespace and newlines
#[derive(Debug, Clone)]
pub struct NotEmptyRule {
    message: String,
}

impl NotEmptyRule {
    /// Create a new rule with default message
    pub fn new() -> Self {
        Self {
            message: "Space only text is not valid.".to_string(),
        }
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for NotEmptyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for NotEmptyRule {
    fn validate(&self, text: &str) -> bool {
        !text.trim().is_empty()
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn rule_name(&self) -> &'static str {
        "not_empty"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({ "message": self.message }))
    }
}
