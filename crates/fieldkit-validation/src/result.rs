//! Outcome of validating one field

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable pass/fail outcome of a single validation run.
///
/// A message is only ever carried by a failed result, and only when the
/// rule that rejected the text supplied one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationResult {
    is_valid: bool,
    message: Option<String>,
}

impl ValidationResult {
    /// A passing result
    pub fn passed() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    /// A failing result with the rejecting rule's message
    pub fn failed(message: Option<String>) -> Self {
        Self {
            is_valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failure message, `None` for passing results
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::passed()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_valid, &self.message) {
            (true, _) => write!(f, "valid"),
            (false, Some(message)) => write!(f, "invalid: {}", message),
            (false, None) => write!(f, "invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passed_has_no_message() {
        let result = ValidationResult::passed();
        assert!(result.is_valid());
        assert!(result.message().is_none());
        assert_eq!(result, ValidationResult::default());
    }

    #[test]
    fn test_failed_display() {
        let result = ValidationResult::failed(Some("Email is not valid.".to_string()));
        assert!(!result.is_valid());
        assert_eq!(result.to_string(), "invalid: Email is not valid.");
        assert_eq!(ValidationResult::failed(None).to_string(), "invalid");
    }

    #[test]
    fn test_serializes_for_host_bridges() {
        let result = ValidationResult::failed(Some("msg".to_string()));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "is_valid": false, "message": "msg" }));
    }
}
