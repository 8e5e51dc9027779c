//! Custom rules backed by closures

use crate::traits::Rule;
use serde_json::Value;
use std::sync::Arc;

/// Type alias for rule predicates
pub type RulePredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Rule that delegates to a user-defined predicate
#[derive(Clone)]
pub struct CustomRule {
    /// Name/identifier for this custom rule
    name: String,
    predicate: RulePredicate,
    message: Option<String>,
}

impl CustomRule {
    /// Create a new custom rule. It carries no message until one is set.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            message: None,
        }
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Get the rule name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepts only one of the given values
    pub fn one_of(name: impl Into<String>, allowed: Vec<String>) -> Self {
        Self::new(name, move |text| allowed.iter().any(|value| value == text))
    }

    /// Accepts text that contains `needle`
    pub fn contains(name: impl Into<String>, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        Self::new(name, move |text| text.contains(needle.as_str()))
    }
}

impl std::fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomRule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

impl Rule for CustomRule {
    fn validate(&self, text: &str) -> bool {
        (self.predicate)(text)
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn rule_name(&self) -> &'static str {
        "custom"
    }

    fn parameters(&self) -> Option<Value> {
        let mut params = serde_json::Map::new();

        params.insert("name".to_string(), Value::String(self.name.clone()));

        if let Some(ref message) = self.message {
            params.insert("message".to_string(), Value::String(message.clone()));
        }

        Some(Value::Object(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_rule_uses_predicate() {
        let rule = CustomRule::new("starts_with_a", |text| text.starts_with('a'))
            .message("Must start with a");

        assert!(rule.validate("apple"));
        assert!(!rule.validate("banana"));
        assert_eq!(Rule::message(&rule), Some("Must start with a"));
        assert_eq!(rule.name(), "starts_with_a");
    }

    #[test]
    fn test_custom_rule_without_message() {
        let rule = CustomRule::new("never", |_| false);
        assert!(Rule::message(&rule).is_none());
        assert!(rule.parameters().unwrap().get("message").is_none());
    }

    #[test]
    fn test_one_of() {
        let rule = CustomRule::one_of(
            "size",
            vec!["S".to_string(), "M".to_string(), "L".to_string()],
        );

        assert!(rule.validate("M"));
        assert!(!rule.validate("XL"));
        assert!(!rule.validate(""));
    }

    #[test]
    fn test_contains() {
        let rule = CustomRule::contains("has_at", "@");
        assert!(rule.validate("a@b"));
        assert!(!rule.validate("ab"));
    }
}
