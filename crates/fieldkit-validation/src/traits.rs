//! Core validation traits

use crate::result::ValidationResult;
use crate::rules::{Evaluation, RuleSet};
use serde_json::Value;

/// A single text predicate with an associated failure message.
///
/// Implementations must be total: `validate` is called with any string,
/// including the empty one, and reports rejection by returning `false`.
pub trait Rule: Send + Sync {
    /// Returns `true` if `text` satisfies the rule
    fn validate(&self, text: &str) -> bool;

    /// Message reported when the rule rejects a text
    fn message(&self) -> Option<&str>;

    /// Get the rule name/type
    fn rule_name(&self) -> &'static str;

    /// Get rule parameters/configuration as JSON
    fn parameters(&self) -> Option<Value> {
        None
    }
}

/// Capability of a field that owns a [`RuleSet`] and can validate its text.
///
/// Only `rule_set`, `rule_set_mut` and `text_to_validate` are required.
/// Override the two hooks to react to validation outcomes (for example to
/// toggle an error indicator).
pub trait Validatable {
    fn rule_set(&self) -> &RuleSet;

    fn rule_set_mut(&mut self) -> &mut RuleSet;

    /// Text that will be validated; `None` when the field has no content
    fn text_to_validate(&self) -> Option<&str>;

    /// Called when a validation run rejects the text
    fn validation_did_fail(&mut self, _rule: &dyn Rule) {}

    /// Called when a validation run accepts the text
    fn validation_did_pass(&mut self) {}

    /// Run the field's rule set against its current text.
    ///
    /// Exactly one of the hooks fires per call.
    fn validate(&mut self) -> ValidationResult {
        match self.rule_set().evaluate(self.text_to_validate()) {
            Evaluation::Failed { rule, .. } => {
                self.validation_did_fail(rule.as_ref());
                ValidationResult::failed(rule.message().map(str::to_string))
            }
            Evaluation::Skipped | Evaluation::Passed => {
                self.validation_did_pass();
                ValidationResult::passed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::TextRules;

    #[derive(Default)]
    struct TestField {
        text: Option<String>,
        rules: RuleSet,
        passes: usize,
        failures: Vec<&'static str>,
    }

    impl Validatable for TestField {
        fn rule_set(&self) -> &RuleSet {
            &self.rules
        }

        fn rule_set_mut(&mut self) -> &mut RuleSet {
            &mut self.rules
        }

        fn text_to_validate(&self) -> Option<&str> {
            self.text.as_deref()
        }

        fn validation_did_fail(&mut self, rule: &dyn Rule) {
            self.failures.push(rule.rule_name());
        }

        fn validation_did_pass(&mut self) {
            self.passes += 1;
        }
    }

    #[test]
    fn test_validate_calls_fail_hook_with_rule() {
        let mut field = TestField {
            text: Some("not-an-email".to_string()),
            ..TestField::default()
        };
        field.rule_set_mut().add(TextRules::mail());

        let result = field.validate();

        assert!(!result.is_valid());
        assert_eq!(result.message(), Some("Email is not valid."));
        assert_eq!(field.failures, vec!["mail"]);
        assert_eq!(field.passes, 0);
    }

    #[test]
    fn test_validate_calls_pass_hook() {
        let mut field = TestField {
            text: Some("user@example.com".to_string()),
            ..TestField::default()
        };
        field.rule_set_mut().add(TextRules::mail());

        assert!(field.validate().is_valid());
        assert_eq!(field.passes, 1);
        assert!(field.failures.is_empty());
    }

    #[test]
    fn test_skipped_empty_text_counts_as_pass() {
        let mut field = TestField::default();
        field.rule_set_mut().set_ignore_empty(true);
        field.rule_set_mut().add(TextRules::not_empty());

        assert!(field.validate().is_valid());
        assert_eq!(field.passes, 1);
    }

    #[test]
    fn test_absent_text_is_validated_as_empty() {
        let mut field = TestField::default();
        field.rule_set_mut().add(TextRules::min_length(1));

        let result = field.validate();

        assert!(!result.is_valid());
        assert_eq!(result.message(), Some("Must be at least 1 characters long."));
    }
}
