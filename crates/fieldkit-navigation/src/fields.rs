//! Stock in-memory fields
//!
//! Hosts usually wrap their own widgets in [`FormField`]; these two types
//! cover headless use and tests. [`TextField`] has no rules,
//! [`ValidatableField`] owns a [`RuleSet`] and remembers how its last
//! validation went.

use crate::field::{FormField, ReturnKey};
use fieldkit_validation::{Rule, RuleResult, RuleSet, RuleSetConfig, Validatable};

/// Plain text field without validation capability
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: Option<String>,
    focused: bool,
    return_key: Option<ReturnKey>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Whether the field currently holds focus, as far as it was told
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Return key role assigned at registration
    pub fn return_key(&self) -> Option<ReturnKey> {
        self.return_key
    }
}

impl FormField for TextField {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn request_focus(&mut self) {
        self.focused = true;
    }

    fn release_focus(&mut self) {
        self.focused = false;
    }

    fn set_return_key(&mut self, key: ReturnKey) {
        self.return_key = Some(key);
    }
}

/// State left behind by the most recent validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationState {
    #[default]
    Unvalidated,
    Passed,
    Failed {
        rule: &'static str,
        message: Option<String>,
    },
}

/// Text field that owns a rule set
#[derive(Debug, Clone, Default)]
pub struct ValidatableField {
    inner: TextField,
    rules: RuleSet,
    state: ValidationState,
}

impl ValidatableField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            inner: TextField::with_text(text),
            ..Self::default()
        }
    }

    /// Replace the field's rules, builder style
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Field whose rules come from a declarative configuration
    pub fn from_config(config: &RuleSetConfig) -> RuleResult<Self> {
        Ok(Self::new().with_rules(config.build()?))
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.inner.set_text(text);
    }

    pub fn is_focused(&self) -> bool {
        self.inner.is_focused()
    }

    pub fn return_key(&self) -> Option<ReturnKey> {
        self.inner.return_key()
    }

    pub fn validation_state(&self) -> &ValidationState {
        &self.state
    }
}

impl Validatable for ValidatableField {
    fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    fn rule_set_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }

    fn text_to_validate(&self) -> Option<&str> {
        self.inner.text()
    }

    fn validation_did_fail(&mut self, rule: &dyn Rule) {
        self.state = ValidationState::Failed {
            rule: rule.rule_name(),
            message: rule.message().map(str::to_string),
        };
    }

    fn validation_did_pass(&mut self) {
        self.state = ValidationState::Passed;
    }
}

impl FormField for ValidatableField {
    fn text(&self) -> Option<&str> {
        self.inner.text()
    }

    fn as_validatable(&mut self) -> Option<&mut dyn Validatable> {
        Some(self)
    }

    fn request_focus(&mut self) {
        self.inner.request_focus();
    }

    fn release_focus(&mut self) {
        self.inner.release_focus();
    }

    fn set_return_key(&mut self, key: ReturnKey) {
        self.inner.set_return_key(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_validation::{RuleSpec, TextRules};

    #[test]
    fn test_text_field_has_no_validation() {
        let mut field = TextField::with_text("Jane");
        assert_eq!(field.text(), Some("Jane"));
        assert!(field.as_validatable().is_none());
    }

    #[test]
    fn test_validatable_field_records_state() {
        let mut field =
            ValidatableField::with_text("nope").with_rules(RuleSet::new().with(TextRules::mail()));
        assert_eq!(field.validation_state(), &ValidationState::Unvalidated);

        let result = field.validate();
        assert!(!result.is_valid());
        assert_eq!(
            field.validation_state(),
            &ValidationState::Failed {
                rule: "mail",
                message: Some("Email is not valid.".to_string())
            }
        );

        field.set_text(Some("jane@example.com".to_string()));
        assert!(field.validate().is_valid());
        assert_eq!(field.validation_state(), &ValidationState::Passed);
    }

    #[test]
    fn test_from_config() {
        let config = RuleSetConfig {
            ignore_empty: true,
            rules: vec![RuleSpec::NumbersOnly { message: None }],
        };
        let mut field = ValidatableField::from_config(&config).unwrap();

        assert!(field.validate().is_valid());
        field.set_text(Some("x".to_string()));
        assert!(!field.validate().is_valid());
    }

    #[test]
    fn test_focus_and_return_key_bookkeeping() {
        let mut field = ValidatableField::new();
        field.request_focus();
        field.set_return_key(ReturnKey::Done);

        assert!(field.is_focused());
        assert_eq!(field.return_key(), Some(ReturnKey::Done));

        field.release_focus();
        assert!(!field.is_focused());
    }
}
