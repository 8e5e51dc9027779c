//! Email format rule

use crate::traits::Rule;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const DEFAULT_MESSAGE: &str = "Email is not valid.";

static MAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Rule for email address format.
///
/// Matching is case-insensitive and must cover the whole text.
#[derive(Debug, Clone)]
pub struct MailRule {
    message: String,
}

impl MailRule {
    /// Create a mail rule with the default message
    pub fn new() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
        }
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for MailRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for MailRule {
    fn validate(&self, text: &str) -> bool {
        MAIL_PATTERN.is_match(text)
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn rule_name(&self) -> &'static str {
        "mail"
    }

    fn parameters(&self) -> Option<Value> {
        Some(serde_json::json!({
            "pattern": MAIL_PATTERN.as_str(),
            "message": self.message,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_rule_accepts_valid_addresses() {
        let rule = MailRule::new();

        assert!(rule.validate("a@b.co"));
        assert!(rule.validate("user@example.com"));
        assert!(rule.validate("first.last+tag@sub.example.org"));
        assert!(rule.validate("USER@EXAMPLE.COM"));
    }

    #[test]
    fn test_mail_rule_rejects_invalid_addresses() {
        let rule = MailRule::new();

        assert!(!rule.validate(""));
        assert!(!rule.validate("a@b"));
        assert!(!rule.validate("a@@b.com"));
        assert!(!rule.validate("plainaddress"));
        assert!(!rule.validate("user@example.c"));
        assert!(!rule.validate(" user@example.com"));
        assert!(!rule.validate("user@example.com trailing"));
    }

    #[test]
    fn test_mail_rule_messages() {
        assert_eq!(Rule::message(&MailRule::new()), Some("Email is not valid."));

        let rule = MailRule::new().message("Enter your work address");
        assert_eq!(Rule::message(&rule), Some("Enter your work address"));
    }
}
