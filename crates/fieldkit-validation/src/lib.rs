//! # fieldkit-validation
//!
//! Rule chains for text input fields. A [`RuleSet`] holds an ordered list of
//! [`Rule`]s; evaluation stops at the first rule that rejects the text and
//! reports that rule's message. Any type that owns a rule set and exposes its
//! current text can implement [`Validatable`] to get `validate()` for free.
//!
//! ```rust
//! use fieldkit_validation::{RuleSet, TextRules};
//!
//! let mut rules = RuleSet::new().ignoring_empty(true);
//! rules.add(TextRules::numbers_only());
//! rules.add(TextRules::max_length(2));
//!
//! assert!(rules.validate(None).is_valid());
//! assert!(rules.validate(Some("42")).is_valid());
//!
//! let result = rules.validate(Some("4a"));
//! assert_eq!(result.message(), Some("You must enter only numbers."));
//! ```

pub mod config;
pub mod error;
pub mod result;
pub mod rules;
pub mod traits;
pub mod validators;

// Re-exports for easy access
pub use config::{RuleSetConfig, RuleSpec};
pub use error::{RuleError, RuleResult};
pub use result::ValidationResult;
pub use rules::{Evaluation, RuleSet, TextRules};
pub use traits::{Rule, Validatable};

// Built-in rules
pub use validators::{
    custom::CustomRule,
    email::MailRule,
    length::{LengthBound, LengthRule},
    numeric::NumbersOnlyRule,
    pattern::PatternRule,
    required::NotEmptyRule,
};
