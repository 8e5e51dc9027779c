//! # fieldkit-navigation
//!
//! Groups input fields, moves focus through them in order and validates them
//! as the user types. The host owns the widgets and the platform focus
//! machinery; it wraps each widget in [`FormField`], registers the group with
//! a [`NavigationManager`] and forwards the widget events it receives.
//!
//! ```rust
//! use fieldkit_navigation::{FormEvent, NavigationManager, ValidatableField};
//! use fieldkit_validation::{RuleSet, TextRules};
//!
//! let mail = ValidatableField::new().with_rules(RuleSet::new().with(TextRules::mail()));
//! let zip = ValidatableField::new().with_rules(RuleSet::new().with(TextRules::zipcode()));
//!
//! let mut manager = NavigationManager::with_delegate(Vec::<FormEvent>::new());
//! let ids = manager.register(vec![mail, zip], true);
//!
//! manager.focus_begin(ids[0]);
//! manager.go_next();
//! assert_eq!(manager.active_field(), Some(ids[1]));
//!
//! // Nothing typed yet: both fields fail
//! let failures = manager.validate_all();
//! assert_eq!(failures.len(), 2);
//! assert_eq!(failures[1].1.message(), Some("Zipcode is not valid."));
//! ```

pub mod config;
pub mod delegate;
pub mod error;
pub mod field;
pub mod fields;
pub mod manager;

pub use config::NavigationConfig;
pub use delegate::{BarState, FormDelegate, FormEvent, NoopDelegate};
pub use error::{NavigationError, NavigationResult};
pub use field::{FieldId, FormField, ReturnKey};
pub use fields::{TextField, ValidatableField, ValidationState};
pub use manager::NavigationManager;
