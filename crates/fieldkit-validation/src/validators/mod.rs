//! Built-in rules for common text fields

pub mod custom;
pub mod email;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod required;

pub use custom::CustomRule;
pub use email::MailRule;
pub use length::{LengthBound, LengthRule};
pub use numeric::NumbersOnlyRule;
pub use pattern::PatternRule;
pub use required::NotEmptyRule;
