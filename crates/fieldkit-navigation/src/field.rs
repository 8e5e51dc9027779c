//! The field capability the navigation manager drives

use fieldkit_validation::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a registered field.
///
/// A fresh id is minted for every field on every registration, so ids handed
/// out by an earlier registration never address the current fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId(Uuid);

impl FieldId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// What the return/submit key of a field does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKey {
    /// Move to the following field
    Next,
    /// Finish editing the group
    Done,
}

/// An input widget as seen by the navigation manager.
///
/// Focus itself belongs to the host platform: `request_focus` and
/// `release_focus` ask the widget to take or drop it. Fields that carry
/// rules expose them through `as_validatable`.
pub trait FormField {
    /// Current content, `None` when the field holds nothing
    fn text(&self) -> Option<&str>;

    /// Validation capability, if this field has one
    fn as_validatable(&mut self) -> Option<&mut dyn Validatable> {
        None
    }

    fn request_focus(&mut self) {}

    fn release_focus(&mut self) {}

    /// Called at registration with the role of the field's return key
    fn set_return_key(&mut self, _key: ReturnKey) {}
}

impl<F> FormField for Box<F>
where
    F: FormField + ?Sized,
{
    fn text(&self) -> Option<&str> {
        (**self).text()
    }

    fn as_validatable(&mut self) -> Option<&mut dyn Validatable> {
        (**self).as_validatable()
    }

    fn request_focus(&mut self) {
        (**self).request_focus()
    }

    fn release_focus(&mut self) {
        (**self).release_focus()
    }

    fn set_return_key(&mut self, key: ReturnKey) {
        (**self).set_return_key(key)
    }
}
