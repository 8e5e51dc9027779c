//! Notifications from the manager to the host

use crate::field::FieldId;
use fieldkit_validation::ValidationResult;
use serde::{Deserialize, Serialize};

/// Enablement of the previous/next controls for the active field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl BarState {
    /// State for the field at `index` among `len` fields
    pub(crate) fn at(index: usize, len: usize) -> Self {
        Self {
            prev_enabled: index > 0,
            next_enabled: index + 1 < len,
        }
    }
}

/// Host-side listener. Every method defaults to a no-op; implement the ones
/// you care about. Calls are made synchronously, in event order.
pub trait FormDelegate {
    /// `field` lost focus
    fn focus_changed_from(&mut self, _field: FieldId) {}

    /// `field` gained focus
    fn focus_changed_to(&mut self, _field: FieldId) {}

    /// Text of `field` changed; `result` is `None` when the field has no
    /// validation capability
    fn text_did_change(&mut self, _field: FieldId, _result: Option<&ValidationResult>) {}

    /// Editing of the group finished
    fn did_end_editing(&mut self) {}

    /// Previous/next enablement changed; only sent when the bar is enabled
    fn bar_state_changed(&mut self, _state: BarState) {}
}

/// Delegate that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDelegate;

impl FormDelegate for NoopDelegate {}

/// A delegate notification captured as data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    FocusChangedFrom {
        field: FieldId,
    },
    FocusChangedTo {
        field: FieldId,
    },
    TextDidChange {
        field: FieldId,
        result: Option<ValidationResult>,
    },
    DidEndEditing,
    BarStateChanged {
        state: BarState,
    },
}

/// Records every notification in order
impl FormDelegate for Vec<FormEvent> {
    fn focus_changed_from(&mut self, field: FieldId) {
        self.push(FormEvent::FocusChangedFrom { field });
    }

    fn focus_changed_to(&mut self, field: FieldId) {
        self.push(FormEvent::FocusChangedTo { field });
    }

    fn text_did_change(&mut self, field: FieldId, result: Option<&ValidationResult>) {
        self.push(FormEvent::TextDidChange {
            field,
            result: result.cloned(),
        });
    }

    fn did_end_editing(&mut self) {
        self.push(FormEvent::DidEndEditing);
    }

    fn bar_state_changed(&mut self, state: BarState) {
        self.push(FormEvent::BarStateChanged { state });
    }
}

impl<D> FormDelegate for &mut D
where
    D: FormDelegate + ?Sized,
{
    fn focus_changed_from(&mut self, field: FieldId) {
        (**self).focus_changed_from(field)
    }

    fn focus_changed_to(&mut self, field: FieldId) {
        (**self).focus_changed_to(field)
    }

    fn text_did_change(&mut self, field: FieldId, result: Option<&ValidationResult>) {
        (**self).text_did_change(field, result)
    }

    fn did_end_editing(&mut self) {
        (**self).did_end_editing()
    }

    fn bar_state_changed(&mut self, state: BarState) {
        (**self).bar_state_changed(state)
    }
}
