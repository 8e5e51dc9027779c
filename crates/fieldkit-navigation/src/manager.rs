//! Sequential navigation over a group of fields

use crate::config::NavigationConfig;
use crate::delegate::{BarState, FormDelegate, NoopDelegate};
use crate::field::{FieldId, FormField, ReturnKey};
use fieldkit_validation::ValidationResult;
use std::fmt;
use tracing::debug;

struct Entry<F> {
    id: FieldId,
    field: F,
}

/// Tracks which of an ordered group of fields is active, moves focus between
/// them and reports what happens to a [`FormDelegate`].
///
/// The host forwards its raw input events (`text_changed`, `focus_begin`,
/// `focus_end`, `submit_on_field`) for every registered field and may drive
/// navigation directly with `go_next`, `go_previous` and `complete`.
/// Events for unknown fields and navigation without an active field are
/// ignored.
///
/// Focus moves started by the manager report both sides of the transition
/// themselves. If the platform echoes the same transition back as
/// `focus_end`/`focus_begin`, those echoes are recognised and dropped, so
/// each transition reaches the delegate once.
pub struct NavigationManager<F, D = NoopDelegate> {
    items: Vec<Entry<F>>,
    /// Index into `items`; cleared whenever `items` is replaced
    active: Option<usize>,
    /// Whether the active field currently holds focus
    focused: bool,
    includes_bar: bool,
    delegate: D,
}

impl<F, D> fmt::Debug for NavigationManager<F, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationManager")
            .field("fields", &self.items.len())
            .field("active", &self.active)
            .field("focused", &self.focused)
            .field("includes_bar", &self.includes_bar)
            .finish()
    }
}

impl<F> NavigationManager<F, NoopDelegate>
where
    F: FormField,
{
    /// Create a manager without a delegate
    pub fn new() -> Self {
        Self::with_delegate(NoopDelegate)
    }
}

impl<F> Default for NavigationManager<F, NoopDelegate>
where
    F: FormField,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F, D> NavigationManager<F, D>
where
    F: FormField,
    D: FormDelegate,
{
    pub fn with_delegate(delegate: D) -> Self {
        Self {
            items: Vec::new(),
            active: None,
            focused: false,
            includes_bar: true,
            delegate,
        }
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Replace the delegate, returning the previous one
    pub fn replace_delegate(&mut self, delegate: D) -> D {
        std::mem::replace(&mut self.delegate, delegate)
    }

    // Registration

    /// Register `fields` in navigation order, replacing any earlier group.
    ///
    /// Returns the id of each field, in the same order. A field focused in
    /// the previous group is asked to release focus and the active field is
    /// cleared.
    pub fn register(&mut self, fields: Vec<F>, includes_bar: bool) -> Vec<FieldId> {
        let config = NavigationConfig::default().includes_bar(includes_bar);
        self.register_with(fields, &config)
    }

    /// Register `fields` using explicit configuration
    pub fn register_with(&mut self, fields: Vec<F>, config: &NavigationConfig) -> Vec<FieldId> {
        self.release_active();

        let count = fields.len();
        self.items = fields
            .into_iter()
            .enumerate()
            .map(|(index, mut field)| {
                if config.assign_return_keys {
                    let key = if index + 1 == count {
                        ReturnKey::Done
                    } else {
                        ReturnKey::Next
                    };
                    field.set_return_key(key);
                }
                Entry {
                    id: FieldId::new(),
                    field,
                }
            })
            .collect();
        self.includes_bar = config.includes_bar;

        debug!(
            fields = count,
            includes_bar = config.includes_bar,
            "registered fields"
        );

        self.field_ids()
    }

    /// Ids of the registered fields in navigation order
    pub fn field_ids(&self) -> Vec<FieldId> {
        self.items.iter().map(|entry| entry.id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index_of(&self, id: FieldId) -> Option<usize> {
        self.items.iter().position(|entry| entry.id == id)
    }

    pub fn field(&self, id: FieldId) -> Option<&F> {
        self.index_of(id).map(|index| &self.items[index].field)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut F> {
        let index = self.index_of(id)?;
        Some(&mut self.items[index].field)
    }

    // State

    /// The active field, if any
    pub fn active_field(&self) -> Option<FieldId> {
        self.active.map(|index| self.items[index].id)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Whether the active field currently holds focus
    pub fn has_focus(&self) -> bool {
        self.active.is_some() && self.focused
    }

    pub fn includes_bar(&self) -> bool {
        self.includes_bar
    }

    /// Previous/next enablement, `None` when the bar is disabled.
    /// Both controls are disabled while no field is active.
    pub fn bar_state(&self) -> Option<BarState> {
        if !self.includes_bar {
            return None;
        }
        Some(
            self.active
                .map(|index| BarState::at(index, self.items.len()))
                .unwrap_or_default(),
        )
    }

    // Host events

    /// The platform gave focus to `id`
    pub fn focus_begin(&mut self, id: FieldId) {
        let Some(index) = self.index_of(id) else {
            debug!(field = %id, "focus_begin for unregistered field ignored");
            return;
        };

        if self.active == Some(index) && self.focused {
            return;
        }

        // Focus arrived before the platform reported the old field losing it
        if let Some(previous) = self.active {
            if std::mem::take(&mut self.focused) {
                self.delegate.focus_changed_from(self.items[previous].id);
            }
        }

        self.activate(index);
    }

    /// The platform took focus away from `id`.
    ///
    /// The field stays active; only a new `focus_begin`, a navigation move
    /// or `complete` changes the active field.
    pub fn focus_end(&mut self, id: FieldId) {
        let Some(index) = self.index_of(id) else {
            debug!(field = %id, "focus_end for unregistered field ignored");
            return;
        };

        if self.active != Some(index) || !self.focused {
            return;
        }

        self.focused = false;
        debug!(field = %id, "focus ended");
        self.delegate.focus_changed_from(id);
    }

    /// Text of `id` changed: validate it if it can be validated and report
    /// the result.
    pub fn text_changed(&mut self, id: FieldId) -> Option<ValidationResult> {
        let Some(index) = self.index_of(id) else {
            debug!(field = %id, "text_changed for unregistered field ignored");
            return None;
        };

        let result = self.items[index]
            .field
            .as_validatable()
            .map(|field| field.validate());
        self.delegate.text_did_change(id, result.as_ref());
        result
    }

    /// Return/submit key pressed on `id`: finish on the last field, move on
    /// otherwise.
    pub fn submit_on_field(&mut self, id: FieldId) {
        let Some(index) = self.index_of(id) else {
            debug!(field = %id, "submit for unregistered field ignored");
            return;
        };

        if index + 1 == self.items.len() {
            self.complete();
        } else {
            self.go_next();
        }
    }

    // Navigation

    /// Move focus to the field after the active one
    pub fn go_next(&mut self) {
        match self.active {
            Some(index) if index + 1 < self.items.len() => self.move_focus(index + 1),
            Some(_) => debug!("go_next ignored: active field is the last"),
            None => debug!("go_next ignored: no active field"),
        }
    }

    /// Move focus to the field before the active one
    pub fn go_previous(&mut self) {
        match self.active {
            Some(index) if index > 0 => self.move_focus(index - 1),
            Some(_) => debug!("go_previous ignored: active field is the first"),
            None => debug!("go_previous ignored: no active field"),
        }
    }

    /// Finish editing: drop focus from the active field and notify the host.
    /// This is also the bar's "done" action.
    pub fn complete(&mut self) {
        self.release_active();
        debug!("editing completed");
        self.delegate.did_end_editing();
    }

    // Validation

    /// Validate every field that can be validated, in navigation order, and
    /// return the failures only.
    pub fn validate_all(&mut self) -> Vec<(FieldId, ValidationResult)> {
        self.items
            .iter_mut()
            .filter_map(|entry| {
                let result = entry.field.as_validatable()?.validate();
                (!result.is_valid()).then_some((entry.id, result))
            })
            .collect()
    }

    // Internals

    fn move_focus(&mut self, target: usize) {
        if let Some(current) = self.active {
            if self.focused {
                self.focused = false;
                self.delegate.focus_changed_from(self.items[current].id);
            }
        }

        self.items[target].field.request_focus();
        self.activate(target);
    }

    fn activate(&mut self, index: usize) {
        let id = self.items[index].id;
        self.active = Some(index);
        self.focused = true;

        debug!(field = %id, index, "focus began");
        self.delegate.focus_changed_to(id);

        if self.includes_bar {
            let state = BarState::at(index, self.items.len());
            self.delegate.bar_state_changed(state);
        }
    }

    /// Release focus from the active field, if it has it, and clear it
    fn release_active(&mut self) {
        let Some(index) = self.active.take() else {
            return;
        };

        if std::mem::take(&mut self.focused) {
            let entry = &mut self.items[index];
            entry.field.release_focus();
            self.delegate.focus_changed_from(entry.id);
        }

        if self.includes_bar {
            self.delegate.bar_state_changed(BarState::default());
        }
    }
}
