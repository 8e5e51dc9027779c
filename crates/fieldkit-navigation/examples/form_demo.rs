//! Headless sign-up form: name, email and an optional age field
//!
//! Run with `RUST_LOG=debug` to see the manager's transitions.

use fieldkit_navigation::{
    BarState, FieldId, FormDelegate, FormField, NavigationManager, ReturnKey, TextField,
    ValidatableField,
};
use fieldkit_validation::{Rule, RuleSet, TextRules, Validatable, ValidationResult};
use tracing_subscriber::EnvFilter;

/// Field that shows an error marker next to its text when validation fails
struct MarkedField {
    text: Option<String>,
    rules: RuleSet,
    error_marker: bool,
}

impl MarkedField {
    fn new(rules: RuleSet) -> Self {
        Self {
            text: None,
            rules,
            error_marker: false,
        }
    }

    fn render(&self) -> String {
        let text = self.text.as_deref().unwrap_or("");
        if self.error_marker {
            format!("[{}] (!)", text)
        } else {
            format!("[{}]", text)
        }
    }
}

impl Validatable for MarkedField {
    fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    fn rule_set_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }

    fn text_to_validate(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn validation_did_fail(&mut self, _rule: &dyn Rule) {
        self.error_marker = true;
    }

    fn validation_did_pass(&mut self) {
        self.error_marker = false;
    }
}

impl FormField for MarkedField {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn as_validatable(&mut self) -> Option<&mut dyn Validatable> {
        Some(self)
    }

    fn set_return_key(&mut self, key: ReturnKey) {
        println!("  age field return key: {:?}", key);
    }
}

/// Enum over the field kinds on this form, so the host keeps typed access
enum SignupField {
    Name(TextField),
    Mail(ValidatableField),
    Age(MarkedField),
}

impl SignupField {
    fn set_text(&mut self, text: &str) {
        let text = Some(text.to_string());
        match self {
            SignupField::Name(field) => field.set_text(text),
            SignupField::Mail(field) => field.set_text(text),
            SignupField::Age(field) => field.text = text,
        }
    }
}

impl FormField for SignupField {
    fn text(&self) -> Option<&str> {
        match self {
            SignupField::Name(field) => field.text(),
            SignupField::Mail(field) => FormField::text(field),
            SignupField::Age(field) => FormField::text(field),
        }
    }

    fn as_validatable(&mut self) -> Option<&mut dyn Validatable> {
        match self {
            SignupField::Name(field) => field.as_validatable(),
            SignupField::Mail(field) => field.as_validatable(),
            SignupField::Age(field) => field.as_validatable(),
        }
    }

    fn request_focus(&mut self) {
        match self {
            SignupField::Name(field) => field.request_focus(),
            SignupField::Mail(field) => field.request_focus(),
            SignupField::Age(field) => field.request_focus(),
        }
    }

    fn release_focus(&mut self) {
        match self {
            SignupField::Name(field) => field.release_focus(),
            SignupField::Mail(field) => field.release_focus(),
            SignupField::Age(field) => field.release_focus(),
        }
    }

    fn set_return_key(&mut self, key: ReturnKey) {
        match self {
            SignupField::Name(field) => field.set_return_key(key),
            SignupField::Mail(field) => field.set_return_key(key),
            SignupField::Age(field) => field.set_return_key(key),
        }
    }
}

/// Colors the email text red while it is invalid
#[derive(Default)]
struct SignupScreen {
    mail_field: Option<FieldId>,
}

impl FormDelegate for SignupScreen {
    fn focus_changed_to(&mut self, field: FieldId) {
        println!("  focus -> {}", field);
    }

    fn text_did_change(&mut self, field: FieldId, result: Option<&ValidationResult>) {
        let Some(result) = result else { return };
        if Some(field) != self.mail_field {
            return;
        }
        let color = if result.is_valid() { "label" } else { "red" };
        println!("  email text color: {}", color);
    }

    fn did_end_editing(&mut self) {
        println!("  form finished");
    }

    fn bar_state_changed(&mut self, state: BarState) {
        println!(
            "  bar: prev {} / next {}",
            if state.prev_enabled { "on" } else { "off" },
            if state.next_enabled { "on" } else { "off" },
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("fieldkit sign-up demo");
    println!("=====================\n");

    let mail = ValidatableField::new().with_rules(RuleSet::new().with(TextRules::mail()));
    let age = MarkedField::new(
        RuleSet::new()
            .ignoring_empty(true)
            .with(TextRules::numbers_only())
            .with(TextRules::min_length(1))
            .with(TextRules::max_length(2)),
    );

    let mut manager = NavigationManager::with_delegate(SignupScreen::default());
    let ids = manager.register(
        vec![
            SignupField::Name(TextField::new()),
            SignupField::Mail(mail),
            SignupField::Age(age),
        ],
        true,
    );
    manager.delegate_mut().mail_field = Some(ids[1]);

    println!("Typing a name:");
    manager.focus_begin(ids[0]);
    type_text(&mut manager, ids[0], "Jane");
    manager.submit_on_field(ids[0]);

    println!("\nTyping an email:");
    for partial in ["jane", "jane@", "jane@example.com"] {
        type_text(&mut manager, ids[1], partial);
    }
    manager.go_next();

    println!("\nTyping an age:");
    type_text(&mut manager, ids[2], "1x");
    if let Some(SignupField::Age(field)) = manager.field(ids[2]) {
        println!("  age field renders as {}", field.render());
    }
    type_text(&mut manager, ids[2], "31");
    if let Some(SignupField::Age(field)) = manager.field(ids[2]) {
        println!("  age field renders as {}", field.render());
    }

    println!("\nSubmitting:");
    let failures = manager.validate_all();
    if failures.is_empty() {
        println!("  all fields valid");
    }
    for (field, result) in failures {
        println!("  {}: {}", field, result);
    }
    manager.submit_on_field(ids[2]);
}

fn type_text(
    manager: &mut NavigationManager<SignupField, SignupScreen>,
    id: FieldId,
    text: &str,
) {
    if let Some(field) = manager.field_mut(id) {
        field.set_text(text);
    }
    manager.text_changed(id);
}
