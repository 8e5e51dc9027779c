//! Rule sets and the built-in rule factory

use crate::error::RuleResult;
use crate::result::ValidationResult;
use crate::traits::Rule;
use crate::validators::*;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Ordered collection of rules owned by one field, plus its empty-input policy.
///
/// Rules run in insertion order and evaluation stops at the first rejection,
/// so order matters: put the cheapest or most fundamental checks first.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn Rule>>,
    ignore_empty: bool,
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rule_names())
            .field("ignore_empty", &self.ignore_empty)
            .finish()
    }
}

/// Outcome of running a rule set, before it is reduced to a [`ValidationResult`]
#[derive(Clone)]
pub enum Evaluation {
    /// Input was empty and the set ignores empty input; no rule ran
    Skipped,
    /// Every rule accepted the input
    Passed,
    /// The rule at `index` rejected the input; later rules did not run
    Failed { index: usize, rule: Arc<dyn Rule> },
}

impl fmt::Debug for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Skipped => write!(f, "Skipped"),
            Evaluation::Passed => write!(f, "Passed"),
            Evaluation::Failed { index, rule } => f
                .debug_struct("Failed")
                .field("index", index)
                .field("rule", &rule.rule_name())
                .finish(),
        }
    }
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Evaluation::Failed { .. })
    }

    /// Reduce to the value handed back to callers
    pub fn into_result(self) -> ValidationResult {
        match self {
            Evaluation::Failed { rule, .. } => {
                ValidationResult::failed(rule.message().map(str::to_string))
            }
            Evaluation::Skipped | Evaluation::Passed => ValidationResult::passed(),
        }
    }
}

impl RuleSet {
    /// Create an empty rule set that validates empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the empty-input policy, builder style
    pub fn ignoring_empty(mut self, ignore_empty: bool) -> Self {
        self.ignore_empty = ignore_empty;
        self
    }

    /// Append a rule, builder style
    pub fn with<R>(mut self, rule: R) -> Self
    where
        R: Rule + 'static,
    {
        self.add(rule);
        self
    }

    /// Append a rule to the end of the chain
    pub fn add<R>(&mut self, rule: R) -> &mut Self
    where
        R: Rule + 'static,
    {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Append an already shared rule
    pub fn add_shared(&mut self, rule: Arc<dyn Rule>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Remove every rule; the empty-input policy is kept
    pub fn remove_all_rules(&mut self) {
        self.rules.clear();
    }

    pub fn set_ignore_empty(&mut self, ignore_empty: bool) {
        self.ignore_empty = ignore_empty;
    }

    /// Whether empty or absent input bypasses the rules
    pub fn ignores_empty(&self) -> bool {
        self.ignore_empty
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> + '_ {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Names of the rules in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.rule_name()).collect()
    }

    /// Run the chain against `text`.
    ///
    /// Absent text is evaluated as the empty string unless the set ignores
    /// empty input, in which case no rule runs at all.
    pub fn evaluate(&self, text: Option<&str>) -> Evaluation {
        let text = text.unwrap_or_default();

        if self.ignore_empty && text.is_empty() {
            return Evaluation::Skipped;
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if !rule.validate(text) {
                trace!(rule = rule.rule_name(), index, "rule rejected input");
                return Evaluation::Failed {
                    index,
                    rule: Arc::clone(rule),
                };
            }
        }

        Evaluation::Passed
    }

    /// Run the chain and reduce the outcome to a [`ValidationResult`]
    pub fn validate(&self, text: Option<&str>) -> ValidationResult {
        self.evaluate(text).into_result()
    }
}

/// Factory for the built-in rules.
///
/// Every rule carries a default message which can be replaced with
/// `.message(...)` on the returned value.
#[derive(Debug, Clone, Copy)]
pub struct TextRules;

impl TextRules {
    /// Email address format
    pub fn mail() -> MailRule {
        MailRule::new()
    }

    /// US zipcode, `12345` or `12345-6789`
    pub fn zipcode() -> PatternRule {
        PatternRule::zipcode()
    }

    /// Exactly `length` characters
    pub fn exact_length(length: usize) -> LengthRule {
        LengthRule::exact(length)
    }

    /// At least `length` characters
    pub fn min_length(length: usize) -> LengthRule {
        LengthRule::min(length)
    }

    /// At most `length` characters
    pub fn max_length(length: usize) -> LengthRule {
        LengthRule::max(length)
    }

    /// Rejects text made only of whitespace and newlines
    pub fn not_empty() -> NotEmptyRule {
        NotEmptyRule::new()
    }

    /// Decimal digits only
    pub fn numbers_only() -> NumbersOnlyRule {
        NumbersOnlyRule::new()
    }

    /// Full match against a user-supplied regular expression
    pub fn pattern(pattern: &str) -> RuleResult<PatternRule> {
        PatternRule::new(pattern)
    }

    /// Host-defined predicate
    pub fn custom<F>(name: impl Into<String>, predicate: F) -> CustomRule
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        CustomRule::new(name, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_rule(
        name: &str,
        outcome: bool,
        message: &str,
    ) -> (CustomRule, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let rule = TextRules::custom(name, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            outcome
        })
        .message(message);
        (rule, calls)
    }

    #[test]
    fn test_first_failing_rule_wins_and_short_circuits() {
        let (first, first_calls) = counting_rule("first", true, "first failed");
        let (second, second_calls) = counting_rule("second", false, "second failed");
        let (third, third_calls) = counting_rule("third", false, "third failed");

        let rules = RuleSet::new().with(first).with(second).with(third);
        let result = rules.validate(Some("anything"));

        assert!(!result.is_valid());
        assert_eq!(result.message(), Some("second failed"));
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
        assert_eq!(third_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_evaluate_reports_failing_index() {
        let rules = RuleSet::new()
            .with(TextRules::not_empty())
            .with(TextRules::numbers_only())
            .with(TextRules::max_length(2));

        match rules.evaluate(Some("123")) {
            Evaluation::Failed { index, rule } => {
                assert_eq!(index, 2);
                assert_eq!(rule.rule_name(), "max_length");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_ignore_empty_never_invokes_rules() {
        let (rule, calls) = counting_rule("never", false, "never");
        let rules = RuleSet::new().ignoring_empty(true).with(rule);

        assert!(matches!(rules.evaluate(None), Evaluation::Skipped));
        assert!(rules.validate(Some("")).is_valid());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_absent_text_runs_rules_on_empty_string() {
        let (rule, calls) = counting_rule("sees-empty", true, "unused");
        let rules = RuleSet::new().with(rule).with(TextRules::not_empty());

        let result = rules.validate(None);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(result.message(), Some("Space only text is not valid."));
    }

    #[test]
    fn test_empty_rule_set_passes() {
        let rules = RuleSet::new();
        assert!(matches!(rules.evaluate(Some("x")), Evaluation::Passed));
        assert!(rules.validate(None).is_valid());
    }

    #[test]
    fn test_remove_all_rules_keeps_policy() {
        let mut rules = RuleSet::new().ignoring_empty(true);
        rules.add(TextRules::mail()).add(TextRules::zipcode());
        assert_eq!(rules.rule_names(), vec!["mail", "zipcode"]);

        rules.remove_all_rules();

        assert!(rules.is_empty());
        assert!(rules.ignores_empty());
        assert!(rules.validate(Some("whatever")).is_valid());
    }

    #[test]
    fn test_failing_rule_without_message() {
        let rules = RuleSet::new().with(TextRules::custom("silent", |_| false));
        let result = rules.validate(Some("x"));

        assert!(!result.is_valid());
        assert!(result.message().is_none());
    }

    #[test]
    fn test_age_field_chain() {
        let rules = RuleSet::new()
            .ignoring_empty(true)
            .with(TextRules::numbers_only())
            .with(TextRules::min_length(1))
            .with(TextRules::max_length(2));

        assert!(rules.validate(None).is_valid());
        assert!(rules.validate(Some("7")).is_valid());
        assert!(rules.validate(Some("42")).is_valid());
        assert_eq!(
            rules.validate(Some("123")).message(),
            Some("Must be maximum of 2 characters long.")
        );
        assert_eq!(
            rules.validate(Some("4a")).message(),
            Some("You must enter only numbers.")
        );
    }
}
