//! Length-based rules
//!
//! Length is counted in Unicode scalar values (`str::chars`) by every rule
//! here, so exact, minimum and maximum bounds always agree with each other.

use crate::traits::Rule;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which bound a [`LengthRule`] enforces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthBound {
    Exact(usize),
    Min(usize),
    Max(usize),
}

impl LengthBound {
    fn accepts(self, length: usize) -> bool {
        match self {
            LengthBound::Exact(exact) => length == exact,
            LengthBound::Min(min) => length >= min,
            LengthBound::Max(max) => length <= max,
        }
    }

    fn default_message(self) -> String {
        match self {
            LengthBound::Exact(exact) => format!("Must be exactly {} characters long.", exact),
            LengthBound::Min(min) => format!("Must be at least {} characters long.", min),
            LengthBound::Max(max) => format!("Must be maximum of {} characters long.", max),
        }
    }
}

/// Rule for a character count constraint
#[derive(Debug, Clone)]
pub struct LengthRule {
    bound: LengthBound,
    message: String,
}

impl LengthRule {
    pub fn new(bound: LengthBound) -> Self {
        Self {
            bound,
            message: bound.default_message(),
        }
    }

    /// Exactly `length` characters
    pub fn exact(length: usize) -> Self {
        Self::new(LengthBound::Exact(length))
    }

    /// At least `length` characters
    pub fn min(length: usize) -> Self {
        Self::new(LengthBound::Min(length))
    }

    /// At most `length` characters
    pub fn max(length: usize) -> Self {
        Self::new(LengthBound::Max(length))
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn bound(&self) -> LengthBound {
        self.bound
    }
}

impl Rule for LengthRule {
    fn validate(&self, text: &str) -> bool {
        self.bound.accepts(text.chars().count())
    }

    fn message(&self) -> Option<&str> {
        Some(&self.message)
    }

    fn rule_name(&self) -> &'static str {
        match self.bound {
            LengthBound::Exact(_) => "exact_length",
            LengthBound::Min(_) => "min_length",
            LengthBound::Max(_) => "max_length",
        }
    }

    fn parameters(&self) -> Option<Value> {
        let length = match self.bound {
            LengthBound::Exact(n) | LengthBound::Min(n) | LengthBound::Max(n) => n,
        };

        Some(serde_json::json!({
            "length": length,
            "message": self.message,
        }))
    }
}
