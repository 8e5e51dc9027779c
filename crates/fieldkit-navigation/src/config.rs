//! Registration configuration

use crate::error::NavigationResult;
use serde::{Deserialize, Serialize};

/// Options applied when a group of fields is registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Track previous/next/done control enablement for the host to render
    #[serde(default = "default_true")]
    pub includes_bar: bool,

    /// Tell each field whether its return key means "next" or "done"
    #[serde(default = "default_true")]
    pub assign_return_keys: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            includes_bar: true,
            assign_return_keys: true,
        }
    }
}

impl NavigationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn includes_bar(mut self, includes_bar: bool) -> Self {
        self.includes_bar = includes_bar;
        self
    }

    pub fn assign_return_keys(mut self, assign: bool) -> Self {
        self.assign_return_keys = assign;
        self
    }

    /// Parse a configuration from JSON; missing keys take their defaults
    pub fn from_json(json: &str) -> NavigationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
