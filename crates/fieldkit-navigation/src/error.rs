//! Navigation error types
//!
//! Misuse of the manager at runtime (unknown field ids, navigating with no
//! active field) is not an error; those calls are ignored. Errors only come
//! from loading configuration.

use thiserror::Error;

pub type NavigationResult<T> = Result<T, NavigationError>;

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("invalid navigation configuration: {0}")]
    Config(#[from] serde_json::Error),
}
