//! Error types for the login gate.

use thiserror::Error;

/// Errors that can occur when using the login gate API.
#[derive(Debug, Error)]
pub enum LoginGateError {
    /// No login backend is bound. Nobody can log in until one appears.
    #[error("login backend is not available")]
    Unavailable,

    /// The backend was reached but failed to reach a decision.
    #[error("login backend failed: {0}")]
    Backend(String),

    /// The gate was configured with invalid input.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors a login backend may report instead of a result code.
#[derive(Debug, Error)]
pub enum LoginBackendError {
    /// The backend cannot reach its own credential store.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
