//! Domain errors for the login gate.

use login_gate_sdk::{LoginBackendError, LoginGateError};

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("identity artifact is missing or empty")]
    MissingIdentityArtifact,

    #[error("login backend is not available")]
    Unavailable,

    #[error("login backend failed: {0}")]
    Backend(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<LoginBackendError> for DomainError {
    fn from(e: LoginBackendError) -> Self {
        Self::Backend(e.to_string())
    }
}

impl From<DomainError> for LoginGateError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Unavailable => Self::Unavailable,
            DomainError::Backend(msg) => Self::Backend(msg),
            DomainError::MissingIdentityArtifact => {
                Self::InvalidConfig("identity artifact is missing or empty".to_owned())
            }
            DomainError::InvalidConfig(msg) => Self::InvalidConfig(msg),
        }
    }
}
