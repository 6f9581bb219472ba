//! Backend API trait for login backend implementations.
//!
//! Backends implement this trait to verify credentials. The gate never
//! owns a backend: it holds a shared handle only while the backend is bound.

use async_trait::async_trait;

use crate::error::LoginBackendError;
use crate::models::VerifyOutcome;

/// Backend API trait for login backend implementations.
#[async_trait]
pub trait LoginBackendClient: Send + Sync {
    /// Verify the credentials and report the backend's result code.
    ///
    /// A rejection is a successful call returning a non-accepting
    /// [`VerifyOutcome`]; errors are reserved for failing to decide.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backend cannot reach its credential store
    /// - `Internal` for unexpected errors
    async fn verify(&self, username: &str, secret: &str)
    -> Result<VerifyOutcome, LoginBackendError>;
}
