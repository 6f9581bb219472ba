//! Public API trait for the login gate.
//!
//! The transport layer calls this trait once per login attempt. The gate
//! implements it and delegates to whichever backend is currently bound.

use async_trait::async_trait;

use crate::error::LoginGateError;
use crate::models::IdentityArtifact;

/// Public API trait for the login gate.
///
/// ```ignore
/// let accepted = gate.authenticate("alice", "pw").await?;
/// let host_key = gate.identity_artifact();
/// ```
#[async_trait]
pub trait LoginGateClient: Send + Sync {
    /// Verify a username/secret pair against the currently bound backend.
    ///
    /// Empty strings are forwarded unchanged; rejecting them is the
    /// backend's decision.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if no backend is bound right now
    /// - `Backend` if the backend was reached but failed to decide
    async fn authenticate(&self, username: &str, secret: &str) -> Result<bool, LoginGateError>;

    /// The server identity artifact supplied at construction, unmodified.
    fn identity_artifact(&self) -> IdentityArtifact;
}
