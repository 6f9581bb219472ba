//! Local (in-process) client for the login gate.

use std::sync::Arc;

use async_trait::async_trait;
use login_gate_sdk::{IdentityArtifact, LoginGateClient, LoginGateError};

use super::{DomainError, Service};

/// Local client wrapping the service.
///
/// Handed to the transport layer as `Arc<dyn LoginGateClient>`.
pub struct LoginGateLocalClient {
    svc: Arc<Service>,
}

impl LoginGateLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> LoginGateError {
    match &e {
        // Recoverable; the service already emits a throttled warning.
        DomainError::Unavailable => {
            tracing::debug!(operation = op, error = %e, "login_gate call refused");
        }
        _ => tracing::error!(operation = op, error = %e, "login_gate call failed"),
    }
    e.into()
}

#[async_trait]
impl LoginGateClient for LoginGateLocalClient {
    async fn authenticate(&self, username: &str, secret: &str) -> Result<bool, LoginGateError> {
        self.svc
            .authenticate(username, secret)
            .await
            .map_err(|e| log_and_convert("authenticate", e))
    }

    fn identity_artifact(&self) -> IdentityArtifact {
        self.svc.identity_artifact()
    }
}
