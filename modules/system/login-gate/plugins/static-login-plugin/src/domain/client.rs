//! Client implementation for the static login backend plugin.
//!
//! Implements `LoginBackendClient` using the domain service.

use async_trait::async_trait;
use login_gate_sdk::{LoginBackendClient, LoginBackendError, VerifyOutcome};

use super::service::Service;

#[async_trait]
impl LoginBackendClient for Service {
    async fn verify(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<VerifyOutcome, LoginBackendError> {
        Ok(Service::verify(self, username, secret))
    }
}
