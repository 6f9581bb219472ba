//! Configuration for the login gate.

use std::path::PathBuf;

use login_gate_sdk::IdentityArtifact;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::DomainError;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoginGateConfig {
    /// Vendor selector used to pick a backend.
    ///
    /// The directory binds the backend registered under this vendor with
    /// the lowest priority.
    pub vendor: String,

    /// Identity artifact given inline (e.g. PEM text).
    pub identity_pem: Option<SecretString>,

    /// Path of a file holding the identity artifact.
    pub identity_path: Option<PathBuf>,
}

impl Default for LoginGateConfig {
    fn default() -> Self {
        Self {
            vendor: "hyperspot".to_owned(),
            identity_pem: None,
            identity_path: None,
        }
    }
}

impl LoginGateConfig {
    /// Load the identity artifact from exactly one of `identity_pem` or
    /// `identity_path`.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if both or neither source is set, or the file cannot be read
    /// - `MissingIdentityArtifact` if the artifact is empty
    pub fn load_identity(&self) -> Result<IdentityArtifact, DomainError> {
        let artifact = match (&self.identity_pem, &self.identity_path) {
            (Some(_), Some(_)) => {
                return Err(DomainError::InvalidConfig(
                    "`identity_pem` and `identity_path` are mutually exclusive".to_owned(),
                ));
            }
            (None, None) => {
                return Err(DomainError::InvalidConfig(
                    "one of `identity_pem` or `identity_path` is required".to_owned(),
                ));
            }
            (Some(pem), None) => IdentityArtifact::from(pem.expose_secret().to_owned()),
            (None, Some(path)) => {
                let payload = std::fs::read(path).map_err(|e| {
                    DomainError::InvalidConfig(format!(
                        "failed to read identity artifact '{}': {e}",
                        path.display()
                    ))
                })?;
                IdentityArtifact::from(payload)
            }
        };

        if artifact.is_empty() {
            return Err(DomainError::MissingIdentityArtifact);
        }
        Ok(artifact)
    }
}
