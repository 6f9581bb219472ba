//! Domain service for the login gate.

use std::sync::{Arc, Weak};
use std::time::Duration;

use login_gate_sdk::{
    AuthDecision, BackendDiscovery, BindingListener, IdentityArtifact, LoginBackendClient,
};
use tracing::{debug, info, trace, warn};

use super::binding::BindingSlot;
use super::error::DomainError;
use super::throttle::ThrottledLog;

/// Throttle interval for unavailable backend warnings.
const UNAVAILABLE_LOG_THROTTLE: Duration = Duration::from_secs(10);

/// Login gate service.
///
/// Holds the server identity artifact and the binding to the live login
/// backend. Starts unbound; becomes usable once the discovery mechanism it
/// subscribed to reports a backend.
pub struct Service {
    identity: IdentityArtifact,
    binding: BindingSlot,
    unavailable_log_throttle: ThrottledLog,
}

impl Service {
    /// Create the service and subscribe it to `discovery`.
    ///
    /// Does not wait for a backend. If `discovery` already has one, it is
    /// bound before this returns.
    ///
    /// # Errors
    ///
    /// `MissingIdentityArtifact` if `identity` is empty.
    pub fn new(
        identity: IdentityArtifact,
        discovery: &dyn BackendDiscovery,
    ) -> Result<Arc<Self>, DomainError> {
        if identity.is_empty() {
            return Err(DomainError::MissingIdentityArtifact);
        }

        let svc = Arc::new(Self {
            identity,
            binding: BindingSlot::new(),
            unavailable_log_throttle: ThrottledLog::new(UNAVAILABLE_LOG_THROTTLE),
        });

        let weak: Weak<Self> = Arc::downgrade(&svc);
        let listener: Weak<dyn BindingListener> = weak;
        discovery.subscribe(listener);

        Ok(svc)
    }

    /// Verify credentials against the bound backend.
    ///
    /// The binding is read under the slot lock; the backend call runs
    /// outside it against the captured handle. A backend unbound while the
    /// call is in flight does not affect that call.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if no backend is bound
    /// - `Backend` if the backend failed to decide
    #[tracing::instrument(skip_all, fields(username = %username))]
    pub async fn decide(&self, username: &str, secret: &str) -> Result<AuthDecision, DomainError> {
        let Some(backend) = self.binding.current() else {
            if self.unavailable_log_throttle.should_log() {
                warn!(
                    username,
                    "Cannot authenticate user, login backend is missing"
                );
            }
            return Err(DomainError::Unavailable);
        };

        let outcome = backend.verify(username, secret).await?;
        debug!(username, outcome = %outcome, "Authentication result");

        Ok(AuthDecision::from(outcome))
    }

    /// Boolean form of [`decide`](Self::decide).
    ///
    /// # Errors
    ///
    /// Same as [`decide`](Self::decide).
    pub async fn authenticate(&self, username: &str, secret: &str) -> Result<bool, DomainError> {
        self.decide(username, secret)
            .await
            .map(AuthDecision::is_accepted)
    }

    /// The identity artifact given at construction.
    #[must_use]
    pub fn identity_artifact(&self) -> IdentityArtifact {
        self.identity.clone()
    }

    #[must_use]
    pub fn identity_artifact_bytes(&self) -> &[u8] {
        self.identity.as_bytes()
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }
}

impl BindingListener for Service {
    fn bound(&self, backend: Arc<dyn LoginBackendClient>) {
        if self.binding.replace(backend) {
            info!("Login backend replaced");
        } else {
            info!("Login backend bound, authentication enabled");
        }
    }

    fn rebound(&self, backend: Arc<dyn LoginBackendClient>) {
        self.binding.replace(backend);
        info!("Replacing modified login backend");
    }

    fn unbound(&self) {
        if self.binding.clear() {
            warn!(
                "Login backend removed, users will not be authenticated until a backend is bound again"
            );
        } else {
            trace!("Unbind received while already unbound");
        }
    }
}
