//! Backend lifecycle contracts.
//!
//! A discovery mechanism detects backends appearing, being replaced and
//! disappearing, and tells every subscribed [`BindingListener`] about it,
//! once per event and in the order the events happened.

use std::sync::{Arc, Weak};

use crate::models::BackendDescriptor;
use crate::plugin_api::LoginBackendClient;

/// Receives backend lifecycle notifications.
///
/// Implementations must not call back into the discovery mechanism that
/// delivers the notification.
pub trait BindingListener: Send + Sync {
    /// A backend became live. Replaces any previous binding.
    fn bound(&self, backend: Arc<dyn LoginBackendClient>);

    /// The live backend was replaced by another one.
    fn rebound(&self, backend: Arc<dyn LoginBackendClient>) {
        self.bound(backend);
    }

    /// The live backend went away.
    fn unbound(&self);
}

/// A source of backend lifecycle notifications.
pub trait BackendDiscovery: Send + Sync {
    /// Subscribe a listener for binding changes.
    ///
    /// The listener is held weakly: dropping it unsubscribes. If a backend
    /// is already live, the listener is told so before this returns.
    fn subscribe(&self, listener: Weak<dyn BindingListener>);
}

/// Where backends announce and withdraw themselves.
pub trait BackendRegistry: Send + Sync {
    /// Register (or re-register under the same id) a backend.
    fn register(&self, descriptor: BackendDescriptor, backend: Arc<dyn LoginBackendClient>);

    /// Withdraw a backend. Returns `true` if it was registered.
    fn deregister(&self, id: &str) -> bool;
}
