//! In-process backend directory.
//!
//! Backends register here under a [`BackendDescriptor`]; the directory keeps
//! the best backend for its vendor selected and tells subscribed listeners
//! whenever that selection changes.

use std::sync::{Arc, Weak};

use login_gate_sdk::{
    BackendDescriptor, BackendDiscovery, BackendRegistry, BindingListener, LoginBackendClient,
};
use parking_lot::Mutex;
use tracing::{debug, info};

/// Discovery mechanism backed by an in-memory backend table.
///
/// Selection: backends whose vendor matches the directory's vendor are
/// eligible, and the one with the **lowest** priority value wins. Ties go
/// to the earliest registration.
///
/// Notifications are delivered under the directory lock, so listeners see
/// events exactly once and in order. Listeners must not call back into the
/// directory.
pub struct BackendDirectory {
    vendor: String,
    state: Mutex<DirectoryState>,
}

#[derive(Clone)]
struct Entry {
    descriptor: BackendDescriptor,
    backend: Arc<dyn LoginBackendClient>,
}

#[derive(Default)]
struct DirectoryState {
    /// Registration order.
    entries: Vec<Entry>,
    selected: Option<Entry>,
    listeners: Vec<Weak<dyn BindingListener>>,
}

enum BindingEvent {
    Bound(Arc<dyn LoginBackendClient>),
    Rebound(Arc<dyn LoginBackendClient>),
    Unbound,
}

impl BindingEvent {
    fn deliver(&self, listener: &dyn BindingListener) {
        match self {
            Self::Bound(backend) => listener.bound(Arc::clone(backend)),
            Self::Rebound(backend) => listener.rebound(Arc::clone(backend)),
            Self::Unbound => listener.unbound(),
        }
    }
}

impl DirectoryState {
    fn reselect(&mut self, vendor: &str) -> Option<BindingEvent> {
        let next = choose_backend(vendor, &self.entries).cloned();

        let event = match (&self.selected, &next) {
            (None, None) => None,
            (None, Some(n)) => Some(BindingEvent::Bound(Arc::clone(&n.backend))),
            (Some(_), None) => Some(BindingEvent::Unbound),
            (Some(p), Some(n)) if Arc::ptr_eq(&p.backend, &n.backend) => None,
            (Some(_), Some(n)) => Some(BindingEvent::Rebound(Arc::clone(&n.backend))),
        };

        if let Some(n) = &next {
            debug!(backend_id = %n.descriptor.id, vendor, "Selected login backend");
        }
        self.selected = next;
        event
    }

    fn notify(&mut self, event: &BindingEvent) {
        self.listeners.retain(|weak| match weak.upgrade() {
            Some(listener) => {
                event.deliver(listener.as_ref());
                true
            }
            None => false,
        });
    }

    fn reselect_and_notify(&mut self, vendor: &str) {
        if let Some(event) = self.reselect(vendor) {
            self.notify(&event);
        }
    }
}

fn choose_backend<'a>(vendor: &str, entries: &'a [Entry]) -> Option<&'a Entry> {
    let mut best: Option<&Entry> = None;

    for entry in entries {
        if entry.descriptor.vendor != vendor {
            continue;
        }
        match best {
            Some(cur) if cur.descriptor.priority <= entry.descriptor.priority => {}
            _ => best = Some(entry),
        }
    }

    best
}

impl BackendDirectory {
    #[must_use]
    pub fn new(vendor: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            state: Mutex::new(DirectoryState::default()),
        }
    }

    #[must_use]
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Descriptor of the currently selected backend.
    #[must_use]
    pub fn selected(&self) -> Option<BackendDescriptor> {
        self.state
            .lock()
            .selected
            .as_ref()
            .map(|e| e.descriptor.clone())
    }

    /// Number of registered backends, of any vendor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of subscribed listeners that are still alive.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state
            .lock()
            .listeners
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }
}

impl BackendRegistry for BackendDirectory {
    fn register(&self, descriptor: BackendDescriptor, backend: Arc<dyn LoginBackendClient>) {
        info!(
            backend_id = %descriptor.id,
            vendor = %descriptor.vendor,
            priority = descriptor.priority,
            "Registering login backend"
        );

        let mut state = self.state.lock();
        let entry = Entry {
            descriptor,
            backend,
        };
        let id = entry.descriptor.id.clone();
        let existing = state
            .entries
            .iter()
            .position(|e| e.descriptor.id == id);
        match existing {
            Some(idx) => state.entries[idx] = entry,
            None => state.entries.push(entry),
        }

        // Re-registering the selected id is a modification even when the
        // handle is unchanged.
        let event = match state.reselect(&self.vendor) {
            None if existing.is_some() => state
                .selected
                .as_ref()
                .filter(|s| s.descriptor.id == id)
                .map(|s| BindingEvent::Rebound(Arc::clone(&s.backend))),
            other => other,
        };
        if let Some(event) = event {
            state.notify(&event);
        }
    }

    fn deregister(&self, id: &str) -> bool {
        let mut state = self.state.lock();
        let before = state.entries.len();
        state.entries.retain(|e| e.descriptor.id != id);
        if state.entries.len() == before {
            debug!(backend_id = id, "Deregister of unknown login backend ignored");
            return false;
        }

        info!(backend_id = id, "Login backend deregistered");
        state.reselect_and_notify(&self.vendor);
        true
    }
}

impl BackendDiscovery for BackendDirectory {
    fn subscribe(&self, listener: Weak<dyn BindingListener>) {
        let mut state = self.state.lock();
        if let Some(selected) = &state.selected
            && let Some(live) = listener.upgrade()
        {
            live.bound(Arc::clone(&selected.backend));
        }
        state.listeners.retain(|w| w.strong_count() > 0);
        state.listeners.push(listener);
    }
}
