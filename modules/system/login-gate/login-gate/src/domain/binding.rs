//! The guarded slot holding the current backend binding.

use std::sync::Arc;

use login_gate_sdk::LoginBackendClient;
use parking_lot::Mutex;

/// Single slot holding the live backend, or nothing.
///
/// Every read and write takes the same lock, and the lock is held only for
/// the swap itself. Callers clone the handle out and use it unlocked, so the
/// lock is never held across an `.await`.
#[derive(Default)]
pub struct BindingSlot {
    current: Mutex<Option<Arc<dyn LoginBackendClient>>>,
}

impl BindingSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current binding.
    #[must_use]
    pub fn current(&self) -> Option<Arc<dyn LoginBackendClient>> {
        self.current.lock().clone()
    }

    /// Store `backend`. Returns `true` if another binding was replaced.
    pub fn replace(&self, backend: Arc<dyn LoginBackendClient>) -> bool {
        self.current.lock().replace(backend).is_some()
    }

    /// Clear the binding. Returns `true` if there was one.
    pub fn clear(&self) -> bool {
        self.current.lock().take().is_some()
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.current.lock().is_some()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use async_trait::async_trait;
    use login_gate_sdk::{LoginBackendError, VerifyOutcome};

    use super::*;

    struct Fixed(VerifyOutcome);

    #[async_trait]
    impl LoginBackendClient for Fixed {
        async fn verify(&self, _: &str, _: &str) -> Result<VerifyOutcome, LoginBackendError> {
            Ok(self.0)
        }
    }

    #[test]
    fn starts_empty() {
        let slot = BindingSlot::new();
        assert!(!slot.is_bound());
        assert!(slot.current().is_none());
        assert!(!slot.clear());
    }

    #[test]
    fn replace_reports_previous_binding() {
        let slot = BindingSlot::new();
        assert!(!slot.replace(Arc::new(Fixed(VerifyOutcome::Accept))));
        assert!(slot.replace(Arc::new(Fixed(VerifyOutcome::Reject))));
        assert!(slot.is_bound());
        assert!(slot.clear());
        assert!(!slot.is_bound());
    }

    #[tokio::test]
    async fn snapshot_survives_clear() {
        let slot = BindingSlot::new();
        slot.replace(Arc::new(Fixed(VerifyOutcome::Accept)));

        let captured = slot.current().unwrap();
        slot.clear();

        assert_eq!(
            captured.verify("u", "s").await.unwrap(),
            VerifyOutcome::Accept
        );
        assert!(slot.current().is_none());
    }
}
