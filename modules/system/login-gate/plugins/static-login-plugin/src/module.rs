//! Static login backend plugin module.

use std::sync::{Arc, OnceLock};

use login_gate_sdk::{BackendDescriptor, BackendRegistry, LoginBackendClient};
use tracing::info;

use crate::config::{LoginMode, StaticLoginPluginConfig};
use crate::domain::Service;

/// Static login backend plugin module.
///
/// **Registration pattern:**
/// - `init` builds the service from configuration and registers it with the
///   backend registry under the configured descriptor
/// - `stop` withdraws it again, which unbinds any gate using it
#[derive(Default)]
pub struct StaticLoginPlugin {
    registration: OnceLock<(BackendDescriptor, Arc<Service>)>,
}

impl StaticLoginPlugin {
    /// Build the backend and register it.
    ///
    /// # Errors
    ///
    /// Returns an error if the plugin was already initialized.
    pub fn init(
        &self,
        cfg: &StaticLoginPluginConfig,
        registry: &dyn BackendRegistry,
    ) -> anyhow::Result<()> {
        info!("Initializing static_login_plugin");

        if cfg.mode == LoginMode::AcceptAll {
            tracing::warn!(
                "Static login plugin is running in `accept_all` mode, every login attempt \
                 will be accepted. Do NOT use this mode in production."
            );
        }

        info!(
            backend_id = %cfg.id,
            vendor = %cfg.vendor,
            priority = cfg.priority,
            mode = ?cfg.mode,
            user_count = cfg.users.len(),
            "Loaded plugin configuration"
        );

        let descriptor = cfg.descriptor();
        let service = Arc::new(Service::from_config(cfg));
        self.registration
            .set((descriptor.clone(), service.clone()))
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        let api: Arc<dyn LoginBackendClient> = service;
        registry.register(descriptor.clone(), api);

        info!(backend_id = %descriptor.id, "Static login plugin initialized");
        Ok(())
    }

    /// Withdraw the backend. Returns `true` if it was registered.
    pub fn stop(&self, registry: &dyn BackendRegistry) -> bool {
        let Some((descriptor, _)) = self.registration.get() else {
            return false;
        };
        let removed = registry.deregister(&descriptor.id);
        info!(backend_id = %descriptor.id, removed, "Static login plugin stopped");
        removed
    }

    #[must_use]
    pub fn service(&self) -> Option<Arc<Service>> {
        self.registration.get().map(|(_, svc)| Arc::clone(svc))
    }
}
