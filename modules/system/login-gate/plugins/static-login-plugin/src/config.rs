//! Configuration for the static login backend plugin.

use login_gate_sdk::BackendDescriptor;
use secrecy::SecretString;
use serde::Deserialize;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticLoginPluginConfig {
    /// Backend id used for directory registration.
    pub id: String,

    /// Vendor name used for backend selection.
    pub vendor: String,

    /// Backend priority (lower = higher priority).
    pub priority: i16,

    /// Verification mode.
    pub mode: LoginMode,

    /// Known users for `static_users` mode.
    pub users: Vec<UserEntry>,
}

impl Default for StaticLoginPluginConfig {
    fn default() -> Self {
        Self {
            id: "static-login".to_owned(),
            vendor: "hyperspot".to_owned(),
            priority: 100,
            mode: LoginMode::StaticUsers,
            users: Vec::new(),
        }
    }
}

impl StaticLoginPluginConfig {
    #[must_use]
    pub fn descriptor(&self) -> BackendDescriptor {
        BackendDescriptor::new(self.id.clone(), self.vendor.clone(), self.priority)
    }
}

/// Verification mode.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoginMode {
    /// Accept only configured users with matching secrets.
    #[default]
    StaticUsers,
    /// Accept every attempt.
    AcceptAll,
}

/// A configured user.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    pub username: String,
    pub secret: SecretString,
    /// Report successful logins as accepted by the local mechanism.
    #[serde(default)]
    pub local: bool,
}
