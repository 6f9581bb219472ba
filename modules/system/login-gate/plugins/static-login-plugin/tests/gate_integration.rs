#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The static plugin behind a real gate.

use std::sync::Arc;

use login_gate::{BackendDirectory, LoginGateLocalClient, Service};
use login_gate_sdk::{IdentityArtifact, LoginGateClient, LoginGateError};
use static_login_plugin::StaticLoginPlugin;
use static_login_plugin::config::StaticLoginPluginConfig;

fn plugin_config() -> StaticLoginPluginConfig {
    serde_json::from_value(serde_json::json!({
        "users": [
            { "username": "alice", "secret": "pw" },
            { "username": "admin", "secret": "admin", "local": true }
        ]
    }))
    .unwrap()
}

#[tokio::test]
async fn plugin_lifecycle_drives_the_gate() {
    let directory = BackendDirectory::new("hyperspot");
    let gate = Service::new(IdentityArtifact::from("PEM-DATA"), &directory).unwrap();
    let client: Arc<dyn LoginGateClient> = Arc::new(LoginGateLocalClient::new(gate));
    let plugin = StaticLoginPlugin::default();

    assert!(matches!(
        client.authenticate("alice", "pw").await,
        Err(LoginGateError::Unavailable)
    ));

    plugin.init(&plugin_config(), &directory).unwrap();
    assert!(client.authenticate("alice", "pw").await.unwrap());
    assert!(client.authenticate("admin", "admin").await.unwrap());
    assert!(!client.authenticate("alice", "nope").await.unwrap());
    assert!(!client.authenticate("mallory", "pw").await.unwrap());
    assert!(!client.authenticate("", "").await.unwrap());

    assert!(plugin.stop(&directory));
    assert!(matches!(
        client.authenticate("alice", "pw").await,
        Err(LoginGateError::Unavailable)
    ));
    assert_eq!(client.identity_artifact().as_bytes(), b"PEM-DATA");
}

#[tokio::test]
async fn plugin_of_another_vendor_is_not_bound() {
    let directory = BackendDirectory::new("hyperspot");
    let gate = Service::new(IdentityArtifact::from("PEM-DATA"), &directory).unwrap();
    let plugin = StaticLoginPlugin::default();

    let cfg = StaticLoginPluginConfig {
        vendor: "acme".to_owned(),
        ..plugin_config()
    };
    plugin.init(&cfg, &directory).unwrap();

    assert!(!gate.is_bound());
    assert_eq!(directory.len(), 1);
}
