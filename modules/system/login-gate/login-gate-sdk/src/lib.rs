//! Login Gate SDK
//!
//! This crate provides the public contracts of the login gate:
//!
//! - [`LoginGateClient`] - API used by the transport layer (e.g. an SSH server)
//! - [`LoginBackendClient`] - contract every login backend implements
//! - [`BindingListener`] / [`BackendDiscovery`] / [`BackendRegistry`] - backend lifecycle
//! - [`VerifyOutcome`], [`AuthDecision`], [`IdentityArtifact`], [`BackendDescriptor`] - models
//! - [`LoginGateError`], [`LoginBackendError`] - error types
//!
//! ## Usage
//!
//! ```ignore
//! use login_gate_sdk::{LoginGateClient, LoginGateError};
//!
//! match gate.authenticate("alice", "secret").await {
//!     Ok(true) => { /* open the session */ }
//!     Ok(false) => { /* wrong credentials */ }
//!     Err(LoginGateError::Unavailable) => { /* nobody can log in right now */ }
//!     Err(e) => return Err(e.into()),
//! }
//! ```

pub mod api;
pub mod discovery;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::LoginGateClient;
pub use discovery::{BackendDiscovery, BackendRegistry, BindingListener};
pub use error::{LoginBackendError, LoginGateError};
pub use models::{AuthDecision, BackendDescriptor, IdentityArtifact, VerifyOutcome};
pub use plugin_api::LoginBackendClient;
