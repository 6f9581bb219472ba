//! Domain layer for the login gate.

pub mod binding;
pub mod error;
pub mod local_client;
pub mod service;
pub mod throttle;

pub use binding::BindingSlot;
pub use error::DomainError;
pub use local_client::LoginGateLocalClient;
pub use service::Service;
pub use throttle::ThrottledLog;
