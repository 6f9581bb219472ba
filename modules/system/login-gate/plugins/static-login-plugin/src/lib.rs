#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Login Backend Plugin
//!
//! This plugin provides a static username/secret table for development and testing.
//!
//! ## Modes
//!
//! - **`static_users`** (default): Accepts only the configured users. Users marked
//!   `local: true` are reported as accepted by the local mechanism.
//!
//! - **`accept_all`**: Accepts every login attempt. Do not use outside development.
//!
//! ## Configuration
//!
//! ```yaml
//! static_login_plugin:
//!   id: "static-login"
//!   vendor: "hyperspot"
//!   priority: 100
//!   mode: static_users
//!   users:
//!     - username: "admin"
//!       secret: "admin"
//!       local: true
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use module::StaticLoginPlugin;
