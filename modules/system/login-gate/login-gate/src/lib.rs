//! Login Gate Module
//!
//! Sits in front of a protocol-facing login path and delegates credential
//! checks to whichever login backend is currently live. Backends come and go
//! at runtime; the gate follows them through the `bound` / `rebound` /
//! `unbound` notifications of a [`BackendDiscovery`](login_gate_sdk::BackendDiscovery).
//!
//! Provides the `LoginGateClient` trait implementation for the transport layer
//! and [`directory::BackendDirectory`], an in-process discovery mechanism.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod directory;
pub mod domain;

pub use config::LoginGateConfig;
pub use directory::BackendDirectory;
pub use domain::{DomainError, LoginGateLocalClient, Service};
