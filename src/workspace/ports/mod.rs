//! Port contracts for workspace discovery and client construction.
//!
//! Ports define infrastructure-agnostic interfaces used by the workspace
//! services.

pub mod client;
pub mod environment;

pub use client::{ClientBuildError, ClientFactory};
pub use environment::EnvironmentSource;
