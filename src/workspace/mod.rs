//! Workspace discovery, resolution and client pooling.
//!
//! A workspace is one n8n instance addressed by a lower-case name. Workspaces
//! are discovered once from the process environment, resolved per request
//! from an optional name, and bound to a lazily constructed API client. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Discovery, pooling and resolution services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
