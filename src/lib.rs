//! n8n tenancy: workspace resolution and client pooling for n8n API callers.
//!
//! This crate lets one process address several independent n8n instances
//! ("workspaces"), choosing among them per request. Workspaces are discovered
//! from environment variables, a default is selected, and one API client per
//! workspace is built on first use and shared afterwards.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure workspace types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the environment and clients
//! - **Adapters**: Concrete implementations of ports (process env, HTTP)
//!
//! # Modules
//!
//! - [`workspace`]: Discovery, resolution, pooling and selector schemas

pub mod workspace;
