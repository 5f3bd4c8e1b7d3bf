//! Domain model for workspace discovery and resolution.
//!
//! The workspace domain models named workspace definitions, the immutable
//! registry produced by discovery, the execution context handed to callers
//! and the selector fragment exposed to request schemas. All infrastructure
//! concerns are kept outside the domain boundary.

mod config;
mod context;
mod definition;
mod env;
mod error;
mod name;
mod registry;
mod selector;

pub use config::DiscoveryConfig;
pub use context::{ExecutionContext, TenantId};
pub use definition::{Credential, SourceKeys, WorkspaceDefinition};
pub use env::EnvSnapshot;
pub use error::WorkspaceDomainError;
pub use name::{FALLBACK_WORKSPACE_NAME, WorkspaceName};
pub use registry::{IncompleteWorkspace, MissingKey, WorkspaceRegistry, WorkspaceSummary};
pub use selector::{WORKSPACE_PROPERTY, WorkspaceSelector};
