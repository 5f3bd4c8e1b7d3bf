//! Application services for workspace discovery, pooling and resolution.

mod discovery;
mod pool;
mod resolver;

pub use discovery::{RegistryCell, discover};
pub use pool::ClientPool;
pub use resolver::{ProcessResolver, ResolveError, WorkspaceResolver, process_resolver};
