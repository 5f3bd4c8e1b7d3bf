//! Adapter implementations for workspace ports.

pub mod environment;
pub mod http;

pub use environment::{ProcessEnvironment, StaticEnvironment};
pub use http::{API_KEY_HEADER, HttpClientFactory, N8nApiClient};
