//! Reports the n8n workspaces discovered from the process environment.
//!
//! Usage:
//!
//! ```text
//! workspace_report
//! ```
//!
//! Writes a JSON document to stdout describing configured workspaces (never
//! their credentials), the default workspace, candidates that were dropped
//! and the workspace selector schema offered to request surfaces. A
//! representative report is:
//!
//! ```json
//! {
//!   "workspaces": [
//!     {
//!       "name": "personal",
//!       "endpoint": "https://personal.example.com",
//!       "source_keys": {
//!         "url_key": "N8N_URL_PERSONAL",
//!         "credential_key": "N8N_TOKEN_PERSONAL"
//!       },
//!       "is_default": true
//!     }
//!   ],
//!   "default": "personal",
//!   "multi_tenant": false,
//!   "incomplete": [],
//!   "selector": null
//! }
//! ```
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default `info`). The
//! process exits with status 1 when no workspace is configured.

use n8n_tenancy::workspace::{
    adapters::HttpClientFactory,
    domain::{DiscoveryConfig, IncompleteWorkspace, WorkspaceName, WorkspaceSummary},
    services::{ResolveError, process_resolver},
};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum ReportError {
    #[error("failed to serialise report: {0}")]
    Serialise(#[source] serde_json::Error),
    #[error("failed to write report: {0}")]
    Write(#[source] io::Error),
}

#[derive(Debug, Serialize)]
struct WorkspaceReport {
    workspaces: Vec<WorkspaceSummary>,
    default: Option<WorkspaceName>,
    multi_tenant: bool,
    incomplete: Vec<IncompleteWorkspace>,
    selector: Option<Value>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "workspace report failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool, ReportError> {
    let resolver = process_resolver(DiscoveryConfig::default(), HttpClientFactory::new());
    let registry = resolver.registry();

    let report = WorkspaceReport {
        workspaces: registry.summaries(),
        default: registry.default_name().cloned(),
        multi_tenant: registry.is_multi_tenant(),
        incomplete: registry.incomplete().to_vec(),
        selector: resolver.selector().to_json_schema(),
    };

    let rendered = serde_json::to_string_pretty(&report).map_err(ReportError::Serialise)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").map_err(ReportError::Write)?;

    match resolver.definition(None) {
        Ok(_) => Ok(true),
        Err(err @ ResolveError::NoWorkspaceConfigured { .. }) => {
            tracing::error!(error = %err, "no workspace available");
            Ok(false)
        }
        Err(err) => {
            tracing::warn!(error = %err, "default workspace could not be resolved");
            Ok(false)
        }
    }
}
