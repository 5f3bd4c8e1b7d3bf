//! Immutable workspace registry produced by discovery.

use super::{SourceKeys, WorkspaceDefinition, WorkspaceName};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// What a dropped discovery candidate was missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissingKey {
    /// The paired credential key was absent or blank.
    Credential {
        /// The credential key that was looked up.
        key: String,
    },
    /// The URL key had nothing after its prefix.
    Name,
}

/// A URL key that did not yield a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteWorkspace {
    /// The URL key that declared the candidate.
    pub url_key: String,
    /// The reason the candidate was dropped.
    pub missing: MissingKey,
}

/// Credential-free view of a workspace definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSummary {
    /// Workspace name.
    pub name: WorkspaceName,
    /// Endpoint base URL.
    pub endpoint: String,
    /// Environment keys that produced the workspace.
    pub source_keys: SourceKeys,
    /// Whether this is the default workspace.
    pub is_default: bool,
}

/// Discovered workspaces keyed by name, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRegistry {
    definitions: IndexMap<WorkspaceName, WorkspaceDefinition>,
    default_name: Option<WorkspaceName>,
    incomplete: Vec<IncompleteWorkspace>,
    discovered_at: DateTime<Utc>,
}

impl WorkspaceRegistry {
    /// Builds a registry and resolves its default workspace.
    ///
    /// `requested_default` wins when it names an existing entry
    /// (case-insensitively); otherwise the first entry is the default.
    #[must_use]
    pub fn new(
        definitions: IndexMap<WorkspaceName, WorkspaceDefinition>,
        requested_default: Option<&str>,
        incomplete: Vec<IncompleteWorkspace>,
        clock: &impl Clock,
    ) -> Self {
        let default_name = requested_default
            .and_then(|raw| WorkspaceName::new(raw).ok())
            .filter(|name| definitions.contains_key(name))
            .or_else(|| definitions.keys().next().cloned());

        Self {
            definitions,
            default_name,
            incomplete,
            discovered_at: clock.utc(),
        }
    }

    /// Creates a registry with no workspaces.
    #[must_use]
    pub fn empty(clock: &impl Clock) -> Self {
        Self::new(IndexMap::new(), None, Vec::new(), clock)
    }

    /// Finds a definition by name.
    #[must_use]
    pub fn get(&self, name: &WorkspaceName) -> Option<&WorkspaceDefinition> {
        self.definitions.get(name)
    }

    /// Iterates over definitions in discovery order.
    pub fn definitions(&self) -> impl Iterator<Item = &WorkspaceDefinition> {
        self.definitions.values()
    }

    /// Returns workspace names in discovery order.
    #[must_use]
    pub fn names(&self) -> Vec<WorkspaceName> {
        self.definitions.keys().cloned().collect()
    }

    /// Returns the number of workspaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` when no workspace was discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns `true` when more than one workspace is configured.
    #[must_use]
    pub fn is_multi_tenant(&self) -> bool {
        self.definitions.len() > 1
    }

    /// Returns the default workspace name, if any.
    #[must_use]
    pub const fn default_name(&self) -> Option<&WorkspaceName> {
        self.default_name.as_ref()
    }

    /// Returns the default workspace definition, if any.
    #[must_use]
    pub fn default_definition(&self) -> Option<&WorkspaceDefinition> {
        self.default_name
            .as_ref()
            .and_then(|name| self.definitions.get(name))
    }

    /// Returns the candidates dropped during discovery.
    #[must_use]
    pub fn incomplete(&self) -> &[IncompleteWorkspace] {
        &self.incomplete
    }

    /// Returns when discovery ran.
    #[must_use]
    pub const fn discovered_at(&self) -> DateTime<Utc> {
        self.discovered_at
    }

    /// Returns credential-free summaries in discovery order.
    #[must_use]
    pub fn summaries(&self) -> Vec<WorkspaceSummary> {
        self.definitions
            .values()
            .map(|definition| WorkspaceSummary {
                name: definition.name().clone(),
                endpoint: definition.endpoint().to_owned(),
                source_keys: definition.source_keys().clone(),
                is_default: self.default_name.as_ref() == Some(definition.name()),
            })
            .collect()
    }
}
