//! Workspace selector fragment for request schemas.

use super::{WorkspaceName, WorkspaceRegistry};
use serde_json::{Map, Value, json};

/// Property name used for the workspace selector in input schemas.
pub const WORKSPACE_PROPERTY: &str = "workspace";

/// Whether request schemas should offer a workspace parameter.
///
/// With a single workspace there is nothing to choose, so the selector is
/// hidden and the property is left out of schemas entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceSelector {
    /// Single-tenant mode: no selector.
    Hidden,
    /// Multi-tenant mode: a string enum over the configured names.
    Enumerated {
        /// Selectable workspace names in discovery order.
        values: Vec<WorkspaceName>,
        /// Workspace used when the parameter is omitted.
        default: Option<WorkspaceName>,
    },
}

impl WorkspaceSelector {
    /// Derives the selector for a registry.
    #[must_use]
    pub fn from_registry(registry: &WorkspaceRegistry) -> Self {
        if registry.is_multi_tenant() {
            Self::Enumerated {
                values: registry.names(),
                default: registry.default_name().cloned(),
            }
        } else {
            Self::Hidden
        }
    }

    /// Returns `true` when a selector should be offered.
    #[must_use]
    pub const fn is_enumerated(&self) -> bool {
        matches!(self, Self::Enumerated { .. })
    }

    /// Renders the selector as a JSON Schema property.
    ///
    /// Returns `None` in single-tenant mode.
    #[must_use]
    pub fn to_json_schema(&self) -> Option<Value> {
        match self {
            Self::Hidden => None,
            Self::Enumerated { values, default } => {
                let names: Vec<&str> = values.iter().map(WorkspaceName::as_str).collect();
                let mut property = json!({
                    "type": "string",
                    "enum": names,
                });
                if let Some(obj) = property.as_object_mut() {
                    let description = default.as_ref().map_or_else(
                        || "n8n workspace to target.".to_owned(),
                        |name| format!("n8n workspace to target. Defaults to '{name}'."),
                    );
                    obj.insert("description".to_owned(), Value::String(description));
                    if let Some(name) = default {
                        obj.insert("default".to_owned(), Value::String(name.as_str().to_owned()));
                    }
                }
                Some(property)
            }
        }
    }

    /// Inserts the selector into an object schema's `properties`.
    ///
    /// Does nothing when the selector is hidden or `schema` is not a JSON
    /// object. The property is never added to `required`.
    pub fn apply_to(&self, schema: &mut Value) {
        let Some(property) = self.to_json_schema() else {
            return;
        };
        let Some(obj) = schema.as_object_mut() else {
            return;
        };
        let properties = obj
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(props) = properties.as_object_mut() {
            props.insert(WORKSPACE_PROPERTY.to_owned(), property);
        }
    }
}
