//! Profile overlays and resolved configuration documents.

use crate::error::{ConfigError, Result};
use crate::value::{Mapping, Value};
use serde::Serialize;

/// A named overlay loaded from `profiles/<name>.yml`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileOverlay {
    /// The overlay's own `profile` field, or the requested name when absent.
    pub name: String,

    /// Free-text description; empty when the document has none.
    pub description: String,

    /// Values merged over the base configuration.
    pub overrides: Mapping,
}

impl ProfileOverlay {
    /// Build an overlay from a parsed profile document.
    ///
    /// `requested` is the name the caller asked for; it is used when the
    /// document does not name itself.
    pub fn from_mapping(requested: &str, mut doc: Mapping) -> Result<Self> {
        let name = match doc.get("profile") {
            Some(value) => scalar_text(requested, "profile", value)?,
            None => None,
        }
        .unwrap_or_else(|| requested.to_string());

        let description = match doc.get("description") {
            Some(value) => scalar_text(requested, "description", value)?,
            None => None,
        }
        .unwrap_or_default();

        let overrides = match doc.shift_remove("overrides") {
            None | Some(Value::Null) => Mapping::new(),
            Some(Value::Mapping(map)) => map,
            Some(other) => {
                return Err(ConfigError::Shape(format!(
                    "profile '{}': 'overrides' must be a mapping, found {}",
                    requested,
                    other.type_name()
                )));
            }
        };

        Ok(Self {
            name,
            description,
            overrides,
        })
    }
}

/// Scalars render to text, null means absent, containers are rejected.
fn scalar_text(profile: &str, field: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(_) | Value::Number(_) => Ok(Some(value.to_string())),
        Value::Sequence(_) | Value::Mapping(_) => Err(ConfigError::Shape(format!(
            "profile '{}': '{}' must be a scalar, found {}",
            profile,
            field,
            value.type_name()
        ))),
    }
}

/// The merged configuration for one domain under one profile.
///
/// Serializes as `{"profile": ..., "description": ..., "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigDocument {
    /// The effective profile name.
    pub profile: String,

    /// The overlay's description.
    pub description: String,

    /// Base merged with the overlay's overrides; `data["profile"]` holds the
    /// effective profile name.
    pub data: Mapping,
}

impl ConfigDocument {
    /// Look up a dotted path inside `data`, e.g. `budgets.frame.cpu_ms`.
    pub fn get(&self, dotted: &str) -> Option<&Value> {
        let (head, rest) = match dotted.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (dotted, None),
        };

        let node = self.data.get(head)?;
        match rest {
            Some(rest) => node.lookup(rest),
            None => Some(node),
        }
    }
}
