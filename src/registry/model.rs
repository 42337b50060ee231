//! Registry data model.

use crate::domain::AddonDomain;
use crate::error::{ConfigError, Result};
use crate::value::{Mapping, Value};
use serde::Serialize;
use std::collections::BTreeMap;

/// Fields every entry may carry, in the order they are written.
pub(super) const FIELD_ORDER: [&str; 4] = ["enabled", "version", "profile", "description"];

/// One add-on's record under `addons:`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct RegistryEntry {
    /// Whether the add-on is switched on. Absent means `false`.
    pub enabled: bool,

    pub version: Option<String>,

    /// Active profile name.
    pub profile: Option<String>,

    pub description: Option<String>,

    /// Any other fields, kept so that a load/save cycle loses nothing.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, Value>,
}

impl RegistryEntry {
    /// The entry a domain starts with when it is first registered.
    pub fn defaults_for(domain: &AddonDomain) -> Self {
        Self {
            enabled: false,
            version: Some(domain.version.to_string()),
            profile: Some(domain.default_profile.to_string()),
            description: Some(domain.description.to_string()),
            extra: BTreeMap::new(),
        }
    }

    /// Fill absent fields from the domain defaults. Present fields win.
    pub fn fill_defaults(&mut self, domain: &AddonDomain) {
        self.version
            .get_or_insert_with(|| domain.version.to_string());
        self.profile
            .get_or_insert_with(|| domain.default_profile.to_string());
        self.description
            .get_or_insert_with(|| domain.description.to_string());
    }

    /// Build an entry from its parsed mapping.
    pub(super) fn from_mapping(key: &str, map: Mapping) -> Result<Self> {
        let mut entry = RegistryEntry::default();

        for (field, value) in map {
            match field.as_str() {
                "enabled" => {
                    entry.enabled = match value {
                        Value::Null => false,
                        Value::Bool(b) => b,
                        other => {
                            return Err(ConfigError::Shape(format!(
                                "add-on '{}': 'enabled' must be true or false, found {}",
                                key,
                                other.type_name()
                            )));
                        }
                    }
                }
                "version" => entry.version = text_field(key, &field, value)?,
                "profile" => entry.profile = text_field(key, &field, value)?,
                "description" => entry.description = text_field(key, &field, value)?,
                _ => {
                    entry.extra.insert(field, value);
                }
            }
        }

        Ok(entry)
    }
}

fn text_field(key: &str, field: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(_) | Value::Number(_) => Ok(Some(value.to_string())),
        other => Err(ConfigError::Shape(format!(
            "add-on '{}': '{}' must be a scalar, found {}",
            key,
            field,
            other.type_name()
        ))),
    }
}
