//! Deterministic text rendering of the feature registry.

use super::model::{FIELD_ORDER, RegistryEntry};
use crate::error::{ConfigError, Result};
use crate::parser::strip_comment;
use crate::value::Value;
use std::collections::BTreeMap;
use std::fmt::Write;

pub(super) const HEADER: &str = "# Add-on feature registry. Managed by addon-config.";

/// Render the whole document. Entries come sorted by key.
pub(super) fn render(addons: &BTreeMap<String, RegistryEntry>) -> Result<String> {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str("addons:\n");

    for (key, entry) in addons {
        render_entry(&mut out, key, entry)?;
    }

    Ok(out)
}

fn render_entry(out: &mut String, key: &str, entry: &RegistryEntry) -> Result<()> {
    let _ = writeln!(out, "  {}:", key);

    for field in FIELD_ORDER {
        let text = match field {
            "enabled" => Some(entry.enabled.to_string()),
            "version" => entry.version.as_deref().map(quote).transpose()?,
            "profile" => entry.profile.as_deref().map(quote).transpose()?,
            "description" => entry.description.as_deref().map(quote).transpose()?,
            _ => None,
        };
        if let Some(text) = text {
            let _ = writeln!(out, "    {}: {}", field, text);
        }
    }

    for (field, value) in &entry.extra {
        let text = render_value(key, field, value)?;
        let _ = writeln!(out, "    {}: {}", field, text);
    }

    Ok(())
}

fn render_value(key: &str, field: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(_) | Value::Number(_) => Ok(value.to_string()),
        Value::String(s) => quote(s),
        Value::Sequence(_) => {
            let json = serde_json::to_string(value).map_err(|e| {
                ConfigError::Shape(format!("add-on '{}': cannot render '{}': {}", key, field, e))
            })?;
            // Escaped quotes end a quoted run for the comment stripper.
            if strip_comment(&json) != json {
                return Err(ConfigError::Shape(format!(
                    "add-on '{}': field '{}' would be cut short by a '#' on reload: {}",
                    key, field, json
                )));
            }
            Ok(json)
        }
        Value::Mapping(_) => Err(ConfigError::Shape(format!(
            "add-on '{}': field '{}' is a nested mapping, which the registry cannot hold",
            key, field
        ))),
    }
}

/// Quote a string so that it reads back unchanged.
///
/// The parser has no escape sequences, so the quote character must not occur
/// inside the text.
pub(super) fn quote(text: &str) -> Result<String> {
    if text.contains('\n') || text.contains('\r') {
        return Err(ConfigError::Shape(format!(
            "registry text cannot span lines: {:?}",
            text
        )));
    }

    match (text.contains('"'), text.contains('\'')) {
        (false, _) => Ok(format!("\"{}\"", text)),
        (true, false) => Ok(format!("'{}'", text)),
        (true, true) => Err(ConfigError::Shape(format!(
            "registry text cannot contain both quote characters: {}",
            text
        ))),
    }
}
