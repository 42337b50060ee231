//! Configuration merge logic.
//!
//! Merge semantics:
//! - Mappings: deep-merge by key (recursive)
//! - Sequences: REPLACE (override wins entirely)
//! - Scalars and type mismatches: override wins
//!
//! This lets a profile change one nested scalar without restating its siblings,
//! and still replace a whole list with a single new list.

use crate::value::{Mapping, Value};

/// Deep merge `overrides` over `base`, returning a new mapping.
///
/// Neither input is modified. Keys only in `base` keep their position; keys
/// only in `overrides` are appended in override order.
pub fn deep_merge(base: &Mapping, overrides: &Mapping) -> Mapping {
    let mut merged = base.clone();
    for (key, override_value) in overrides {
        let value = match (merged.get(key), override_value) {
            (Some(Value::Mapping(base_map)), Value::Mapping(override_map)) => {
                Value::Mapping(deep_merge(base_map, override_map))
            }
            _ => override_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

/// Merge layers in order (first is the base, last has highest precedence).
pub fn merge_layers<'a, I>(layers: I) -> Mapping
where
    I: IntoIterator<Item = &'a Mapping>,
{
    layers
        .into_iter()
        .fold(Mapping::new(), |merged, layer| deep_merge(&merged, layer))
}
