//! Parser for the indentation-based configuration format.
//!
//! The format is a small YAML subset: `key: value` lines, `- ` sequence items,
//! unquoted `#` comments, space indentation, and inline JSON arrays. Parsing
//! runs in three steps:
//! - comment stripping and line indexing (`lines`)
//! - scalar interpretation (`scalar`)
//! - tree reconstruction with one line of lookahead (`structure`)
//!
//! A document either parses completely or fails with a structural error; no
//! partial tree is ever returned.

pub mod comment;
pub mod lines;
pub mod scalar;
pub mod structure;

#[cfg(test)]
mod tests;

pub use comment::strip_comment;
pub use lines::{Entry, index_lines};
pub use scalar::parse_scalar;

use crate::error::{ConfigError, Result};
use crate::value::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Parse document text into a value tree. Empty text yields an empty mapping.
pub fn parse_document(text: &str) -> Result<Value> {
    parse_mapping(text).map(Value::Mapping)
}

/// Parse document text and return the root mapping.
pub fn parse_mapping(text: &str) -> Result<Mapping> {
    let entries = index_lines(text);
    structure::build_tree(&entries)
}

/// Read and parse a document from disk.
///
/// # Returns
///
/// * `Ok(Value)` - The parsed tree (always a mapping at the root)
/// * `Err(ConfigError::MissingFile)` - The file does not exist
/// * `Err(ConfigError::Io)` - The file exists but could not be read
/// * `Err(ConfigError::Structural)` - The text is malformed
pub fn load_document(path: &Path) -> Result<Value> {
    load_mapping(path).map(Value::Mapping)
}

/// Read and parse a document from disk, returning the root mapping.
pub fn load_mapping(path: &Path) -> Result<Mapping> {
    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    log::debug!("loading document {}", path.display());
    let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, &e))?;
    parse_mapping(&text).map_err(|e| e.in_file(path))
}
