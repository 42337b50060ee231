//! addon-config: layered configuration for add-on domains.
//!
//! A small indentation-based document format is parsed into a [`Value`] tree,
//! a domain's base configuration is deep-merged with a named profile overlay,
//! and the feature registry records which profile each add-on uses.
//!
//! ```no_run
//! use addon_config::{ProfileResolver, WorkspaceContext, domain::GAME_3D_CORE};
//!
//! let ctx = WorkspaceContext::resolve()?;
//! let doc = ProfileResolver::new(ctx, GAME_3D_CORE).resolve(None)?;
//! println!("cpu budget: {:?}", doc.get("budgets.cpu_ms"));
//! # Ok::<(), addon_config::ConfigError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod context;
pub mod domain;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod merge;
pub mod parser;
pub mod profile;
pub mod registry;
pub mod value;

#[cfg(test)]
mod test_support;

pub use context::WorkspaceContext;
pub use domain::AddonDomain;
pub use error::{ConfigError, Result};
pub use merge::deep_merge;
pub use parser::{load_document, parse_document};
pub use profile::{ConfigDocument, ProfileOverlay, ProfileResolver};
pub use registry::{FeatureRegistry, RegistryEntry};
pub use value::{Mapping, Number, Value};
