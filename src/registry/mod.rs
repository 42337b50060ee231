//! The feature registry at `method/config/features.yml`.
//!
//! The registry records, per add-on domain, whether it is enabled, its version,
//! its active profile and a description. It is read leniently (missing fields of
//! built-in domains are filled in) and written deterministically, so that a
//! load/save cycle is stable and diffs stay small.

mod model;
mod operations;
mod render;


pub use model::RegistryEntry;
pub use operations::FeatureRegistry;
