//! Profile resolution for add-on domains.
//!
//! A domain's effective configuration is its base document with one profile
//! overlay deep-merged on top. The profile comes from the caller, the feature
//! registry, or the domain default, in that order.

mod model;
mod resolver;


pub use model::{ConfigDocument, ProfileOverlay};
pub use resolver::ProfileResolver;
