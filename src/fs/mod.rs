//! Filesystem helpers.
//!
//! Registry saves go through [`atomic_write_file`] so that readers never see a
//! partially written document.

pub mod atomic;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
