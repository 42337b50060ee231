//! Exit code constants for the addon-config CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, missing file, wrong document shape)
//! - 2: Malformed document (indentation or separator errors)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing documents, unexpected document shape.
pub const USER_ERROR: i32 = 1;

/// A document could not be parsed into a tree.
pub const MALFORMED_DOCUMENT: i32 = 2;
