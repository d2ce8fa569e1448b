//! Permission names and the permission-set codec.
//!
//! Permissions are flat, case-sensitive strings compared by exact match.
//! There is no wildcard and no hierarchy between names.

pub mod set;

pub use set::{DELIMITER, PermissionSet};

/// Read access to user records.
pub const READ_USER: &str = "READ_USER";
/// Create, update, and delete access to user records.
pub const WRITE_USER: &str = "WRITE_USER";
