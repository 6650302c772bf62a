//! Input sanitization functions
//!
//! This module provides functions to clean incoming wire data before
//! validation runs.

/// Trim a string in-place (modifies Option<String>)
///
/// A value that is empty after trimming becomes `None`, so it is reported
/// as a missing field rather than a pattern violation.
pub fn trim_optional(value: &mut Option<String>) {
    if let Some(ref mut s) = value {
        *s = s.trim().to_string();
        if s.is_empty() {
            *value = None;
        }
    }
}
