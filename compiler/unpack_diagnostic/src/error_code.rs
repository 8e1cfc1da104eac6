//! Error codes for all diagnostics.
//!
//! Codes are grouped by phase:
//! - E01xx: unpacking desugaring
//! - E9xxx: internal errors

use std::fmt;

/// Error codes for all diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Desugaring Errors (E01xx)
    /// Left and right marker calls have different argument counts
    E0101,
    /// Left marker call has an argument that is not a variable name
    E0102,
    /// Unpacking used outside a method body
    E0103,

    // Internal Errors (E9xxx)
    /// Internal compiler error
    E9001,
    /// Too many errors
    E9002,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E0101").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0101 => "E0101",
            ErrorCode::E0102 => "E0102",
            ErrorCode::E0103 => "E0103",
            ErrorCode::E9001 => "E9001",
            ErrorCode::E9002 => "E9002",
        }
    }

    /// Check if this is an internal error (E9xxx range).
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("E9")
    }

    /// Check if this is a user-facing desugaring error (E01xx range).
    pub fn is_desugar_error(&self) -> bool {
        self.as_str().starts_with("E01")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
