//! Diagnostic system for the desugaring pass.
//!
//! Every diagnostic carries:
//! - An error code for searchability
//! - A message (what went wrong)
//! - A primary span (where it went wrong)
//! - Optional notes and suggestions (how to fix)
//!
//! Diagnostics are collected in a [`DiagnosticQueue`], which applies the
//! error limit and deduplication from [`DiagnosticConfig`] and hands them
//! back sorted by position.

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
