//! Focused traits for interface segregation.
//!
//! - `Spanned` - just span access
//! - `Named` - just name access

use super::{Name, Span};

/// Trait for nodes that have a source location span.
pub trait Spanned {
    fn span(&self) -> Span;
}

/// Trait for declarations that introduce a name.
pub trait Named {
    fn name(&self) -> Name;
}
