//! Replacement statement synthesis.
//!
//! For `tuple(a, b) = tuple(b, a)` the output is:
//!
//! ```text
//! final int $tuple0 = a;
//! a = b;
//! b = $tuple0;
//! ```
//!
//! Temporary declarations come first, in position order, followed by one
//! assignment per target in position order.

use smallvec::SmallVec;
use unpack_ir::{AstBuilder, ExprArena, ExprId, Name, ParsedTypeId, Span, StmtId};

/// A temporary holding a value until every value has been evaluated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Temporary {
    pub name: Name,
    /// Declared type of the target; copied into the declaration.
    pub ty: ParsedTypeId,
}

/// One target of an unpacking and how it receives its value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlannedAssignment {
    pub target: Name,
    pub value: ExprId,
    pub temp: Option<Temporary>,
}

/// Build the replacement statements for one unpacking.
///
/// Every node carries `span`. Original value expressions are moved, not
/// copied: each appears exactly once in the output.
pub fn synthesize(
    arena: &mut ExprArena,
    span: Span,
    plan: &[PlannedAssignment],
) -> SmallVec<[StmtId; 8]> {
    let mut b = AstBuilder::new(arena, span);
    let mut out = SmallVec::new();

    for step in plan {
        if let Some(temp) = step.temp {
            let ty = b.copy_type(temp.ty);
            out.push(b.local(ty, temp.name, Some(step.value), true));
        }
    }

    for step in plan {
        let value = match step.temp {
            Some(temp) => b.ident(temp.name),
            None => step.value,
        };
        out.push(b.assign_stmt(step.target, value));
    }

    out
}
