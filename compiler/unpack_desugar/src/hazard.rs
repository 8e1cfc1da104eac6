//! Hazard analysis for right-hand expressions.
//!
//! Values are processed left to right. Once a value has been classified its
//! target joins the blacklist; a later value that reads a blacklisted name
//! would observe the new value instead of the old one and needs a temporary.
//!
//! Member access is always safe and its receiver is not inspected, even when
//! the receiver names a blacklisted variable. Method call receivers are member
//! accesses in the same sense, but call arguments are inspected.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use unpack_ir::visitor::{walk_expr, Visitor};
use unpack_ir::{ExprArena, ExprId, ExprKind, Name};

/// Classification of one right-hand expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hazard {
    /// Reads no blacklisted name; may be assigned directly.
    Safe,
    /// Reads a blacklisted name; must go through a temporary.
    Hazardous,
    /// Reads no variable and no member at all (literals only).
    Indeterminate,
}

impl Hazard {
    pub fn needs_temporary(self) -> bool {
        matches!(self, Hazard::Hazardous)
    }
}

struct HazardScan<'b> {
    blacklist: &'b FxHashSet<Name>,
    determinate: bool,
    hazardous: bool,
}

impl Visitor for HazardScan<'_> {
    fn visit_expr(&mut self, id: ExprId, arena: &ExprArena) {
        match arena.expr(id).kind {
            ExprKind::Ident(name) => {
                self.determinate = true;
                if self.blacklist.contains(&name) {
                    self.hazardous = true;
                }
            }
            ExprKind::Field { .. } => self.determinate = true,
            ExprKind::Call { receiver, args, .. } => {
                if receiver.is_valid() {
                    self.determinate = true;
                }
                for &arg in arena.expr_list(args) {
                    self.visit_expr(arg, arena);
                }
            }
            _ => walk_expr(self, id, arena),
        }
    }
}

/// Classify a single expression against `blacklist`.
pub fn classify(id: ExprId, arena: &ExprArena, blacklist: &FxHashSet<Name>) -> Hazard {
    let mut scan = HazardScan {
        blacklist,
        determinate: false,
        hazardous: false,
    };
    scan.visit_expr(id, arena);
    if scan.hazardous {
        Hazard::Hazardous
    } else if scan.determinate {
        Hazard::Safe
    } else {
        Hazard::Indeterminate
    }
}

/// Classify every value of one unpacking, in order.
///
/// `targets[i]` is blacklisted only after `values[i]` has been classified.
/// The blacklist lives for this call only.
pub fn analyze(targets: &[Name], values: &[ExprId], arena: &ExprArena) -> SmallVec<[Hazard; 4]> {
    let mut blacklist = FxHashSet::default();
    targets
        .iter()
        .zip(values)
        .map(|(&target, &value)| {
            let hazard = classify(value, arena, &blacklist);
            tracing::trace!(?target, ?hazard, "classified unpacking value");
            blacklist.insert(target);
            hazard
        })
        .collect()
}

#[cfg(test)]
mod tests;
