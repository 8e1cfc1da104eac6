//! End-of-unit import cleanup.
//!
//! Once every unpacking in a unit has been rewritten, the imports that only
//! existed to make the marker call resolvable may be dead:
//!
//! - bare form: `import static lombok.Tuple.tuple;` goes when no unqualified
//!   `tuple(...)` call is left
//! - simple form: `import lombok.Tuple;` goes when nothing named `Tuple` is
//!   left, as an identifier or as a type
//! - qualified form: needs no import
//!
//! On-demand imports are never removed.

use std::collections::BTreeSet;

use unpack_ir::visitor::{walk_expr, walk_type, Visitor};
use unpack_ir::{
    CompilationUnit, ExprArena, ExprId, ExprKind, Name, ParsedType, ParsedTypeId, StringInterner,
};

use crate::config::MarkerConfig;
use crate::marker::{MarkerForm, MarkerResolver};

struct UsageScan {
    method: Name,
    owner: Name,
    bare_calls: usize,
    owner_refs: usize,
}

impl Visitor for UsageScan {
    fn visit_expr(&mut self, id: ExprId, arena: &ExprArena) {
        match arena.expr(id).kind {
            ExprKind::Call {
                receiver, method, ..
            } if !receiver.is_valid() && method == self.method => self.bare_calls += 1,
            ExprKind::Ident(name) if name == self.owner => self.owner_refs += 1,
            _ => {}
        }
        walk_expr(self, id, arena);
    }

    fn visit_type(&mut self, id: ParsedTypeId, arena: &ExprArena) {
        if let ParsedType::Named { name, .. } = *arena.parsed_type(id) {
            if name == self.owner {
                self.owner_refs += 1;
            }
        }
        walk_type(self, id, arena);
    }
}

/// Remove marker imports made dead by the rewrite.
///
/// `used` holds each marker form that was rewritten at least once; every
/// form is handled once. Returns the paths of removed imports.
pub fn cleanup_imports(
    unit: &mut CompilationUnit,
    arena: &ExprArena,
    used: &BTreeSet<MarkerForm>,
    marker: &MarkerConfig,
    resolver: &MarkerResolver,
    interner: &StringInterner,
) -> Vec<Name> {
    if used.is_empty() {
        return Vec::new();
    }

    let mut scan = UsageScan {
        method: resolver.method(),
        owner: resolver.owner_simple(),
        bare_calls: 0,
        owner_refs: 0,
    };
    scan.visit_unit(unit, arena);

    let static_path = marker.static_import_path();
    let mut removed = Vec::new();
    for &form in used {
        let (is_static, path) = match form {
            MarkerForm::Bare if scan.bare_calls == 0 => (true, static_path.as_str()),
            MarkerForm::Simple if scan.owner_refs == 0 => (false, marker.owner.as_str()),
            _ => continue,
        };
        unit.imports.retain(|import| {
            let dead = import.is_static == is_static
                && !import.on_demand
                && interner.lookup(import.path) == path;
            if dead {
                removed.push(import.path);
            }
            !dead
        });
    }

    if !removed.is_empty() {
        tracing::debug!(count = removed.len(), "removed marker imports");
    }
    removed
}
