//! Temporary name allocation.
//!
//! Temporaries are named `<prefix><n>` with `n` counting up from zero for
//! each unit. Candidates already used as an identifier anywhere in the unit
//! are skipped.

use rustc_hash::FxHashSet;
use unpack_ir::visitor::{
    walk_class, walk_expr, walk_field, walk_method, walk_stmt, walk_type, Visitor,
};
use unpack_ir::{
    ClassDecl, CompilationUnit, ExprArena, ExprId, ExprKind, FieldDecl, MethodDecl, Name, Param,
    ParsedType, ParsedTypeId, StmtId, StmtKind, StringInterner,
};

/// Unit-scoped temporary name source.
#[derive(Clone, Debug)]
pub struct TempAllocator {
    prefix: String,
    next: u32,
    reserved: FxHashSet<Name>,
    allocated: usize,
}

impl TempAllocator {
    /// `reserved` holds every identifier of the unit.
    pub fn new(prefix: impl Into<String>, reserved: FxHashSet<Name>) -> Self {
        TempAllocator {
            prefix: prefix.into(),
            next: 0,
            reserved,
            allocated: 0,
        }
    }

    /// Allocator for `unit`, reserving all of its identifiers.
    pub fn for_unit(
        prefix: impl Into<String>,
        unit: &CompilationUnit,
        arena: &ExprArena,
    ) -> Self {
        Self::new(prefix, collect_identifiers(unit, arena))
    }

    pub fn allocate(&mut self, interner: &StringInterner) -> Name {
        loop {
            let candidate = interner.intern(&format!("{}{}", self.prefix, self.next));
            self.next += 1;
            if self.reserved.insert(candidate) {
                self.allocated += 1;
                return candidate;
            }
        }
    }

    /// Number of names handed out so far.
    pub fn allocated(&self) -> usize {
        self.allocated
    }
}

#[derive(Default)]
struct IdentifierCollector {
    names: FxHashSet<Name>,
}

impl Visitor for IdentifierCollector {
    fn visit_class(&mut self, class: &ClassDecl, arena: &ExprArena) {
        self.names.insert(class.name);
        walk_class(self, class, arena);
    }

    fn visit_field(&mut self, field: &FieldDecl, arena: &ExprArena) {
        self.names.insert(field.name);
        walk_field(self, field, arena);
    }

    fn visit_method(&mut self, method: &MethodDecl, arena: &ExprArena) {
        self.names.insert(method.name);
        walk_method(self, method, arena);
    }

    fn visit_param(&mut self, param: &Param, arena: &ExprArena) {
        self.names.insert(param.name);
        self.visit_type(param.ty, arena);
    }

    fn visit_stmt(&mut self, id: StmtId, arena: &ExprArena) {
        if let StmtKind::Local { name, .. } = arena.stmt(id).kind {
            self.names.insert(name);
        }
        walk_stmt(self, id, arena);
    }

    fn visit_expr(&mut self, id: ExprId, arena: &ExprArena) {
        match arena.expr(id).kind {
            ExprKind::Ident(name) => {
                self.names.insert(name);
            }
            ExprKind::Field { field, .. } => {
                self.names.insert(field);
            }
            ExprKind::Call { method, .. } => {
                self.names.insert(method);
            }
            _ => {}
        }
        walk_expr(self, id, arena);
    }

    fn visit_type(&mut self, id: ParsedTypeId, arena: &ExprArena) {
        if let ParsedType::Named { name, .. } = *arena.parsed_type(id) {
            self.names.insert(name);
        }
        walk_type(self, id, arena);
    }
}

/// Every identifier spelled anywhere in `unit`.
pub fn collect_identifiers(unit: &CompilationUnit, arena: &ExprArena) -> FxHashSet<Name> {
    let mut collector = IdentifierCollector::default();
    collector.visit_unit(unit, arena);
    collector.names
}
