//! Arena storage for expressions, statements, switch cases and types.
//!
//! Child lists live in contiguous side tables (`expr_lists`, `stmt_lists`,
//! `type_lists`) and are addressed by ranges. Lists are append-only: a pass
//! that changes a statement list allocates a new range and points the owning
//! container at it, so existing ranges never change underneath a reader.

use crate::ast::{Expr, ParsedType, Stmt, StmtKind, SwitchCase};
use crate::{
    CaseId, CaseRange, ExprId, ExprRange, ParsedTypeId, ParsedTypeRange, StmtId, StmtRange,
};

/// Convert an arena length to a `u32` index.
///
/// # Panics
/// Panics if the arena outgrows `u32` indexing.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{what} arena exceeded u32::MAX entries"))
}

/// Arena owning every node of one compilation unit.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    cases: Vec<SwitchCase>,
    types: Vec<ParsedType>,
    expr_lists: Vec<ExprId>,
    stmt_lists: Vec<StmtId>,
    type_lists: Vec<ParsedTypeId>,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    // Allocation

    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expression"));
        self.exprs.push(expr);
        id
    }

    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len(), "statement"));
        self.stmts.push(stmt);
        id
    }

    pub fn alloc_type(&mut self, ty: ParsedType) -> ParsedTypeId {
        let id = ParsedTypeId::new(to_u32(self.types.len(), "type"));
        self.types.push(ty);
        id
    }

    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = self.expr_lists.len();
        self.expr_lists.extend(ids);
        ExprRange::new(
            to_u32(start, "expression list"),
            to_u32(self.expr_lists.len() - start, "expression list"),
        )
    }

    pub fn alloc_stmt_list(&mut self, ids: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = self.stmt_lists.len();
        self.stmt_lists.extend(ids);
        StmtRange::new(
            to_u32(start, "statement list"),
            to_u32(self.stmt_lists.len() - start, "statement list"),
        )
    }

    pub fn alloc_type_list(&mut self, ids: impl IntoIterator<Item = ParsedTypeId>) -> ParsedTypeRange {
        let start = self.type_lists.len();
        self.type_lists.extend(ids);
        ParsedTypeRange::new(
            to_u32(start, "type list"),
            to_u32(self.type_lists.len() - start, "type list"),
        )
    }

    /// Allocate switch cases contiguously.
    pub fn alloc_cases(&mut self, cases: impl IntoIterator<Item = SwitchCase>) -> CaseRange {
        let start = self.cases.len();
        self.cases.extend(cases);
        CaseRange::new(
            to_u32(start, "case"),
            to_u32(self.cases.len() - start, "case"),
        )
    }

    // Lookup

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn case(&self, id: CaseId) -> &SwitchCase {
        &self.cases[id.index()]
    }

    #[inline]
    pub fn parsed_type(&self, id: ParsedTypeId) -> &ParsedType {
        &self.types[id.index()]
    }

    #[inline]
    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.indices()]
    }

    #[inline]
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.indices()]
    }

    #[inline]
    pub fn type_list(&self, range: ParsedTypeRange) -> &[ParsedTypeId] {
        &self.type_lists[range.indices()]
    }

    // Bounds, used by validation

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn stmt_lists_len(&self) -> usize {
        self.stmt_lists.len()
    }

    pub fn expr_lists_len(&self) -> usize {
        self.expr_lists.len()
    }

    // Mutation
    //
    // Only whole-node replacement is offered; lists themselves are never
    // edited in place.

    /// Replace a statement's kind, keeping its span.
    pub fn set_stmt_kind(&mut self, id: StmtId, kind: StmtKind) {
        self.stmts[id.index()].kind = kind;
    }

    /// Point a switch case at a new statement list.
    pub fn set_case_stmts(&mut self, id: CaseId, stmts: StmtRange) {
        self.cases[id.index()].stmts = stmts;
    }

    /// Deep-copy a parsed type so the copy shares no nodes with the original.
    pub fn clone_type(&mut self, id: ParsedTypeId) -> ParsedTypeId {
        match *self.parsed_type(id) {
            ParsedType::Primitive(prim) => self.alloc_type(ParsedType::Primitive(prim)),
            ParsedType::Named { name, args } => {
                let originals = self.type_list(args).to_vec();
                let copies: Vec<_> = originals.into_iter().map(|arg| self.clone_type(arg)).collect();
                let args = self.alloc_type_list(copies);
                self.alloc_type(ParsedType::Named { name, args })
            }
            ParsedType::Array(elem) => {
                let elem = self.clone_type(elem);
                self.alloc_type(ParsedType::Array(elem))
            }
        }
    }

    /// Structural equality of two parsed types.
    pub fn types_equal(&self, a: ParsedTypeId, b: ParsedTypeId) -> bool {
        match (*self.parsed_type(a), *self.parsed_type(b)) {
            (ParsedType::Primitive(x), ParsedType::Primitive(y)) => x == y,
            (
                ParsedType::Named { name: n1, args: a1 },
                ParsedType::Named { name: n2, args: a2 },
            ) => {
                n1 == n2
                    && a1.len() == a2.len()
                    && self
                        .type_list(a1)
                        .iter()
                        .zip(self.type_list(a2))
                        .all(|(x, y)| self.types_equal(*x, *y))
            }
            (ParsedType::Array(x), ParsedType::Array(y)) => self.types_equal(x, y),
            _ => false,
        }
    }
}
