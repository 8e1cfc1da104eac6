//! Statement Types
//!
//! Statement nodes and the statement-list containers that own them.

use std::fmt;

use crate::{CaseRange, ExprId, Name, ParsedTypeId, Span, Spanned, StmtId, StmtRange};

/// Statement node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        self.span
    }
}

/// Statement kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression statement: `expr;`
    Expr(ExprId),

    /// Local variable declaration: `[final] T name [= init];`
    Local {
        ty: ParsedTypeId,
        name: Name,
        /// `ExprId::INVALID` = no initializer.
        init: ExprId,
        is_final: bool,
    },

    /// Braced block: `{ stmts }`
    Block(Block),

    /// `if (cond) then_branch [else else_branch]`
    If {
        cond: ExprId,
        then_branch: StmtId,
        /// `StmtId::INVALID` = no else branch.
        else_branch: StmtId,
    },

    /// `while (cond) body`
    While { cond: ExprId, body: StmtId },

    /// `switch (selector) { cases }`
    Switch { selector: ExprId, cases: CaseRange },

    /// `return [value];`
    Return(ExprId),

    Break,

    Continue,

    /// `;`
    Empty,
}

/// An ordered statement list with braces.
///
/// Used as a block statement and as a method or initializer body.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Block {
    pub stmts: StmtRange,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: StmtRange, span: Span) -> Self {
        Block { stmts, span }
    }
}

/// One arm of a switch statement: `case label: stmts` or `default: stmts`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchCase {
    /// `ExprId::INVALID` = `default` arm.
    pub label: ExprId,
    pub stmts: StmtRange,
    pub span: Span,
}

impl SwitchCase {
    pub fn is_default(&self) -> bool {
        !self.label.is_valid()
    }
}
