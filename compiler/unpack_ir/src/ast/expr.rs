//! Expression Types

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use crate::{ExprId, ExprRange, Name, ParsedTypeId, Span, Spanned};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression variants.
///
/// All children are indices, not boxes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: 42
    Int(i64),

    /// Boolean literal: true, false
    Bool(bool),

    /// String literal (interned, unescaped)
    Str(Name),

    /// `null`
    Null,

    /// `this`
    This,

    /// Variable reference
    Ident(Name),

    /// Member access: receiver.field
    Field { receiver: ExprId, field: Name },

    /// Array access: `receiver[index]`
    Index { receiver: ExprId, index: ExprId },

    /// Method call: `method(args)` or `receiver.method(args)`
    Call {
        /// `ExprId::INVALID` = unqualified call.
        receiver: ExprId,
        method: Name,
        args: ExprRange,
    },

    /// Instance creation: `new T(args)`
    New { ty: ParsedTypeId, args: ExprRange },

    /// Unary operation: op operand
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary operation: left op right
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Conditional: cond ? then_expr : else_expr
    Conditional {
        cond: ExprId,
        then_expr: ExprId,
        else_expr: ExprId,
    },

    /// Assignment: target = value
    Assign { target: ExprId, value: ExprId },
}

impl ExprKind {
    /// Check if this is a bare variable reference.
    pub fn is_ident(&self) -> bool {
        matches!(self, ExprKind::Ident(_))
    }
}
