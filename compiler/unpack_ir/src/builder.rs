//! Tree construction primitives.
//!
//! `AstBuilder` allocates nodes into an `ExprArena`, stamping every node with
//! the builder's current span. Passes use it to synthesize replacement code;
//! tests use it to assemble input trees.

use crate::ast::{
    BinaryOp, Block, Expr, ExprKind, ParsedType, PrimitiveType, Stmt, StmtKind, SwitchCase,
    UnaryOp,
};
use crate::{ExprArena, ExprId, Name, ParsedTypeId, Span, StmtId};

/// Builds AST nodes into an arena.
pub struct AstBuilder<'a> {
    arena: &'a mut ExprArena,
    span: Span,
}

impl<'a> AstBuilder<'a> {
    pub fn new(arena: &'a mut ExprArena, span: Span) -> Self {
        AstBuilder { arena, span }
    }

    /// Set the span used for subsequently built nodes.
    pub fn at(&mut self, span: Span) -> &mut Self {
        self.span = span;
        self
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn arena(&self) -> &ExprArena {
        &*self.arena
    }

    // Expressions

    pub fn expr(&mut self, kind: ExprKind) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, self.span))
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        self.expr(ExprKind::Int(value))
    }

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.expr(ExprKind::Bool(value))
    }

    pub fn str(&mut self, value: Name) -> ExprId {
        self.expr(ExprKind::Str(value))
    }

    pub fn null(&mut self) -> ExprId {
        self.expr(ExprKind::Null)
    }

    pub fn this(&mut self) -> ExprId {
        self.expr(ExprKind::This)
    }

    pub fn ident(&mut self, name: Name) -> ExprId {
        self.expr(ExprKind::Ident(name))
    }

    pub fn field(&mut self, receiver: ExprId, field: Name) -> ExprId {
        self.expr(ExprKind::Field { receiver, field })
    }

    pub fn index(&mut self, receiver: ExprId, index: ExprId) -> ExprId {
        self.expr(ExprKind::Index { receiver, index })
    }

    /// Method call; `receiver` of `None` builds an unqualified call.
    pub fn call(
        &mut self,
        receiver: Option<ExprId>,
        method: Name,
        args: impl IntoIterator<Item = ExprId>,
    ) -> ExprId {
        let args = self.arena.alloc_expr_list(args);
        self.expr(ExprKind::Call {
            receiver: receiver.unwrap_or(ExprId::INVALID),
            method,
            args,
        })
    }

    pub fn new_instance(
        &mut self,
        ty: ParsedTypeId,
        args: impl IntoIterator<Item = ExprId>,
    ) -> ExprId {
        let args = self.arena.alloc_expr_list(args);
        self.expr(ExprKind::New { ty, args })
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.expr(ExprKind::Unary { op, operand })
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.expr(ExprKind::Binary { op, left, right })
    }

    pub fn conditional(&mut self, cond: ExprId, then_expr: ExprId, else_expr: ExprId) -> ExprId {
        self.expr(ExprKind::Conditional {
            cond,
            then_expr,
            else_expr,
        })
    }

    pub fn assign(&mut self, target: ExprId, value: ExprId) -> ExprId {
        self.expr(ExprKind::Assign { target, value })
    }

    // Statements

    pub fn stmt(&mut self, kind: StmtKind) -> StmtId {
        self.arena.alloc_stmt(Stmt::new(kind, self.span))
    }

    pub fn expr_stmt(&mut self, expr: ExprId) -> StmtId {
        self.stmt(StmtKind::Expr(expr))
    }

    /// `name = value;`
    pub fn assign_stmt(&mut self, name: Name, value: ExprId) -> StmtId {
        let target = self.ident(name);
        let assign = self.assign(target, value);
        self.expr_stmt(assign)
    }

    pub fn local(
        &mut self,
        ty: ParsedTypeId,
        name: Name,
        init: Option<ExprId>,
        is_final: bool,
    ) -> StmtId {
        self.stmt(StmtKind::Local {
            ty,
            name,
            init: init.unwrap_or(ExprId::INVALID),
            is_final,
        })
    }

    pub fn block(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> Block {
        let stmts = self.arena.alloc_stmt_list(stmts);
        Block::new(stmts, self.span)
    }

    pub fn block_stmt(&mut self, stmts: impl IntoIterator<Item = StmtId>) -> StmtId {
        let block = self.block(stmts);
        self.stmt(StmtKind::Block(block))
    }

    pub fn if_stmt(&mut self, cond: ExprId, then_branch: StmtId, else_branch: Option<StmtId>) -> StmtId {
        self.stmt(StmtKind::If {
            cond,
            then_branch,
            else_branch: else_branch.unwrap_or(StmtId::INVALID),
        })
    }

    pub fn while_stmt(&mut self, cond: ExprId, body: StmtId) -> StmtId {
        self.stmt(StmtKind::While { cond, body })
    }

    /// `switch` with one arm per `(label, stmts)`; a `None` label is `default`.
    pub fn switch_stmt(
        &mut self,
        selector: ExprId,
        arms: impl IntoIterator<Item = (Option<ExprId>, Vec<StmtId>)>,
    ) -> StmtId {
        let span = self.span;
        let built: Vec<SwitchCase> = arms
            .into_iter()
            .map(|(label, stmts)| SwitchCase {
                label: label.unwrap_or(ExprId::INVALID),
                stmts: self.arena.alloc_stmt_list(stmts),
                span,
            })
            .collect();
        let cases = self.arena.alloc_cases(built);
        self.stmt(StmtKind::Switch { selector, cases })
    }

    pub fn return_stmt(&mut self, value: Option<ExprId>) -> StmtId {
        self.stmt(StmtKind::Return(value.unwrap_or(ExprId::INVALID)))
    }

    // Types

    pub fn primitive(&mut self, prim: PrimitiveType) -> ParsedTypeId {
        self.arena.alloc_type(ParsedType::Primitive(prim))
    }

    pub fn named_type(
        &mut self,
        name: Name,
        args: impl IntoIterator<Item = ParsedTypeId>,
    ) -> ParsedTypeId {
        let args = self.arena.alloc_type_list(args);
        self.arena.alloc_type(ParsedType::Named { name, args })
    }

    pub fn array_type(&mut self, elem: ParsedTypeId) -> ParsedTypeId {
        self.arena.alloc_type(ParsedType::Array(elem))
    }

    /// Deep copy of an existing type.
    pub fn copy_type(&mut self, ty: ParsedTypeId) -> ParsedTypeId {
        self.arena.clone_type(ty)
    }
}
