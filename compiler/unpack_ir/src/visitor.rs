//! AST Visitor Pattern
//!
//! Read-only traversal of a compilation unit. Arena nodes are visited by id;
//! the visitor may mutate its own state, the tree stays immutable.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add custom behavior at specific nodes, and
//! skip the `walk_*` call to prune a subtree.
//!
//! # Example
//!
//! ```text
//! struct CountIdents {
//!     count: usize,
//! }
//!
//! impl Visitor for CountIdents {
//!     fn visit_expr(&mut self, id: ExprId, arena: &ExprArena) {
//!         if let ExprKind::Ident(_) = arena.expr(id).kind {
//!             self.count += 1;
//!         }
//!         walk_expr(self, id, arena);
//!     }
//! }
//! ```

use crate::ast::{
    ClassDecl, CompilationUnit, ExprKind, FieldDecl, Import, InitializerDecl, Member, MethodDecl,
    Param, ParsedType, StmtKind,
};
use crate::{Block, ExprArena, ExprId, ParsedTypeId, StmtId};

/// AST Visitor trait.
pub trait Visitor {
    fn visit_unit(&mut self, unit: &CompilationUnit, arena: &ExprArena) {
        walk_unit(self, unit, arena);
    }

    fn visit_import(&mut self, import: &Import) {
        let _ = import;
    }

    fn visit_class(&mut self, class: &ClassDecl, arena: &ExprArena) {
        walk_class(self, class, arena);
    }

    fn visit_field(&mut self, field: &FieldDecl, arena: &ExprArena) {
        walk_field(self, field, arena);
    }

    fn visit_method(&mut self, method: &MethodDecl, arena: &ExprArena) {
        walk_method(self, method, arena);
    }

    fn visit_initializer(&mut self, init: &InitializerDecl, arena: &ExprArena) {
        self.visit_block(init.body, arena);
    }

    fn visit_param(&mut self, param: &Param, arena: &ExprArena) {
        self.visit_type(param.ty, arena);
    }

    fn visit_block(&mut self, block: Block, arena: &ExprArena) {
        walk_block(self, block, arena);
    }

    fn visit_stmt(&mut self, id: StmtId, arena: &ExprArena) {
        walk_stmt(self, id, arena);
    }

    fn visit_expr(&mut self, id: ExprId, arena: &ExprArena) {
        walk_expr(self, id, arena);
    }

    fn visit_type(&mut self, id: ParsedTypeId, arena: &ExprArena) {
        walk_type(self, id, arena);
    }
}

// Walk Functions

pub fn walk_unit<V: Visitor + ?Sized>(visitor: &mut V, unit: &CompilationUnit, arena: &ExprArena) {
    for import in &unit.imports {
        visitor.visit_import(import);
    }
    for class in &unit.classes {
        visitor.visit_class(class, arena);
    }
}

pub fn walk_class<V: Visitor + ?Sized>(visitor: &mut V, class: &ClassDecl, arena: &ExprArena) {
    for member in &class.members {
        match member {
            Member::Field(field) => visitor.visit_field(field, arena),
            Member::Method(method) => visitor.visit_method(method, arena),
            Member::Initializer(init) => visitor.visit_initializer(init, arena),
        }
    }
}

pub fn walk_field<V: Visitor + ?Sized>(visitor: &mut V, field: &FieldDecl, arena: &ExprArena) {
    visitor.visit_type(field.ty, arena);
    if field.init.is_valid() {
        visitor.visit_expr(field.init, arena);
    }
}

pub fn walk_method<V: Visitor + ?Sized>(visitor: &mut V, method: &MethodDecl, arena: &ExprArena) {
    if method.return_ty.is_valid() {
        visitor.visit_type(method.return_ty, arena);
    }
    for param in &method.params {
        visitor.visit_param(param, arena);
    }
    if let Some(body) = method.body {
        visitor.visit_block(body, arena);
    }
}

pub fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, block: Block, arena: &ExprArena) {
    for &stmt in arena.stmt_list(block.stmts) {
        visitor.visit_stmt(stmt, arena);
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, id: StmtId, arena: &ExprArena) {
    match arena.stmt(id).kind {
        StmtKind::Expr(expr) => visitor.visit_expr(expr, arena),
        StmtKind::Local { ty, init, .. } => {
            visitor.visit_type(ty, arena);
            if init.is_valid() {
                visitor.visit_expr(init, arena);
            }
        }
        StmtKind::Block(block) => visitor.visit_block(block, arena),
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr(cond, arena);
            visitor.visit_stmt(then_branch, arena);
            if else_branch.is_valid() {
                visitor.visit_stmt(else_branch, arena);
            }
        }
        StmtKind::While { cond, body } => {
            visitor.visit_expr(cond, arena);
            visitor.visit_stmt(body, arena);
        }
        StmtKind::Switch { selector, cases } => {
            visitor.visit_expr(selector, arena);
            for case_id in cases.ids() {
                let case = *arena.case(case_id);
                if case.label.is_valid() {
                    visitor.visit_expr(case.label, arena);
                }
                for &stmt in arena.stmt_list(case.stmts) {
                    visitor.visit_stmt(stmt, arena);
                }
            }
        }
        StmtKind::Return(value) => {
            if value.is_valid() {
                visitor.visit_expr(value, arena);
            }
        }
        StmtKind::Break | StmtKind::Continue | StmtKind::Empty => {}
    }
}

pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, id: ExprId, arena: &ExprArena) {
    match arena.expr(id).kind {
        ExprKind::Int(_)
        | ExprKind::Bool(_)
        | ExprKind::Str(_)
        | ExprKind::Null
        | ExprKind::This
        | ExprKind::Ident(_) => {}
        ExprKind::Field { receiver, .. } => visitor.visit_expr(receiver, arena),
        ExprKind::Index { receiver, index } => {
            visitor.visit_expr(receiver, arena);
            visitor.visit_expr(index, arena);
        }
        ExprKind::Call { receiver, args, .. } => {
            if receiver.is_valid() {
                visitor.visit_expr(receiver, arena);
            }
            for &arg in arena.expr_list(args) {
                visitor.visit_expr(arg, arena);
            }
        }
        ExprKind::New { ty, args } => {
            visitor.visit_type(ty, arena);
            for &arg in arena.expr_list(args) {
                visitor.visit_expr(arg, arena);
            }
        }
        ExprKind::Unary { operand, .. } => visitor.visit_expr(operand, arena),
        ExprKind::Binary { left, right, .. } => {
            visitor.visit_expr(left, arena);
            visitor.visit_expr(right, arena);
        }
        ExprKind::Conditional {
            cond,
            then_expr,
            else_expr,
        } => {
            visitor.visit_expr(cond, arena);
            visitor.visit_expr(then_expr, arena);
            visitor.visit_expr(else_expr, arena);
        }
        ExprKind::Assign { target, value } => {
            visitor.visit_expr(target, arena);
            visitor.visit_expr(value, arena);
        }
    }
}

pub fn walk_type<V: Visitor + ?Sized>(visitor: &mut V, id: ParsedTypeId, arena: &ExprArena) {
    match *arena.parsed_type(id) {
        ParsedType::Primitive(_) => {}
        ParsedType::Named { args, .. } => {
            for &arg in arena.type_list(args) {
                visitor.visit_type(arg, arena);
            }
        }
        ParsedType::Array(elem) => visitor.visit_type(elem, arena),
    }
}
