//! Flat AST types using arena allocation.
//!
//! - No `Box<Expr>`, use `ExprId(u32)` indices
//! - Expression and statement kinds are `Copy` so passes can read a node,
//!   release the arena borrow, and then mutate the arena
//!
//! # Module Structure
//!
//! - `expr`: expression nodes (`Expr`, `ExprKind`)
//! - `operators`: binary and unary operators
//! - `stmt`: statements and statement-list containers (`Block`, `SwitchCase`)
//! - `types`: parsed type expressions
//! - `items`: compilation unit, imports, classes and members

mod expr;
mod items;
mod operators;
mod stmt;
mod types;

pub use expr::{Expr, ExprKind};
pub use items::{
    ClassDecl, CompilationUnit, FieldDecl, Import, InitializerDecl, Member, MethodDecl, MethodRef,
    Param,
};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Block, Stmt, StmtKind, SwitchCase};
pub use types::{ParsedType, PrimitiveType};
