//! Unpack IR - tree types for the unpacking desugaring pass
//!
//! This crate contains the host program representation the pass rewrites:
//! - Spans for source locations
//! - Names for interned identifiers
//! - A flat, arena-allocated AST for a Java-like language
//! - Tree construction primitives (`AstBuilder`)
//! - A read-only `Visitor` and a source printer
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and dotted paths are `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Replace, Don't Edit**: statement lists are rebuilt as new ranges and the
//!   owning container is pointed at the new range

mod arena;
pub mod ast;
mod builder;
mod ids;
mod interner;
mod name;
pub mod printer;
mod span;
mod traits;
pub mod visitor;

pub use arena::ExprArena;
pub use ast::{
    BinaryOp, Block, ClassDecl, CompilationUnit, Expr, ExprKind, FieldDecl, Import,
    InitializerDecl, Member, MethodDecl, MethodRef, Param, ParsedType, PrimitiveType, Stmt,
    StmtKind, SwitchCase, UnaryOp,
};
pub use builder::AstBuilder;
pub use ids::{
    CaseId, CaseRange, ExprId, ExprRange, ParsedTypeId, ParsedTypeRange, StmtId, StmtRange,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use printer::UnitPrinter;
pub use span::Span;
pub use traits::{Named, Spanned};
