//! Statement injection.
//!
//! The walker keeps the path from the enclosing member down to the node it
//! is visiting. Injection walks that path upward from an unpacking to the
//! nearest statement, checks that the statement sits directly in a
//! statement-list container, and swaps it for the synthesized statements.
//!
//! The container's list is never edited: a new list is allocated and the
//! container is pointed at it.

use smallvec::SmallVec;
use unpack_ir::{
    Block, CaseId, CompilationUnit, ExprArena, ExprId, MethodRef, StmtId, StmtKind, StmtRange,
};

use crate::validate;

/// A node holding an ordered statement list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StmtContainer {
    /// A block statement.
    Block(StmtId),
    /// One arm of a switch.
    CaseArm(CaseId),
    /// The body of a method.
    MethodBody(MethodRef),
}

/// One step of the walker's ancestor path.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    Method(MethodRef),
    Initializer,
    FieldInit,
    Container(StmtContainer),
    Stmt(StmtId),
    Expr(ExprId),
}

/// Why an unpacking could not be injected. Never reported to the user.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Unsupported {
    /// No statement encloses the unpacking.
    NoStatement,
    /// The enclosing statement is not directly inside a container,
    /// e.g. an unbraced `if` branch.
    NotAContainer,
    /// The statement is no longer in its container's list.
    Detached,
}

/// Where an unpacking's replacement goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub container: StmtContainer,
    pub stmt: StmtId,
    /// Index of `stmt` in the container's current list.
    pub position: usize,
}

/// Method whose body the path is inside, if any.
///
/// Field initializers and initializer blocks are not method bodies.
pub fn enclosing_method(path: &[Frame]) -> Option<MethodRef> {
    path.iter().rev().find_map(|frame| match frame {
        Frame::Method(method) => Some(Some(*method)),
        Frame::Initializer | Frame::FieldInit => Some(None),
        _ => None,
    })?
}

/// Current statement list of `container`.
pub fn container_stmts(
    container: StmtContainer,
    unit: &CompilationUnit,
    arena: &ExprArena,
) -> Option<StmtRange> {
    match container {
        StmtContainer::Block(id) => match arena.stmt(id).kind {
            StmtKind::Block(block) => Some(block.stmts),
            _ => None,
        },
        StmtContainer::CaseArm(id) => Some(arena.case(id).stmts),
        StmtContainer::MethodBody(method) => unit.method(method)?.body.map(|body| body.stmts),
    }
}

/// Find the statement to replace for the node at the end of `path`.
pub fn locate(
    path: &[Frame],
    unit: &CompilationUnit,
    arena: &ExprArena,
) -> Result<Location, Unsupported> {
    let index = path
        .iter()
        .rposition(|frame| matches!(frame, Frame::Stmt(_)))
        .ok_or(Unsupported::NoStatement)?;
    let Frame::Stmt(stmt) = path[index] else {
        return Err(Unsupported::NoStatement);
    };
    let container = match index.checked_sub(1).map(|parent| path[parent]) {
        Some(Frame::Container(container)) => container,
        _ => return Err(Unsupported::NotAContainer),
    };
    let stmts = container_stmts(container, unit, arena).ok_or(Unsupported::NotAContainer)?;
    let position = arena
        .stmt_list(stmts)
        .iter()
        .position(|&s| s == stmt)
        .ok_or(Unsupported::Detached)?;
    Ok(Location {
        container,
        stmt,
        position,
    })
}

/// Replace `location.stmt` with `replacement` and repoint the container.
///
/// Returns the container's new list. A location whose container no longer
/// holds a statement list is rejected before anything is allocated.
pub fn splice(
    location: Location,
    replacement: &[StmtId],
    unit: &mut CompilationUnit,
    arena: &mut ExprArena,
) -> Result<StmtRange, Unsupported> {
    let old =
        container_stmts(location.container, unit, arena).ok_or(Unsupported::NotAContainer)?;
    let before: SmallVec<[StmtId; 16]> = SmallVec::from_slice(arena.stmt_list(old));

    let mut rebuilt: SmallVec<[StmtId; 16]> =
        SmallVec::with_capacity(before.len() + replacement.len());
    for &stmt in &before {
        if stmt == location.stmt {
            rebuilt.extend_from_slice(replacement);
        } else {
            rebuilt.push(stmt);
        }
    }
    let new = arena.alloc_stmt_list(rebuilt);

    match location.container {
        StmtContainer::Block(id) => {
            let StmtKind::Block(block) = arena.stmt(id).kind else {
                return Err(Unsupported::NotAContainer);
            };
            arena.set_stmt_kind(id, StmtKind::Block(Block::new(new, block.span)));
        }
        StmtContainer::CaseArm(id) => arena.set_case_stmts(id, new),
        StmtContainer::MethodBody(method) => {
            let decl = unit.method_mut(method).ok_or(Unsupported::NotAContainer)?;
            let Some(body) = decl.body else {
                return Err(Unsupported::NotAContainer);
            };
            decl.body = Some(Block::new(new, body.span));
        }
    }

    validate::validate_splice(&before, arena.stmt_list(new), location.stmt, replacement);
    Ok(new)
}
