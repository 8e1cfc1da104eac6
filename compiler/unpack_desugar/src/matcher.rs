//! Pattern matching and shape validation for unpacking assignments.
//!
//! ```text
//! tuple(a, b) = tuple(b, a)
//! ^^^^^^^^^^^   ^^^^^^^^^^^
//! left call     right call
//! ```

use smallvec::SmallVec;
use unpack_ir::{ExprArena, ExprId, ExprKind, ExprRange, Name, Span};

use crate::error::{DesugarError, DesugarProblem};
use crate::marker::{MarkerForm, MarkerResolver};

/// One side of an unpacking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnpackCall {
    pub call: ExprId,
    pub form: MarkerForm,
    pub args: ExprRange,
}

/// An assignment whose both sides are marker calls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub assign: ExprId,
    pub span: Span,
    pub left: UnpackCall,
    pub right: UnpackCall,
}

/// A validated left-hand argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub name: Name,
    pub span: Span,
}

/// Match an expression against `marker(..) = marker(..)`.
pub fn match_unpacking(
    id: ExprId,
    arena: &ExprArena,
    resolver: &MarkerResolver,
) -> Option<Candidate> {
    let expr = arena.expr(id);
    let ExprKind::Assign { target, value } = expr.kind else {
        return None;
    };
    let left = unpack_call(target, arena, resolver)?;
    let right = unpack_call(value, arena, resolver)?;
    Some(Candidate {
        assign: id,
        span: expr.span,
        left,
        right,
    })
}

fn unpack_call(id: ExprId, arena: &ExprArena, resolver: &MarkerResolver) -> Option<UnpackCall> {
    let form = resolver.classify(id, arena)?;
    let ExprKind::Call { args, .. } = arena.expr(id).kind else {
        return None;
    };
    Some(UnpackCall {
        call: id,
        form,
        args,
    })
}

impl Candidate {
    pub fn check_arity(&self) -> Result<(), DesugarError> {
        let targets = self.left.args.len();
        let values = self.right.args.len();
        if targets == values {
            Ok(())
        } else {
            Err(DesugarError::ArityMismatch { targets, values })
        }
    }

    /// Every left-hand argument must be a bare variable name.
    ///
    /// The problem is labelled at the first offending argument.
    pub fn validate_shape(
        &self,
        arena: &ExprArena,
    ) -> Result<SmallVec<[Target; 4]>, DesugarProblem> {
        arena
            .expr_list(self.left.args)
            .iter()
            .map(|&arg| {
                let expr = arena.expr(arg);
                match expr.kind {
                    ExprKind::Ident(name) => Ok(Target {
                        name,
                        span: expr.span,
                    }),
                    _ => Err(DesugarProblem::new(DesugarError::InvalidLeftShape, expr.span)),
                }
            })
            .collect()
    }

    /// Right-hand expressions, positionally paired with the targets.
    pub fn values<'a>(&self, arena: &'a ExprArena) -> &'a [ExprId] {
        arena.expr_list(self.right.args)
    }
}

#[cfg(test)]
mod tests;
