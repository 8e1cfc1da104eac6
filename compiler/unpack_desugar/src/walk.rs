//! Unit traversal and per-unpacking rewrite.
//!
//! The walker visits a unit top-down, keeping the ancestor path and the
//! scope chain current, and rewrites every unpacking it meets:
//!
//! ```text
//! match → method check → arity → shape → locate → hazards → types
//!       → temporaries → synthesize → splice
//! ```
//!
//! Nothing is allocated before the last check that can fail, so a rejected
//! unpacking leaves the unit exactly as it was. An unpacking is never
//! descended into, whether it was rewritten or not.

use smallvec::SmallVec;
use unpack_ir::{
    Block, CaseRange, CompilationUnit, ExprArena, ExprId, ExprKind, Member, MethodRef, Name,
    Param, ParsedTypeId, StmtId, StmtKind, StmtRange,
};

use crate::context::UnitContext;
use crate::error::{DesugarError, DesugarProblem};
use crate::hazard;
use crate::inject::{enclosing_method, locate, splice, Frame, StmtContainer, Unsupported};
use crate::matcher::{match_unpacking, Candidate};
use crate::synth::{synthesize, PlannedAssignment, Temporary};

/// Why an unpacking was left as written.
enum Rejection {
    Problem(DesugarProblem),
    Unsupported(Unsupported),
}

impl From<DesugarProblem> for Rejection {
    fn from(problem: DesugarProblem) -> Self {
        Rejection::Problem(problem)
    }
}

impl From<Unsupported> for Rejection {
    fn from(reason: Unsupported) -> Self {
        Rejection::Unsupported(reason)
    }
}

pub(crate) struct UnitWalker<'a, 'u> {
    cx: UnitContext<'a>,
    unit: &'u mut CompilationUnit,
    arena: &'u mut ExprArena,
}

impl<'a, 'u> UnitWalker<'a, 'u> {
    pub(crate) fn new(
        cx: UnitContext<'a>,
        unit: &'u mut CompilationUnit,
        arena: &'u mut ExprArena,
    ) -> Self {
        UnitWalker { cx, unit, arena }
    }

    /// Walk the whole unit and hand back the final state.
    pub(crate) fn run(mut self) -> UnitContext<'a> {
        for class in 0..self.unit.classes.len() {
            self.walk_class(class);
        }
        self.cx
    }

    fn with_frame(&mut self, frame: Frame, f: impl FnOnce(&mut Self)) {
        self.cx.path.push(frame);
        f(self);
        self.cx.path.pop();
    }

    fn scoped(&mut self, f: impl FnOnce(&mut Self)) {
        self.cx.scopes.push();
        f(self);
        self.cx.scopes.pop();
    }

    // Items

    fn walk_class(&mut self, class: usize) {
        self.cx.scopes.push();

        // Fields are visible from every member, subject to position.
        for member in &self.unit.classes[class].members {
            if let Member::Field(field) = member {
                self.cx.scopes.declare(field.name, field.ty, field.span.start);
            }
        }

        for index in 0..self.unit.classes[class].members.len() {
            match &self.unit.classes[class].members[index] {
                Member::Field(field) => {
                    let init = field.init;
                    if init.is_valid() {
                        self.with_frame(Frame::FieldInit, |w| w.walk_expr(init));
                    }
                }
                Member::Method(method) => {
                    let params: SmallVec<[Param; 4]> = method.params.iter().copied().collect();
                    let body = method.body;
                    self.walk_method(MethodRef::new(class, index), &params, body);
                }
                Member::Initializer(init) => {
                    let body = init.body;
                    self.with_frame(Frame::Initializer, |w| {
                        w.scoped(|w| w.walk_stmt_list(body.stmts));
                    });
                }
            }
        }

        self.cx.scopes.pop();
    }

    fn walk_method(&mut self, method: MethodRef, params: &[Param], body: Option<Block>) {
        self.with_frame(Frame::Method(method), |w| {
            w.scoped(|w| {
                for param in params {
                    w.cx.scopes.declare(param.name, param.ty, param.span.start);
                }
                if let Some(body) = body {
                    let container = Frame::Container(StmtContainer::MethodBody(method));
                    w.with_frame(container, |w| {
                        w.scoped(|w| w.walk_stmt_list(body.stmts));
                    });
                }
            });
        });
    }

    // Statements

    fn walk_stmt_list(&mut self, stmts: StmtRange) {
        // The container may be repointed while we iterate; the snapshot keeps
        // the original statements, which stay valid.
        let ids: SmallVec<[StmtId; 16]> = SmallVec::from_slice(self.arena.stmt_list(stmts));
        for id in ids {
            self.walk_stmt(id);
        }
    }

    fn walk_stmt(&mut self, id: StmtId) {
        self.with_frame(Frame::Stmt(id), |w| w.walk_stmt_kind(id));
    }

    fn walk_stmt_kind(&mut self, id: StmtId) {
        let stmt = *self.arena.stmt(id);
        match stmt.kind {
            StmtKind::Expr(expr) => self.walk_expr(expr),
            StmtKind::Local { ty, name, init, .. } => {
                self.cx.scopes.declare(name, ty, stmt.span.start);
                if init.is_valid() {
                    self.walk_expr(init);
                }
            }
            StmtKind::Block(block) => {
                self.with_frame(Frame::Container(StmtContainer::Block(id)), |w| {
                    w.scoped(|w| w.walk_stmt_list(block.stmts));
                });
            }
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                self.walk_expr(cond);
                self.scoped(|w| w.walk_stmt(then_branch));
                if else_branch.is_valid() {
                    self.scoped(|w| w.walk_stmt(else_branch));
                }
            }
            StmtKind::While { cond, body } => {
                self.walk_expr(cond);
                self.scoped(|w| w.walk_stmt(body));
            }
            StmtKind::Switch { selector, cases } => {
                self.walk_expr(selector);
                self.scoped(|w| w.walk_cases(cases));
            }
            StmtKind::Return(value) => {
                if value.is_valid() {
                    self.walk_expr(value);
                }
            }
            StmtKind::Break | StmtKind::Continue | StmtKind::Empty => {}
        }
    }

    /// All arms of a switch share one scope.
    fn walk_cases(&mut self, cases: CaseRange) {
        for case_id in cases.ids() {
            let label = self.arena.case(case_id).label;
            if label.is_valid() {
                self.walk_expr(label);
            }
            let stmts = self.arena.case(case_id).stmts;
            self.with_frame(Frame::Container(StmtContainer::CaseArm(case_id)), |w| {
                w.walk_stmt_list(stmts);
            });
        }
    }

    // Expressions

    fn walk_expr(&mut self, id: ExprId) {
        self.with_frame(Frame::Expr(id), |w| {
            if !w.try_rewrite(id) {
                w.walk_expr_children(id);
            }
        });
    }

    fn walk_expr_list(&mut self, ids: SmallVec<[ExprId; 8]>) {
        for id in ids {
            self.walk_expr(id);
        }
    }

    fn walk_expr_children(&mut self, id: ExprId) {
        match self.arena.expr(id).kind {
            ExprKind::Int(_)
            | ExprKind::Bool(_)
            | ExprKind::Str(_)
            | ExprKind::Null
            | ExprKind::This
            | ExprKind::Ident(_) => {}
            ExprKind::Field { receiver, .. } => self.walk_expr(receiver),
            ExprKind::Index { receiver, index } => {
                self.walk_expr(receiver);
                self.walk_expr(index);
            }
            ExprKind::Call { receiver, args, .. } => {
                if receiver.is_valid() {
                    self.walk_expr(receiver);
                }
                let args = SmallVec::from_slice(self.arena.expr_list(args));
                self.walk_expr_list(args);
            }
            ExprKind::New { args, .. } => {
                let args = SmallVec::from_slice(self.arena.expr_list(args));
                self.walk_expr_list(args);
            }
            ExprKind::Unary { operand, .. } => self.walk_expr(operand),
            ExprKind::Binary { left, right, .. } => {
                self.walk_expr(left);
                self.walk_expr(right);
            }
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => {
                self.walk_expr(cond);
                self.walk_expr(then_expr);
                self.walk_expr(else_expr);
            }
            ExprKind::Assign { target, value } => {
                self.walk_expr(target);
                self.walk_expr(value);
            }
        }
    }

    // Rewriting

    /// Rewrite `id` if it is an unpacking. Returns whether it was one.
    fn try_rewrite(&mut self, id: ExprId) -> bool {
        let Some(candidate) = match_unpacking(id, self.arena, &self.cx.resolver) else {
            return false;
        };
        match self.rewrite(&candidate) {
            Ok(()) => {}
            Err(Rejection::Problem(problem)) => {
                tracing::debug!(span = ?problem.span, error = %problem.error, "unpacking rejected");
                self.cx.problems.push(problem);
            }
            Err(Rejection::Unsupported(reason)) => {
                tracing::debug!(span = ?candidate.span, ?reason, "unpacking left as written");
                self.cx.skipped += 1;
            }
        }
        true
    }

    fn rewrite(&mut self, candidate: &Candidate) -> Result<(), Rejection> {
        let span = candidate.span;
        if enclosing_method(&self.cx.path).is_none() {
            return Err(DesugarProblem::new(DesugarError::NoEnclosingMethod, span).into());
        }
        candidate
            .check_arity()
            .map_err(|error| DesugarProblem::new(error, span))?;
        let targets = candidate.validate_shape(self.arena)?;
        let location = locate(&self.cx.path, self.unit, self.arena)?;

        let names: SmallVec<[Name; 4]> = targets.iter().map(|target| target.name).collect();
        let values: SmallVec<[ExprId; 4]> = SmallVec::from_slice(candidate.values(self.arena));
        let hazards = hazard::analyze(&names, &values, self.arena);

        let mut types: SmallVec<[Option<ParsedTypeId>; 4]> = SmallVec::new();
        for (&name, hazard) in names.iter().zip(&hazards) {
            if !hazard.needs_temporary() {
                types.push(None);
                continue;
            }
            let ty = self
                .cx
                .scopes
                .resolve(name, span.start)
                .ok_or_else(|| DesugarProblem::new(DesugarError::UnresolvedTarget { name }, span))?;
            types.push(Some(ty));
        }

        let temps = &mut self.cx.temps;
        let interner = self.cx.interner;
        let plan: SmallVec<[PlannedAssignment; 4]> = names
            .iter()
            .zip(&values)
            .zip(&types)
            .map(|((&target, &value), ty)| PlannedAssignment {
                target,
                value,
                temp: ty.map(|ty| Temporary {
                    name: temps.allocate(interner),
                    ty,
                }),
            })
            .collect();
        let temporaries = plan.iter().filter(|step| step.temp.is_some()).count();

        let stmts = synthesize(self.arena, span, &plan);
        splice(location, &stmts, self.unit, self.arena)?;

        self.cx.markers.insert(candidate.left.form);
        self.cx.markers.insert(candidate.right.form);
        self.cx.transformed += 1;
        tracing::debug!(
            ?span,
            targets = plan.len(),
            temporaries,
            position = location.position,
            "rewrote unpacking"
        );
        Ok(())
    }
}
