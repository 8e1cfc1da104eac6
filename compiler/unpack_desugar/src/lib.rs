//! Unpacking-assignment desugaring.
//!
//! Rewrites simultaneous assignments spelled with a marker method,
//!
//! ```text
//! tuple(a, b) = tuple(b, a);
//! ```
//!
//! into ordinary assignments, introducing `final` temporaries only where a
//! value reads a variable assigned earlier in the same unpacking:
//!
//! ```text
//! final int $tuple0 = a;
//! a = b;
//! b = $tuple0;
//! ```
//!
//! # Pipeline Position
//!
//! ```text
//! Parse → **Desugar unpacking** → later passes
//! ```
//!
//! # What Happens Per Unit
//!
//! 1. **Marker resolution** (`marker`): the unit's imports decide which
//!    spellings of the marker call are recognized
//! 2. **Rewrite** (`walk`): each unpacking is matched, validated, analyzed
//!    for hazards (`hazard`), given temporaries (`scope`, `temps`),
//!    synthesized (`synth`) and spliced into its statement list (`inject`)
//! 3. **Cleanup** (`cleanup`): marker imports left unused are removed
//!
//! All state lives in a per-unit context; running the pass on several units,
//! in sequence or in parallel, gives each unit a fresh start.

mod cleanup;
mod config;
mod context;
mod error;
mod hazard;
mod inject;
mod marker;
mod matcher;
mod scope;
mod synth;
mod temps;
mod validate;
mod walk;

pub use config::{DesugarConfig, MarkerConfig};
pub use error::{DesugarError, DesugarProblem};
pub use hazard::Hazard;
pub use inject::{StmtContainer, Unsupported};
pub use marker::{MarkerForm, MarkerResolver};
pub use scope::ScopeChain;
pub use temps::TempAllocator;
pub use validate::check_splice;

use unpack_diagnostic::{Diagnostic, DiagnosticQueue};
use unpack_ir::{CompilationUnit, ExprArena, Name, StringInterner};

use crate::cleanup::cleanup_imports;
use crate::context::UnitContext;
use crate::walk::UnitWalker;

/// Result of desugaring one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesugarOutcome {
    /// Unpackings replaced by ordinary assignments.
    pub transformed: usize,
    /// Temporaries introduced across all rewrites.
    pub temporaries: usize,
    /// Unpackings left as written without a diagnostic.
    pub skipped: usize,
    /// Marker call spellings used by rewritten unpackings, e.g. `tuple`.
    pub markers: Vec<String>,
    /// Paths of imports removed by cleanup.
    pub removed_imports: Vec<Name>,
    /// Unpackings rejected with an error, in traversal order.
    pub problems: Vec<DesugarProblem>,
}

impl DesugarOutcome {
    pub fn has_errors(&self) -> bool {
        !self.problems.is_empty()
    }

    pub fn diagnostics(&self, interner: &StringInterner) -> Vec<Diagnostic> {
        self.problems
            .iter()
            .map(|problem| problem.to_diagnostic(interner))
            .collect()
    }

    /// Push every problem into `queue`; returns how many were kept.
    pub fn report(&self, queue: &mut DiagnosticQueue, interner: &StringInterner) -> usize {
        queue.extend(self.diagnostics(interner))
    }
}

/// The unpacking desugaring pass.
///
/// Holds configuration only. Each `run` builds its own per-unit state.
#[derive(Clone, Debug, Default)]
pub struct TupleDesugar {
    config: DesugarConfig,
}

impl TupleDesugar {
    pub fn new(config: DesugarConfig) -> Self {
        TupleDesugar { config }
    }

    pub fn config(&self) -> &DesugarConfig {
        &self.config
    }

    /// Desugar every unpacking in `unit`, in place.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(classes = unit.classes.len(), imports = unit.imports.len())
    )]
    pub fn run(
        &self,
        unit: &mut CompilationUnit,
        arena: &mut ExprArena,
        interner: &StringInterner,
    ) -> DesugarOutcome {
        let cx = UnitContext::new(&self.config, interner, unit, arena);
        let cx = UnitWalker::new(cx, unit, arena).run();

        let removed_imports = cleanup_imports(
            unit,
            arena,
            &cx.markers,
            &cx.config.marker,
            &cx.resolver,
            interner,
        );

        let outcome = DesugarOutcome {
            transformed: cx.transformed,
            temporaries: cx.temps.allocated(),
            skipped: cx.skipped,
            markers: cx
                .markers
                .iter()
                .map(|form| form.spelling(&cx.config.marker))
                .collect(),
            removed_imports,
            problems: cx.problems,
        };
        tracing::debug!(
            transformed = outcome.transformed,
            temporaries = outcome.temporaries,
            problems = outcome.problems.len(),
            "desugared unit"
        );
        outcome
    }
}

/// Desugar `unit` with `config`.
pub fn desugar(
    unit: &mut CompilationUnit,
    arena: &mut ExprArena,
    interner: &StringInterner,
    config: &DesugarConfig,
) -> DesugarOutcome {
    TupleDesugar::new(config.clone()).run(unit, arena, interner)
}
