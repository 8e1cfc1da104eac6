//! Multi-unit driver for unpacking desugaring.
//!
//! Each unit owns its arena, so units are independent and can be desugared
//! in parallel with rayon. The string interner is shared.
//!
//! # Usage
//!
//! ```text
//! init_tracing();
//! let reports = desugar_units(&mut units, &interner, &DriverConfig::default());
//! for report in &reports {
//!     for diag in &report.diagnostics {
//!         eprintln!("{diag}");
//!     }
//! }
//! ```

use std::sync::Once;

use rayon::prelude::*;
use unpack_desugar::{DesugarConfig, DesugarOutcome, TupleDesugar};
use unpack_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use unpack_ir::{CompilationUnit, ExprArena, StringInterner};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this early in main() or test setup to enable tracing.
/// Set `RUST_LOG=unpack_desugar=debug` to see desugaring decisions, and
/// `UNPACK_LOG_TREE=1` to render spans as an indented tree.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("UNPACK_LOG_TREE").is_some() {
            let tree = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            tracing_subscriber::registry().with(filter).with(tree).init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// One unit of input: a compilation unit and the arena its nodes live in.
#[derive(Clone, Debug, Default)]
pub struct SourceUnit {
    pub unit: CompilationUnit,
    pub arena: ExprArena,
}

impl SourceUnit {
    pub fn new(unit: CompilationUnit, arena: ExprArena) -> Self {
        SourceUnit { unit, arena }
    }
}

/// Driver configuration.
#[derive(Clone, Debug)]
pub struct DriverConfig {
    pub desugar: DesugarConfig,
    /// Applied to each unit's queue separately.
    pub diagnostics: DiagnosticConfig,
    /// Desugar units on the rayon thread pool.
    pub parallel: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            desugar: DesugarConfig::default(),
            diagnostics: DiagnosticConfig::default(),
            parallel: true,
        }
    }
}

impl DriverConfig {
    /// Same configuration, processing units one after another.
    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    #[must_use]
    pub fn with_desugar(mut self, desugar: DesugarConfig) -> Self {
        self.desugar = desugar;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }
}

/// Result for one unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitReport {
    pub outcome: DesugarOutcome,
    /// Flushed from the unit's queue, ordered by source position.
    pub diagnostics: Vec<Diagnostic>,
}

impl UnitReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Totals over a batch of reports.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverSummary {
    pub units: usize,
    pub transformed: usize,
    pub temporaries: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl DriverSummary {
    pub fn from_reports(reports: &[UnitReport]) -> Self {
        reports.iter().fold(DriverSummary::default(), |acc, report| DriverSummary {
            units: acc.units + 1,
            transformed: acc.transformed + report.outcome.transformed,
            temporaries: acc.temporaries + report.outcome.temporaries,
            skipped: acc.skipped + report.outcome.skipped,
            errors: acc.errors + report.diagnostics.iter().filter(|d| d.is_error()).count(),
        })
    }
}

fn desugar_one(
    pass: &TupleDesugar,
    source: &mut SourceUnit,
    interner: &StringInterner,
    diagnostics: &DiagnosticConfig,
) -> UnitReport {
    let outcome = pass.run(&mut source.unit, &mut source.arena, interner);
    let mut queue = DiagnosticQueue::with_config(diagnostics.clone());
    outcome.report(&mut queue, interner);
    UnitReport {
        outcome,
        diagnostics: queue.flush(),
    }
}

/// Desugar every unit in place. Reports are in input order.
///
/// Every unit gets a fresh pass state, so the result does not depend on
/// `config.parallel` or on how rayon schedules the units.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(units = units.len(), parallel = config.parallel)
)]
pub fn desugar_units(
    units: &mut [SourceUnit],
    interner: &StringInterner,
    config: &DriverConfig,
) -> Vec<UnitReport> {
    let pass = TupleDesugar::new(config.desugar.clone());
    let reports: Vec<UnitReport> = if config.parallel && units.len() > 1 {
        units
            .par_iter_mut()
            .map(|source| desugar_one(&pass, source, interner, &config.diagnostics))
            .collect()
    } else {
        units
            .iter_mut()
            .map(|source| desugar_one(&pass, source, interner, &config.diagnostics))
            .collect()
    };

    let summary = DriverSummary::from_reports(&reports);
    tracing::debug!(
        transformed = summary.transformed,
        temporaries = summary.temporaries,
        errors = summary.errors,
        "desugared units"
    );
    reports
}

#[cfg(test)]
mod tests;
