//! Per-unit pass state.

use std::collections::BTreeSet;

use unpack_ir::{CompilationUnit, ExprArena, StringInterner};

use crate::config::DesugarConfig;
use crate::error::DesugarProblem;
use crate::inject::Frame;
use crate::marker::{MarkerForm, MarkerResolver};
use crate::scope::ScopeChain;
use crate::temps::TempAllocator;

/// Everything the pass mutates while processing one unit.
///
/// Built fresh for every unit and dropped at the end of it, so nothing
/// carries over from one unit to the next.
pub(crate) struct UnitContext<'a> {
    pub(crate) config: &'a DesugarConfig,
    pub(crate) interner: &'a StringInterner,
    pub(crate) resolver: MarkerResolver,
    pub(crate) temps: TempAllocator,
    pub(crate) scopes: ScopeChain,
    /// Ancestors of the node being visited, outermost first.
    pub(crate) path: Vec<Frame>,
    /// Marker forms of every rewritten unpacking.
    pub(crate) markers: BTreeSet<MarkerForm>,
    pub(crate) problems: Vec<DesugarProblem>,
    pub(crate) transformed: usize,
    pub(crate) skipped: usize,
}

impl<'a> UnitContext<'a> {
    pub(crate) fn new(
        config: &'a DesugarConfig,
        interner: &'a StringInterner,
        unit: &CompilationUnit,
        arena: &ExprArena,
    ) -> Self {
        UnitContext {
            config,
            interner,
            resolver: MarkerResolver::new(unit, &config.marker, interner),
            temps: TempAllocator::for_unit(config.temp_prefix.as_str(), unit, arena),
            scopes: ScopeChain::new(),
            path: Vec::new(),
            markers: BTreeSet::new(),
            problems: Vec::new(),
            transformed: 0,
            skipped: 0,
        }
    }
}
