//! Marker call recognition.
//!
//! A marker call is one of three spellings of the configured marker method:
//!
//! ```text
//! tuple(a, b)                // bare: needs `import static lombok.Tuple.tuple`
//!                            //       or `import static lombok.Tuple.*`
//! Tuple.tuple(a, b)          // simple: needs `import lombok.Tuple`
//!                            //         or `import lombok.*`
//! lombok.Tuple.tuple(a, b)   // qualified: always recognized
//! ```

use smallvec::SmallVec;
use unpack_ir::{CompilationUnit, ExprArena, ExprId, ExprKind, Name, StringInterner};

use crate::config::MarkerConfig;

/// How a marker call is spelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkerForm {
    Bare,
    Simple,
    Qualified,
}

impl MarkerForm {
    /// The call's method text, e.g. `Tuple.tuple` for the simple form.
    pub fn spelling(self, marker: &MarkerConfig) -> String {
        match self {
            MarkerForm::Bare => marker.method.clone(),
            MarkerForm::Simple => format!("{}.{}", marker.owner_simple_name(), marker.method),
            MarkerForm::Qualified => marker.static_import_path(),
        }
    }
}

/// Decides which calls in one unit are marker calls.
///
/// Built once per unit from the unit's imports.
#[derive(Clone, Debug)]
pub struct MarkerResolver {
    method: Name,
    owner_simple: Name,
    /// Segments of the owner's qualified name, outermost first.
    owner_path: SmallVec<[Name; 4]>,
    bare_imported: bool,
    simple_imported: bool,
}

impl MarkerResolver {
    pub fn new(unit: &CompilationUnit, marker: &MarkerConfig, interner: &StringInterner) -> Self {
        let static_path = marker.static_import_path();
        let package = marker.owner_package();

        let mut bare_imported = false;
        let mut simple_imported = false;
        for import in &unit.imports {
            let path = interner.lookup(import.path);
            match (import.is_static, import.on_demand) {
                (true, false) => bare_imported |= path == static_path,
                (true, true) => bare_imported |= path == marker.owner,
                (false, false) => simple_imported |= path == marker.owner,
                (false, true) => simple_imported |= !package.is_empty() && path == package,
            }
        }

        MarkerResolver {
            method: interner.intern(&marker.method),
            owner_simple: interner.intern(marker.owner_simple_name()),
            owner_path: marker.owner.split('.').map(|s| interner.intern(s)).collect(),
            bare_imported,
            simple_imported,
        }
    }

    pub fn method(&self) -> Name {
        self.method
    }

    pub fn owner_simple(&self) -> Name {
        self.owner_simple
    }

    /// Classify `id`; `None` when it is not a recognized marker call.
    pub fn classify(&self, id: ExprId, arena: &ExprArena) -> Option<MarkerForm> {
        let ExprKind::Call {
            receiver, method, ..
        } = arena.expr(id).kind
        else {
            return None;
        };
        if method != self.method {
            return None;
        }
        if !receiver.is_valid() {
            return self.bare_imported.then_some(MarkerForm::Bare);
        }
        if self.owner_path.len() > 1 && matches_path(receiver, arena, &self.owner_path) {
            return Some(MarkerForm::Qualified);
        }
        if matches_path(receiver, arena, &[self.owner_simple]) {
            // An owner in the default package needs no import.
            if self.owner_path.len() == 1 {
                return Some(MarkerForm::Qualified);
            }
            return self.simple_imported.then_some(MarkerForm::Simple);
        }
        None
    }
}

/// Does `id` spell the dotted path `segments` (`a.b.c` as `Field(Field(a, b), c)`)?
fn matches_path(id: ExprId, arena: &ExprArena, segments: &[Name]) -> bool {
    match (arena.expr(id).kind, segments) {
        (ExprKind::Ident(name), [only]) => name == *only,
        (ExprKind::Field { receiver, field }, [rest @ .., last]) if !rest.is_empty() => {
            field == *last && matches_path(receiver, arena, rest)
        }
        _ => false,
    }
}
