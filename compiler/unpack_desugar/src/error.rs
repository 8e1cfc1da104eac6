//! Desugaring errors and diagnostics.

use unpack_diagnostic::{Diagnostic, ErrorCode};
use unpack_ir::{Name, Span, StringInterner};

/// Why an unpacking assignment was left as written.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DesugarError {
    /// The two marker calls have different argument counts.
    #[error("left and right side must have the same number of arguments")]
    ArityMismatch { targets: usize, values: usize },
    /// A left-hand argument is not a bare variable name.
    #[error("only variable names allowed on the left side")]
    InvalidLeftShape,
    /// The unpacking appears in a field initializer or initializer block.
    #[error("can only be used inside a method body")]
    NoEnclosingMethod,
    /// A target that needs a temporary has no visible declaration.
    #[error("internal error: unable to find the declared type of an unpacking target")]
    UnresolvedTarget { name: Name },
}

impl DesugarError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DesugarError::ArityMismatch { .. } => ErrorCode::E0101,
            DesugarError::InvalidLeftShape => ErrorCode::E0102,
            DesugarError::NoEnclosingMethod => ErrorCode::E0103,
            DesugarError::UnresolvedTarget { .. } => ErrorCode::E9001,
        }
    }

    /// Internal errors point at a bug in the pass, not in user code.
    pub fn is_internal(&self) -> bool {
        self.code().is_internal()
    }
}

/// A `DesugarError` together with the span it is reported at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DesugarProblem {
    pub error: DesugarError,
    pub span: Span,
}

impl DesugarProblem {
    pub fn new(error: DesugarError, span: Span) -> Self {
        DesugarProblem { error, span }
    }

    /// Convert to a diagnostic with helpful context.
    pub fn to_diagnostic(&self, interner: &StringInterner) -> Diagnostic {
        let diag = Diagnostic::error(self.error.code()).with_message(self.error.to_string());
        match &self.error {
            DesugarError::ArityMismatch { targets, values } => diag
                .with_label(self.span, format!("{targets} targets but {values} values"))
                .with_suggestion("give both marker calls the same number of arguments"),
            DesugarError::InvalidLeftShape => diag
                .with_label(self.span, "not a variable name")
                .with_note("fields, array elements and computed expressions cannot be unpacked into")
                .with_suggestion("unpack into a local variable and assign it afterwards"),
            DesugarError::NoEnclosingMethod => diag
                .with_label(self.span, "outside any method body")
                .with_note("field initializers and initializer blocks are not method bodies"),
            DesugarError::UnresolvedTarget { name } => diag
                .with_label(
                    self.span,
                    format!("no declaration of `{}` found", interner.lookup(*name)),
                )
                .with_note("this is a bug in the desugaring pass; please report it"),
        }
    }
}
