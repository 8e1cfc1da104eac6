//! Node IDs and ranges for the flat AST.
//!
//! - `ExprId(u32)` instead of `Box<Expr>`, likewise for statements, switch
//!   cases and parsed types
//! - `*Range` for child lists stored contiguously in the arena
//! - `INVALID` sentinels stand in for absent children (no initializer,
//!   no else branch, default case label)

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Sentinel for an absent node.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($name), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($name), "::INVALID"))
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }
    };
}

macro_rules! define_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Backing-store indices covered by this range.
            #[inline]
            pub fn indices(&self) -> std::ops::Range<usize> {
                let start = self.start as usize;
                start..start + self.len as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($name), "({}..{})"),
                    self.start,
                    u64::from(self.start) + u64::from(self.len)
                )
            }
        }
    };
}

define_id!(
    /// Index into the expression arena.
    ExprId
);
define_id!(
    /// Index into the statement arena.
    StmtId
);
define_id!(
    /// Index into the switch-case arena.
    CaseId
);
define_id!(
    /// Index into the parsed-type arena.
    ParsedTypeId
);

define_range!(
    /// Range of expression ids in `ExprArena::expr_lists`.
    ExprRange
);
define_range!(
    /// Range of statement ids in `ExprArena::stmt_lists`.
    StmtRange
);
define_range!(
    /// Contiguous range of switch cases; indices are `CaseId`s directly.
    CaseRange
);
define_range!(
    /// Range of type ids in `ExprArena::type_lists`.
    ParsedTypeRange
);

impl CaseRange {
    /// The case ids covered by this range.
    pub fn ids(&self) -> impl Iterator<Item = CaseId> {
        let start = self.start;
        (0..self.len).map(move |i| CaseId::new(start + i))
    }
}
