//! Parsed type expressions, as written in declarations.
//!
//! These are syntactic: `Named` carries the spelling (simple or dotted), not
//! a resolved type.

use crate::{Name, ParsedTypeId, ParsedTypeRange};

/// Primitive types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }
}

/// A type as written in source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParsedType {
    Primitive(PrimitiveType),

    /// Class or interface type, with optional type arguments: `List<String>`.
    Named { name: Name, args: ParsedTypeRange },

    /// `elem[]`
    Array(ParsedTypeId),
}
