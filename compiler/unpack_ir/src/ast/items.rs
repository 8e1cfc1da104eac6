//! Compilation unit, imports, classes and members.
//!
//! Items own no expressions directly; initializers and bodies point into the
//! unit's `ExprArena`.

use crate::{Block, ExprId, Name, Named, ParsedTypeId, Span, Spanned};

/// A parsed source file.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CompilationUnit {
    /// `Name::EMPTY` = default package.
    pub package: Name,
    pub imports: Vec<Import>,
    pub classes: Vec<ClassDecl>,
    pub span: Span,
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a method reference.
    pub fn method(&self, method: MethodRef) -> Option<&MethodDecl> {
        match self.classes.get(method.class)?.members.get(method.member)? {
            Member::Method(decl) => Some(decl),
            Member::Field(_) | Member::Initializer(_) => None,
        }
    }

    /// Resolve a method reference for mutation.
    pub fn method_mut(&mut self, method: MethodRef) -> Option<&mut MethodDecl> {
        match self
            .classes
            .get_mut(method.class)?
            .members
            .get_mut(method.member)?
        {
            Member::Method(decl) => Some(decl),
            Member::Field(_) | Member::Initializer(_) => None,
        }
    }
}

/// An import declaration.
///
/// `path` is the full dotted path without any trailing `.*`:
/// - `import lombok.Tuple;` → `lombok.Tuple`
/// - `import static lombok.Tuple.tuple;` → `lombok.Tuple.tuple`, static
/// - `import lombok.*;` → `lombok`, on demand
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Import {
    pub path: Name,
    pub is_static: bool,
    pub on_demand: bool,
    pub span: Span,
}

impl Import {
    pub fn single(path: Name, span: Span) -> Self {
        Import {
            path,
            is_static: false,
            on_demand: false,
            span,
        }
    }

    pub fn single_static(path: Name, span: Span) -> Self {
        Import {
            path,
            is_static: true,
            on_demand: false,
            span,
        }
    }

    pub fn on_demand(path: Name, is_static: bool, span: Span) -> Self {
        Import {
            path,
            is_static,
            on_demand: true,
            span,
        }
    }
}

/// A class declaration. Nested classes are not modelled.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClassDecl {
    pub name: Name,
    pub members: Vec<Member>,
    pub span: Span,
}

impl Named for ClassDecl {
    fn name(&self) -> Name {
        self.name
    }
}

/// Class members, in source order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Initializer(InitializerDecl),
}

impl Spanned for Member {
    fn span(&self) -> Span {
        match self {
            Member::Field(field) => field.span,
            Member::Method(method) => method.span,
            Member::Initializer(init) => init.span,
        }
    }
}

/// `[static] T name [= init];`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDecl {
    pub ty: ParsedTypeId,
    pub name: Name,
    /// `ExprId::INVALID` = no initializer.
    pub init: ExprId,
    pub is_static: bool,
    pub span: Span,
}

impl Named for FieldDecl {
    fn name(&self) -> Name {
        self.name
    }
}

/// A method declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MethodDecl {
    pub name: Name,
    /// `ParsedTypeId::INVALID` = `void`.
    pub return_ty: ParsedTypeId,
    pub params: Vec<Param>,
    /// `None` = abstract or native method.
    pub body: Option<Block>,
    pub is_static: bool,
    pub span: Span,
}

impl Named for MethodDecl {
    fn name(&self) -> Name {
        self.name
    }
}

/// A formal parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Param {
    pub ty: ParsedTypeId,
    pub name: Name,
    pub span: Span,
}

impl Named for Param {
    fn name(&self) -> Name {
        self.name
    }
}

/// An instance or static initializer block. Not a method body.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct InitializerDecl {
    pub is_static: bool,
    pub body: Block,
    pub span: Span,
}

/// Position of a method inside a unit: class index and member index.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodRef {
    pub class: usize,
    pub member: usize,
}

impl MethodRef {
    pub fn new(class: usize, member: usize) -> Self {
        MethodRef { class, member }
    }
}
