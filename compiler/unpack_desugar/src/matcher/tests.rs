#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::config::MarkerConfig;
use unpack_ir::{AstBuilder, CompilationUnit, Import, StringInterner};

fn resolver(interner: &StringInterner) -> MarkerResolver {
    let mut unit = CompilationUnit::new();
    unit.imports.push(Import::single_static(
        interner.intern("lombok.Tuple.tuple"),
        Span::DUMMY,
    ));
    MarkerResolver::new(&unit, &MarkerConfig::default(), interner)
}

#[test]
fn matches_marker_assignment() {
    let interner = StringInterner::new();
    let resolver = resolver(&interner);
    let tuple = interner.intern("tuple");
    let a = interner.intern("a");
    let b_name = interner.intern("b");

    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::new(0, 25));
    let la = b.ident(a);
    let lb = b.ident(b_name);
    let left = b.call(None, tuple, [la, lb]);
    let rb = b.ident(b_name);
    let ra = b.ident(a);
    let right = b.call(None, tuple, [rb, ra]);
    let assign = b.assign(left, right);

    let candidate = match_unpacking(assign, &arena, &resolver).unwrap();
    assert_eq!(candidate.span, Span::new(0, 25));
    assert_eq!(candidate.left.form, MarkerForm::Bare);
    assert_eq!(candidate.values(&arena), &[rb, ra]);
    assert_eq!(candidate.check_arity(), Ok(()));

    let targets = candidate.validate_shape(&arena).unwrap();
    let names: Vec<Name> = targets.iter().map(|t| t.name).collect();
    assert_eq!(names, vec![a, b_name]);
}

#[test]
fn rejects_one_sided_markers() {
    let interner = StringInterner::new();
    let resolver = resolver(&interner);
    let tuple = interner.intern("tuple");

    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    let x = b.ident(interner.intern("x"));
    let one = b.int(1);
    let right = b.call(None, tuple, [one]);
    let assign = b.assign(x, right);
    let plain = b.assign(x, one);

    assert!(match_unpacking(assign, &arena, &resolver).is_none());
    assert!(match_unpacking(plain, &arena, &resolver).is_none());
    assert!(match_unpacking(right, &arena, &resolver).is_none());
}

#[test]
fn arity_mismatch_reports_counts() {
    let interner = StringInterner::new();
    let resolver = resolver(&interner);
    let tuple = interner.intern("tuple");

    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    let a = b.ident(interner.intern("a"));
    let left = b.call(None, tuple, [a]);
    let one = b.int(1);
    let two = b.int(2);
    let right = b.call(None, tuple, [one, two]);
    let assign = b.assign(left, right);

    let candidate = match_unpacking(assign, &arena, &resolver).unwrap();
    assert_eq!(
        candidate.check_arity(),
        Err(DesugarError::ArityMismatch {
            targets: 1,
            values: 2
        })
    );
}

#[test]
fn shape_problem_points_at_first_bad_argument() {
    let interner = StringInterner::new();
    let resolver = resolver(&interner);
    let tuple = interner.intern("tuple");

    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    let a = b.ident(interner.intern("a"));
    b.at(Span::new(10, 16));
    let this = b.this();
    let field = b.field(this, interner.intern("x"));
    b.at(Span::new(18, 22));
    let arr = b.ident(interner.intern("arr"));
    let zero = b.int(0);
    let index = b.index(arr, zero);
    b.at(Span::DUMMY);
    let left = b.call(None, tuple, [a, field, index]);
    let one = b.int(1);
    let right = b.call(None, tuple, [one, one, one]);
    let assign = b.assign(left, right);

    let candidate = match_unpacking(assign, &arena, &resolver).unwrap();
    let problem = candidate.validate_shape(&arena).unwrap_err();
    assert_eq!(problem.error, DesugarError::InvalidLeftShape);
    assert_eq!(problem.span, Span::new(10, 16));
}
