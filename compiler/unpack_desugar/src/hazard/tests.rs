use super::*;
use unpack_ir::{AstBuilder, BinaryOp, Span, StringInterner};

struct Names {
    a: Name,
    b: Name,
    c: Name,
    x: Name,
}

fn names(interner: &StringInterner) -> Names {
    Names {
        a: interner.intern("a"),
        b: interner.intern("b"),
        c: interner.intern("c"),
        x: interner.intern("x"),
    }
}

#[test]
fn swap_needs_one_temporary() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    let vb = b.ident(n.b);
    let va = b.ident(n.a);

    let hazards = analyze(&[n.a, n.b], &[vb, va], &arena);
    assert_eq!(hazards.as_slice(), &[Hazard::Safe, Hazard::Hazardous]);
}

#[test]
fn unrelated_values_need_no_temporary() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    let x = b.ident(n.x);
    let one = b.int(1);
    let sum = b.binary(BinaryOp::Add, x, one);
    let two = b.int(2);

    let hazards = analyze(&[n.a, n.b], &[sum, two], &arena);
    assert_eq!(hazards.as_slice(), &[Hazard::Safe, Hazard::Indeterminate]);
    assert!(hazards.iter().all(|h| !h.needs_temporary()));
}

#[test]
fn own_target_is_not_blacklisted_yet() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    let a = b.ident(n.a);
    let one = b.int(1);
    let inc = b.binary(BinaryOp::Add, a, one);

    let hazards = analyze(&[n.a], &[inc], &arena);
    assert_eq!(hazards.as_slice(), &[Hazard::Safe]);
}

#[test]
fn nested_reference_is_found() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    let cond = b.bool(true);
    let one = b.int(1);
    let a = b.ident(n.a);
    let neg = b.unary(unpack_ir::UnaryOp::Neg, a);
    let pick = b.conditional(cond, one, neg);
    let zero = b.int(0);

    let hazards = analyze(&[n.a, n.c], &[zero, pick], &arena);
    assert_eq!(hazards.as_slice(), &[Hazard::Indeterminate, Hazard::Hazardous]);
}

#[test]
fn member_access_is_always_safe() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    let recv = b.ident(n.a);
    let field = b.field(recv, n.x);

    let mut blacklist = FxHashSet::default();
    blacklist.insert(n.a);
    assert_eq!(classify(field, &arena, &blacklist), Hazard::Safe);
}

#[test]
fn call_receiver_skipped_but_arguments_inspected() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let size = interner.intern("size");
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    let recv = b.ident(n.a);
    let on_a = b.call(Some(recv), size, []);
    let arg = b.ident(n.a);
    let with_a = b.call(None, size, [arg]);

    let mut blacklist = FxHashSet::default();
    blacklist.insert(n.a);
    assert_eq!(classify(on_a, &arena, &blacklist), Hazard::Safe);
    assert_eq!(classify(with_a, &arena, &blacklist), Hazard::Hazardous);
}

#[test]
fn unqualified_method_name_is_not_a_reference() {
    let interner = StringInterner::new();
    let n = names(&interner);
    let mut arena = ExprArena::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    // `a()` when `a` is also a blacklisted variable
    let call = b.call(None, n.a, []);

    let mut blacklist = FxHashSet::default();
    blacklist.insert(n.a);
    assert_eq!(classify(call, &arena, &blacklist), Hazard::Indeterminate);
}
