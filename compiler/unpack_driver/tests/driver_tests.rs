//! End-to-end tests for the multi-unit driver.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use unpack_diagnostic::ErrorCode;
use unpack_driver::{desugar_units, DriverConfig, DriverSummary, SourceUnit, UnitReport};
use unpack_ir::{
    AstBuilder, ClassDecl, CompilationUnit, ExprArena, ExprId, Import, Member, MethodDecl,
    ParsedTypeId, PrimitiveType, Span, StmtId, StringInterner, UnitPrinter,
};

/// A unit whose single method declares `n` int locals `x0..xn` and then
/// rotates them `rounds` times with `tuple(x0, .., xn) = tuple(x1, .., x0)`.
/// With `broken`, one extra unpacking has a missing value.
fn rotation_unit(interner: &StringInterner, n: usize, rounds: usize, broken: bool) -> SourceUnit {
    let mut arena = ExprArena::new();
    let vars: Vec<_> = (0..n).map(|i| interner.intern(&format!("x{i}"))).collect();
    let tuple = interner.intern("tuple");
    let mut offset = 0u32;
    let mut next_span = || {
        offset += 10;
        Span::new(offset, offset + 5)
    };

    let mut stmts: Vec<StmtId> = Vec::new();
    let mut b = AstBuilder::new(&mut arena, Span::DUMMY);
    for (i, &var) in vars.iter().enumerate() {
        b.at(next_span());
        let ty = b.primitive(PrimitiveType::Int);
        let init = b.int(i64::try_from(i).unwrap());
        stmts.push(b.local(ty, var, Some(init), false));
    }
    for _ in 0..rounds {
        b.at(next_span());
        let targets: Vec<ExprId> = vars.iter().map(|&v| b.ident(v)).collect();
        let values: Vec<ExprId> = (0..n).map(|i| b.ident(vars[(i + 1) % n])).collect();
        let left = b.call(None, tuple, targets);
        let right = b.call(None, tuple, values);
        let assign = b.assign(left, right);
        stmts.push(b.expr_stmt(assign));
    }
    if broken {
        b.at(next_span());
        let targets: Vec<ExprId> = vars.iter().map(|&v| b.ident(v)).collect();
        let values: Vec<ExprId> = vars.iter().skip(1).map(|&v| b.ident(v)).collect();
        let left = b.call(None, tuple, targets);
        let right = b.call(None, tuple, values);
        let assign = b.assign(left, right);
        stmts.push(b.expr_stmt(assign));
    }
    let body = b.block(stmts);

    let mut unit = CompilationUnit::new();
    unit.imports.push(Import::single_static(
        interner.intern("lombok.Tuple.tuple"),
        Span::DUMMY,
    ));
    unit.classes.push(ClassDecl {
        name: interner.intern("Rotate"),
        members: vec![Member::Method(MethodDecl {
            name: interner.intern("run"),
            return_ty: ParsedTypeId::INVALID,
            params: Vec::new(),
            body: Some(body),
            is_static: false,
            span: Span::DUMMY,
        })],
        span: Span::DUMMY,
    });
    SourceUnit::new(unit, arena)
}

fn batch(interner: &StringInterner) -> Vec<SourceUnit> {
    (0..12)
        .map(|i| rotation_unit(interner, 2 + i % 4, 1 + i % 3, i % 5 == 0))
        .collect()
}

fn printed(units: &[SourceUnit], interner: &StringInterner) -> Vec<String> {
    units
        .iter()
        .map(|s| UnitPrinter::new(&s.arena, interner).print_unit(&s.unit))
        .collect()
}

#[test]
fn parallel_and_sequential_agree() {
    let interner = StringInterner::new();
    let mut parallel = batch(&interner);
    let mut sequential = batch(&interner);

    let par_reports = desugar_units(&mut parallel, &interner, &DriverConfig::default());
    let seq_reports = desugar_units(
        &mut sequential,
        &interner,
        &DriverConfig::default().sequential(),
    );

    assert_eq!(par_reports, seq_reports);
    assert_eq!(printed(&parallel, &interner), printed(&sequential, &interner));
}

#[test]
fn reports_follow_input_order() {
    let interner = StringInterner::new();
    let mut units = batch(&interner);
    let reports = desugar_units(&mut units, &interner, &DriverConfig::default());

    assert_eq!(reports.len(), 12);
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.outcome.transformed, 1 + i % 3, "unit {i}");
        assert_eq!(report.has_errors(), i % 5 == 0, "unit {i}");
    }
}

#[test]
fn every_unit_numbers_temporaries_from_zero() {
    let interner = StringInterner::new();
    let mut units = vec![
        rotation_unit(&interner, 2, 2, false),
        rotation_unit(&interner, 3, 1, false),
    ];
    desugar_units(&mut units, &interner, &DriverConfig::default());
    let texts = printed(&units, &interner);

    assert_eq!(
        texts[0],
        "class Rotate {
    void run() {
        int x0 = 0;
        int x1 = 1;
        final int $tuple0 = x0;
        x0 = x1;
        x1 = $tuple0;
        final int $tuple1 = x0;
        x0 = x1;
        x1 = $tuple1;
    }
}
"
    );
    assert!(texts[1].contains("final int $tuple0 = x0;"));
    assert!(!texts[1].contains("$tuple1"));
}

#[test]
fn broken_unit_keeps_import_and_reports() {
    let interner = StringInterner::new();
    let mut units = vec![rotation_unit(&interner, 3, 0, true)];
    let reports: Vec<UnitReport> =
        desugar_units(&mut units, &interner, &DriverConfig::default().sequential());

    assert_eq!(reports[0].diagnostics.len(), 1);
    assert_eq!(reports[0].diagnostics[0].code, ErrorCode::E0101);
    assert_eq!(units[0].unit.imports.len(), 1);

    let summary = DriverSummary::from_reports(&reports);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.transformed, 0);
}
