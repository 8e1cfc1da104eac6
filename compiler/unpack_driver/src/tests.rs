use super::*;
use pretty_assertions::assert_eq;
use unpack_diagnostic::ErrorCode;
use unpack_ir::{
    AstBuilder, ClassDecl, Import, Member, MethodDecl, ParsedTypeId, PrimitiveType, Span,
};

/// `int a; int b;` followed by `bad` arity mismatches, each at its own offset.
fn unit_with_mismatches(interner: &StringInterner, bad: u32) -> SourceUnit {
    let mut arena = ExprArena::new();
    let (a, b, tuple) = (
        interner.intern("a"),
        interner.intern("b"),
        interner.intern("tuple"),
    );
    let mut stmts = Vec::new();
    let mut bld = AstBuilder::new(&mut arena, Span::new(0, 5));
    let ty = bld.primitive(PrimitiveType::Int);
    stmts.push(bld.local(ty, a, None, false));
    let ty = bld.primitive(PrimitiveType::Int);
    stmts.push(bld.local(ty, b, None, false));
    for i in 0..bad {
        bld.at(Span::new(100 + i * 10, 105 + i * 10));
        let ta = bld.ident(a);
        let tb = bld.ident(b);
        let one = bld.int(1);
        let left = bld.call(None, tuple, [ta, tb]);
        let right = bld.call(None, tuple, [one]);
        let assign = bld.assign(left, right);
        stmts.push(bld.expr_stmt(assign));
    }
    let body = bld.block(stmts);

    let mut unit = CompilationUnit::new();
    unit.imports.push(Import::single_static(
        interner.intern("lombok.Tuple.tuple"),
        Span::DUMMY,
    ));
    unit.classes.push(ClassDecl {
        name: interner.intern("Demo"),
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

#[test]
fn default_config_is_parallel() {
    let config = DriverConfig::default();
    assert!(config.parallel);
    assert!(!config.sequential().parallel);
}

#[test]
fn builder_methods_replace_sections() {
    let config = DriverConfig::default()
        .with_desugar(DesugarConfig::default().with_temp_prefix("$t"))
        .with_diagnostics(DiagnosticConfig::unlimited());
    assert_eq!(config.desugar.temp_prefix, "$t");
    assert_eq!(config.diagnostics, DiagnosticConfig::unlimited());
}

#[test]
fn empty_input_gives_no_reports() {
    let interner = StringInterner::new();
    let mut units: Vec<SourceUnit> = Vec::new();
    let reports = desugar_units(&mut units, &interner, &DriverConfig::default());
    assert!(reports.is_empty());
    assert_eq!(DriverSummary::from_reports(&reports), DriverSummary::default());
}

#[test]
fn diagnostics_come_from_outcome_problems() {
    let interner = StringInterner::new();
    let mut units = vec![unit_with_mismatches(&interner, 2)];
    let reports = desugar_units(&mut units, &interner, &DriverConfig::default());

    let report = &reports[0];
    assert!(report.has_errors());
    assert_eq!(report.outcome.problems.len(), 2);
    let codes: Vec<ErrorCode> = report.diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0101, ErrorCode::E0101]);
}

#[test]
fn error_limit_applies_per_unit() {
    let interner = StringInterner::new();
    let mut units = vec![
        unit_with_mismatches(&interner, 4),
        unit_with_mismatches(&interner, 1),
    ];
    let config = DriverConfig::default().with_diagnostics(DiagnosticConfig {
        error_limit: 2,
        ..DiagnosticConfig::default()
    });
    let reports = desugar_units(&mut units, &interner, &config);

    // Two errors plus the "too many errors" note.
    assert_eq!(reports[0].diagnostics.len(), 3);
    assert_eq!(reports[0].diagnostics[2].code, ErrorCode::E9002);
    assert_eq!(reports[1].diagnostics.len(), 1);
    // The outcome keeps every problem regardless of the limit.
    assert_eq!(reports[0].outcome.problems.len(), 4);
}

#[test]
fn summary_adds_up_reports() {
    let interner = StringInterner::new();
    let mut units = vec![
        unit_with_mismatches(&interner, 1),
        unit_with_mismatches(&interner, 0),
        unit_with_mismatches(&interner, 2),
    ];
    let reports = desugar_units(&mut units, &interner, &DriverConfig::default());
    let summary = DriverSummary::from_reports(&reports);
    assert_eq!(
        summary,
        DriverSummary {
            units: 3,
            transformed: 0,
            temporaries: 0,
            skipped: 0,
            errors: 3,
        }
    );
}
