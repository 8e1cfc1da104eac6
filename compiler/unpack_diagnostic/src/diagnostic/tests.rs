use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E0101)
        .with_message("left and right side must have the same number of arguments")
        .with_label(Span::new(10, 30), "unpacking here")
        .with_secondary_label(Span::new(10, 18), "2 targets")
        .with_note("found 3 values")
        .with_suggestion("add or remove values");

    assert_eq!(diag.code, ErrorCode::E0101);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::new(10, 30)));
    assert_eq!(diag.notes, vec!["found 3 values".to_string()]);
}

#[test]
fn test_primary_span_skips_secondary_labels() {
    let diag = Diagnostic::warning(ErrorCode::E0102)
        .with_secondary_label(Span::new(0, 2), "context")
        .with_label(Span::new(5, 6), "here");
    assert!(!diag.is_error());
    assert_eq!(diag.primary_span(), Some(Span::new(5, 6)));

    let bare = Diagnostic::error(ErrorCode::E9001);
    assert_eq!(bare.primary_span(), None);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E0103)
        .with_message("can only be used inside a method body")
        .with_label(Span::new(4, 9), "outside any method")
        .with_note("field initializers are not method bodies")
        .with_suggestion("move the assignment into a method");

    assert_eq!(
        diag.to_string(),
        "error [E0103]: can only be used inside a method body
  --> 4..9: outside any method
  = note: field initializers are not method bodies
  = help: move the assignment into a method"
    );
}
