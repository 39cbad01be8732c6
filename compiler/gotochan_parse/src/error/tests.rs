use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_is_one_based() {
    let err = ParseError::new(2, ParseErrorKind::MissingGotoTarget);
    assert_eq!(err.display_line(), 3);
    assert_eq!(
        err.to_string(),
        "syntax error on line 3: goto statements must have a target."
    );
}

#[test]
fn test_diagnostic_carries_code_and_line() {
    let err = ParseError::new(
        0,
        ParseErrorKind::InvalidGotoTarget {
            target: "x1".to_string(),
        },
    );
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1014);
    assert_eq!(diag.line, Some(0));
    assert_eq!(
        diag.message,
        "the target line number must be a valid integer, integer offset or label (got 'x1')."
    );
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_every_kind_is_a_syntax_code() {
    let kinds = [
        ParseErrorKind::MissingGotoTarget,
        ParseErrorKind::ExpectedIf {
            found: "when".to_string(),
        },
        ParseErrorKind::UnexpectedToken {
            found: "x".to_string(),
            after: "comparison",
        },
        ParseErrorKind::TargetBeforeStart {
            target: "-9".to_string(),
        },
    ];
    for kind in kinds {
        assert!(kind.code().is_syntax_error(), "{kind:?}");
    }
}
