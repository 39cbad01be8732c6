#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;

const BUILTINS: [&str; 3] = ["say", "wait", "input"];

fn parse_ok(source: &str) -> Program {
    parse(source, &BUILTINS).unwrap()
}

fn parse_err(source: &str) -> ParseError {
    parse(source, &BUILTINS).unwrap_err()
}

fn goto_line(target_line: usize) -> Instruction {
    Instruction::GotoLine {
        target_line,
        condition: None,
    }
}

// Slots

#[test]
fn test_every_line_gets_a_slot() {
    let program = parse_ok("x = 1\n\n# comment\nlabel top\n   \ny = 2");
    assert_eq!(program.len(), 6);
    assert!(program.get(0).is_some());
    assert_eq!(program.get(1), None);
    assert_eq!(program.get(2), None);
    assert_eq!(program.get(3), None);
    assert_eq!(program.get(4), None);
    assert!(program.get(5).is_some());
}

#[test]
fn test_carriage_returns_and_tabs_are_removed() {
    let program = parse_ok("\tx = 1\r\ny = 2\t\r\n");
    assert_eq!(
        program.get(0),
        Some(&Instruction::AssignValue {
            variable: "x".to_string(),
            value: Operand::Number(1.0),
        })
    );
    assert_eq!(
        program.get(1),
        Some(&Instruction::AssignValue {
            variable: "y".to_string(),
            value: Operand::Number(2.0),
        })
    );
}

#[test]
fn test_trailing_comment_is_stripped() {
    let program = parse_ok("x = ~hi # set x\ngoto 1 # forever");
    assert_eq!(
        program.get(0),
        Some(&Instruction::AssignValue {
            variable: "x".to_string(),
            value: Operand::Str("hi".to_string()),
        })
    );
    assert_eq!(program.get(1), Some(&goto_line(0)));
}

// Goto targets

#[test]
fn test_goto_builtin() {
    let program = parse_ok("goto say if ready");
    assert_eq!(
        program.get(0),
        Some(&Instruction::GotoBuiltin {
            name: "say".to_string(),
            condition: Some("ready".to_string()),
        })
    );
}

#[test]
fn test_builtin_wins_over_label() {
    let program = parse_ok("goto say\nlabel say");
    assert!(matches!(
        program.get(0),
        Some(Instruction::GotoBuiltin { .. })
    ));
}

#[test]
fn test_goto_label_forward_and_backward() {
    let program = parse_ok("label top\ngoto bottom\ngoto top\nlabel bottom");
    assert_eq!(
        program.get(1),
        Some(&Instruction::GotoLabel {
            name: "bottom".to_string(),
            target_line: 3,
            condition: None,
        })
    );
    assert_eq!(
        program.get(2),
        Some(&Instruction::GotoLabel {
            name: "top".to_string(),
            target_line: 0,
            condition: None,
        })
    );
}

#[test]
fn test_label_resolution_is_first_match() {
    let program = parse_ok("goto a\nlabel a\nlabel a");
    assert!(matches!(
        program.get(0),
        Some(Instruction::GotoLabel { target_line: 1, .. })
    ));
}

#[test]
fn test_absolute_line_is_one_based() {
    let program = parse_ok("goto 5");
    assert_eq!(program.get(0), Some(&goto_line(4)));
}

#[test]
fn test_relative_offsets() {
    let program = parse_ok("x = 1\nx = 2\ngoto +3\ngoto -2");
    assert_eq!(program.get(2), Some(&goto_line(5)));
    assert_eq!(program.get(3), Some(&goto_line(1)));
}

#[test]
fn test_goto_past_end_is_allowed() {
    let program = parse_ok("goto 100");
    assert_eq!(program.get(0), Some(&goto_line(99)));
}

#[test]
fn test_digits_resolve_as_line_numbers() {
    let program = parse_ok("goto 2\nx = 1");
    assert_eq!(program.get(0), Some(&goto_line(1)));
}

#[test]
fn test_conditional_line_goto() {
    let program = parse_ok("goto -0 if again");
    assert_eq!(
        program.get(0),
        Some(&Instruction::GotoLine {
            target_line: 0,
            condition: Some("again".to_string()),
        })
    );
}

// Goto errors

#[test]
fn test_goto_without_target() {
    let err = parse_err("x = 1\ngoto");
    assert_eq!(err.line, 1);
    assert_eq!(err.kind, ParseErrorKind::MissingGotoTarget);
}

#[test]
fn test_goto_expected_if() {
    let err = parse_err("goto 3 when x");
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedIf {
            found: "when".to_string()
        }
    );
}

#[test]
fn test_goto_if_without_variable() {
    assert_eq!(
        parse_err("goto 3 if").kind,
        ParseErrorKind::MissingConditionVariable
    );
}

#[test]
fn test_goto_trailing_words() {
    assert_eq!(
        parse_err("goto 3 if x y").kind,
        ParseErrorKind::UnexpectedToken {
            found: "y".to_string(),
            after: "goto condition",
        }
    );
}

#[test]
fn test_goto_bad_condition_identifier() {
    assert_eq!(
        parse_err("goto 3 if 9lives").kind,
        ParseErrorKind::InvalidIdentifier {
            name: "9lives".to_string()
        }
    );
}

#[test]
fn test_goto_unknown_target() {
    assert_eq!(
        parse_err("goto nowhere").kind,
        ParseErrorKind::InvalidGotoTarget {
            target: "nowhere".to_string()
        }
    );
    assert_eq!(
        parse_err("goto +").kind,
        ParseErrorKind::InvalidGotoTarget {
            target: "+".to_string()
        }
    );
    assert_eq!(
        parse_err("goto 1.5").kind,
        ParseErrorKind::InvalidGotoTarget {
            target: "1.5".to_string()
        }
    );
}

#[test]
fn test_goto_before_start() {
    assert_eq!(
        parse_err("goto 0").kind,
        ParseErrorKind::TargetBeforeStart {
            target: "0".to_string()
        }
    );
    assert_eq!(
        parse_err("x = 1\ngoto -2").kind,
        ParseErrorKind::TargetBeforeStart {
            target: "-2".to_string()
        }
    );
}

// Backto and labels

#[test]
fn test_backto() {
    let program = parse_ok("backto undeclared");
    assert_eq!(
        program.get(0),
        Some(&Instruction::BackTo {
            label: "undeclared".to_string()
        })
    );
    assert_eq!(
        parse_err("backto").kind,
        ParseErrorKind::MissingBacktoLabel
    );
}

#[test]
fn test_label_errors() {
    assert_eq!(
        parse_err("label").kind,
        ParseErrorKind::MissingLabelIdentifier
    );
    assert_eq!(
        parse_err("label my_label").kind,
        ParseErrorKind::InvalidIdentifier {
            name: "my_label".to_string()
        }
    );
    assert_eq!(
        parse_err("label a b").kind,
        ParseErrorKind::UnexpectedToken {
            found: "b".to_string(),
            after: "label identifier",
        }
    );
}

// Assignments

#[test]
fn test_assign_compare() {
    let program = parse_ok("result = 1 > 2");
    assert_eq!(
        program.get(0),
        Some(&Instruction::AssignCompare {
            variable: "result".to_string(),
            lhs: Operand::Number(1.0),
            op: CompareOp::Gt,
            rhs: Operand::Number(2.0),
        })
    );
}

#[test]
fn test_variable_ops() {
    let program = parse_ok("x += 1\nx -= 1\nx *= 2\nx /= 2\nx %= 3\nx ^= 2");
    let ops: Vec<ArithOp> = program
        .instructions()
        .map(|(_, instr)| match instr {
            Instruction::VariableOp { op, .. } => *op,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(
        ops,
        vec![
            ArithOp::Add,
            ArithOp::Sub,
            ArithOp::Mul,
            ArithOp::Div,
            ArithOp::Mod,
            ArithOp::Pow,
        ]
    );
}

#[test]
fn test_unknown_value_shape_is_deferred_to_runtime() {
    let program = parse_ok("x = 5x");
    assert_eq!(
        program.get(0),
        Some(&Instruction::AssignValue {
            variable: "x".to_string(),
            value: Operand::Unknown("5x".to_string()),
        })
    );
}

#[test]
fn test_assignment_word_counts() {
    assert_eq!(parse_err("x").kind, ParseErrorKind::MissingSetOperator);
    assert_eq!(parse_err("x =").kind, ParseErrorKind::MissingValue);
    assert_eq!(
        parse_err("x = 1 ==").kind,
        ParseErrorKind::MissingComparisonValue
    );
    assert_eq!(
        parse_err("x = 1 == 2 3").kind,
        ParseErrorKind::UnexpectedToken {
            found: "3".to_string(),
            after: "comparison",
        }
    );
}

#[test]
fn test_assignment_operator_errors() {
    assert_eq!(
        parse_err("x := 1").kind,
        ParseErrorKind::UnknownSetOperator {
            op: ":=".to_string()
        }
    );
    assert_eq!(
        parse_err("x = 1 <> 2").kind,
        ParseErrorKind::UnknownComparisonOperator {
            op: "<>".to_string()
        }
    );
    assert_eq!(
        parse_err("x += 1 == 2").kind,
        ParseErrorKind::CompoundComparison {
            op: "+=".to_string()
        }
    );
}

#[test]
fn test_invalid_variable_name() {
    let err = parse_err("\n\n2x = 1");
    assert_eq!(err.line, 2);
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidIdentifier {
            name: "2x".to_string()
        }
    );
}

#[test]
fn test_first_error_stops_parsing() {
    let err = parse_err("goto\nlabel");
    assert_eq!(err.line, 0);
}
