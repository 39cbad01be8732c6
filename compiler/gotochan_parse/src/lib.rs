//! Line parser for gotochan.
//!
//! Turns source text into a `Program`: one slot per source line, with every
//! `goto` target resolved up front. Parsing stops at the first malformed
//! line; there is no error recovery because every error is fatal anyway.
//!
//! # Pipeline
//!
//! 1. Remove `\r` and `\t` from the whole document.
//! 2. Index `label` lines (see `labels`), so gotos may refer forward.
//! 3. Per line: cut the comment at the first `#`, trim spaces, split on
//!    single spaces, and dispatch on the first word.

mod error;
mod labels;

pub use error::{ParseError, ParseErrorKind};

use gotochan_ir::{
    is_valid_identifier, ArithOp, BuiltinLookup, CompareOp, Instruction, Operand, Program,
};
use smallvec::SmallVec;
use tracing::{debug, trace};

use labels::LabelIndex;

/// Words of one line. Well-formed lines have at most five.
type Words<'a> = SmallVec<[&'a str; 5]>;

/// Parse a whole program.
///
/// `builtins` decides which `goto` targets are built-in labels. It is only
/// queried by name; the same registry is later handed to the interpreter.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse<B: BuiltinLookup + ?Sized>(source: &str, builtins: &B) -> Result<Program, ParseError> {
    let normalized: String = source.chars().filter(|c| !matches!(c, '\r' | '\t')).collect();
    let lines: Vec<&str> = normalized.split('\n').collect();

    let parser = Parser {
        builtins,
        labels: LabelIndex::build(&lines),
    };

    let slots = lines
        .iter()
        .enumerate()
        .map(|(line, text)| {
            parser
                .parse_line(line, text)
                .map_err(|kind| ParseError::new(line, kind))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(lines = slots.len(), "parsed program");
    Ok(Program::new(slots))
}

/// Per-program parser state.
struct Parser<'src, 'b, B: ?Sized> {
    builtins: &'b B,
    labels: LabelIndex<'src>,
}

impl<B: BuiltinLookup + ?Sized> Parser<'_, '_, B> {
    fn parse_line(&self, line: usize, text: &str) -> Result<Option<Instruction>, ParseErrorKind> {
        let code = strip_comment(text).trim_matches(' ');
        if code.is_empty() {
            return Ok(None);
        }

        let words: Words<'_> = code.split(' ').collect();
        trace!(line, ?words, "parse line");

        match words[0] {
            "goto" => self.parse_goto(line, &words).map(Some),
            "backto" => parse_backto(&words).map(Some),
            "label" => parse_label(&words).map(|()| None),
            _ => parse_assignment(&words).map(Some),
        }
    }

    /// `goto <target> [if <var>]`
    fn parse_goto(&self, line: usize, words: &[&str]) -> Result<Instruction, ParseErrorKind> {
        let target = match words.get(1) {
            Some(&target) if !target.is_empty() => target,
            _ => return Err(ParseErrorKind::MissingGotoTarget),
        };
        let condition = parse_condition(&words[2..])?;

        if self.builtins.is_builtin(target) {
            debug!(line, target, "goto built-in");
            return Ok(Instruction::GotoBuiltin {
                name: target.to_string(),
                condition,
            });
        }

        if let Some(target_line) = self.labels.find(target) {
            debug!(line, target, target_line, "goto label");
            return Ok(Instruction::GotoLabel {
                name: target.to_string(),
                target_line,
                condition,
            });
        }

        let target_line = resolve_line_target(line, target)?;
        debug!(line, target, target_line, "goto line");
        Ok(Instruction::GotoLine {
            target_line,
            condition,
        })
    }
}

/// Everything before the first `#`.
fn strip_comment(text: &str) -> &str {
    text.split_once('#').map_or(text, |(code, _)| code)
}

/// The optional `if <var>` tail of a goto.
fn parse_condition(words: &[&str]) -> Result<Option<String>, ParseErrorKind> {
    match words {
        [] => Ok(None),
        [keyword, ..] if *keyword != "if" => Err(ParseErrorKind::ExpectedIf {
            found: (*keyword).to_string(),
        }),
        [_] => Err(ParseErrorKind::MissingConditionVariable),
        [_, variable, rest @ ..] => {
            expect_end(rest, "goto condition")?;
            expect_identifier(variable)?;
            Ok(Some((*variable).to_string()))
        }
    }
}

/// Resolve a numeric goto target to a 0-based line.
///
/// `N` is 1-based and absolute; `+N` and `-N` are offsets from the current
/// line with no off-by-one adjustment.
fn resolve_line_target(line: usize, target: &str) -> Result<usize, ParseErrorKind> {
    let invalid = || ParseErrorKind::InvalidGotoTarget {
        target: target.to_string(),
    };
    let before_start = || ParseErrorKind::TargetBeforeStart {
        target: target.to_string(),
    };

    let (sign, digits) = match target.as_bytes().first() {
        Some(b'+') => (Some('+'), &target[1..]),
        Some(b'-') => (Some('-'), &target[1..]),
        _ => (None, target),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let amount: usize = digits.parse().map_err(|_| invalid())?;

    match sign {
        None => amount.checked_sub(1).ok_or_else(before_start),
        Some('+') => line.checked_add(amount).ok_or_else(invalid),
        Some(_) => line.checked_sub(amount).ok_or_else(before_start),
    }
}

/// `backto <label>`
fn parse_backto(words: &[&str]) -> Result<Instruction, ParseErrorKind> {
    match words {
        [_] | [_, ""] => Err(ParseErrorKind::MissingBacktoLabel),
        [_, label, rest @ ..] => {
            expect_end(rest, "backto label")?;
            expect_identifier(label)?;
            Ok(Instruction::BackTo {
                label: (*label).to_string(),
            })
        }
        [] => Err(ParseErrorKind::MissingBacktoLabel),
    }
}

/// `label <identifier>`: validated, but compiles to an empty slot.
fn parse_label(words: &[&str]) -> Result<(), ParseErrorKind> {
    match words {
        [] | [_] | [_, ""] => Err(ParseErrorKind::MissingLabelIdentifier),
        [_, name, rest @ ..] => {
            expect_end(rest, "label identifier")?;
            expect_identifier(name)
        }
    }
}

/// `<var> = <value>`, `<var> = <a> <cmp> <b>`, or `<var> <op>= <value>`.
fn parse_assignment(words: &[&str]) -> Result<Instruction, ParseErrorKind> {
    let variable = words[0];
    expect_identifier(variable)?;

    match words.len() {
        1 => return Err(ParseErrorKind::MissingSetOperator),
        2 => return Err(ParseErrorKind::MissingValue),
        4 => return Err(ParseErrorKind::MissingComparisonValue),
        _ => expect_end(words.get(5..).unwrap_or_default(), "comparison")?,
    }

    let (operator, value) = (words[1], words[2]);

    if words.len() == 5 {
        if operator != "=" {
            return Err(match ArithOp::from_assign_symbol(operator) {
                Some(_) => ParseErrorKind::CompoundComparison {
                    op: operator.to_string(),
                },
                None => ParseErrorKind::UnknownSetOperator {
                    op: operator.to_string(),
                },
            });
        }
        let op = CompareOp::from_symbol(words[3]).ok_or_else(|| {
            ParseErrorKind::UnknownComparisonOperator {
                op: words[3].to_string(),
            }
        })?;
        return Ok(Instruction::AssignCompare {
            variable: variable.to_string(),
            lhs: Operand::parse(value),
            op,
            rhs: Operand::parse(words[4]),
        });
    }

    if operator == "=" {
        return Ok(Instruction::AssignValue {
            variable: variable.to_string(),
            value: Operand::parse(value),
        });
    }

    match ArithOp::from_assign_symbol(operator) {
        Some(op) => Ok(Instruction::VariableOp {
            variable: variable.to_string(),
            op,
            value: Operand::parse(value),
        }),
        None => Err(ParseErrorKind::UnknownSetOperator {
            op: operator.to_string(),
        }),
    }
}

fn expect_identifier(name: &str) -> Result<(), ParseErrorKind> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(ParseErrorKind::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

/// Fail on the first leftover word.
fn expect_end(rest: &[&str], after: &'static str) -> Result<(), ParseErrorKind> {
    match rest.first() {
        None => Ok(()),
        Some(found) => Err(ParseErrorKind::UnexpectedToken {
            found: (*found).to_string(),
            after,
        }),
    }
}

#[cfg(test)]
mod tests;
