//! Literal tokens, classified once at parse time.
//!
//! A value token on a source line is one of:
//!
//! | Token shape                  | Operand              |
//! |------------------------------|----------------------|
//! | `~text`                      | `Str` (escapes cooked) |
//! | parses as `f64`              | `Number`             |
//! | `yes` / `no`                 | `Bool`               |
//! | `null`                       | `Null`               |
//! | valid identifier             | `Variable`           |
//! | anything else                | `Unknown`            |
//!
//! The order matters: `yes` is always a boolean even if a variable called
//! `yes` has been assigned. `Unknown` is kept rather than rejected so the
//! error surfaces when (and only if) the line executes.

use std::fmt;

use crate::{is_valid_identifier, Value};

/// A classified value token.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Str(String),
    Number(f64),
    Bool(bool),
    Null,
    /// A variable reference, resolved against the store when executed.
    Variable(String),
    /// A token of no known shape; executing it is a runtime error.
    Unknown(String),
}

impl Operand {
    /// Classify a single token.
    pub fn parse(token: &str) -> Self {
        if let Some(text) = token.strip_prefix('~') {
            return Operand::Str(cook_string(text));
        }
        if looks_numeric(token) {
            if let Ok(n) = token.parse::<f64>() {
                return Operand::Number(n);
            }
        }
        match token {
            "yes" => Operand::Bool(true),
            "no" => Operand::Bool(false),
            "null" => Operand::Null,
            _ if is_valid_identifier(token) => Operand::Variable(token.to_string()),
            _ => Operand::Unknown(token.to_string()),
        }
    }

    /// The value of a constant operand, or `None` for variables and unknown
    /// tokens, which need the variable store.
    pub fn constant(&self) -> Option<Value> {
        match self {
            Operand::Str(s) => Some(Value::Str(s.clone())),
            Operand::Number(n) => Some(Value::Number(*n)),
            Operand::Bool(b) => Some(Value::Bool(*b)),
            Operand::Null => Some(Value::Null),
            Operand::Variable(_) | Operand::Unknown(_) => None,
        }
    }
}

/// Only tokens that start like a number, plus the exact spellings `NaN`,
/// `Infinity` and `-Infinity`, are handed to the float parser, so
/// identifiers such as `inf` or `nan` remain variable names.
fn looks_numeric(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    match unsigned.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '.' => true,
        _ => unsigned == "Infinity" || token == "NaN",
    }
}

/// Expand the escapes of a `~` string body.
///
/// Space and `#` cannot appear raw on a line (the tokenizer splits on one,
/// the comment stripper cuts at the other), so `~` stands for a space, `\h`
/// for `#`, and `\n` for a newline.
fn cook_string(body: &str) -> String {
    body.replace('~', " ").replace("\\n", "\n").replace("\\h", "#")
}

/// Inverse of `cook_string`, used when rendering instructions.
fn uncook_string(text: &str) -> String {
    text.replace('\n', "\\n").replace('#', "\\h").replace(' ', "~")
}

/// Renders the operand back into token form.
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Str(s) => write!(f, "~{}", uncook_string(s)),
            Operand::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Operand::Number(n) => write!(f, "{n}"),
            Operand::Bool(true) => f.write_str("yes"),
            Operand::Bool(false) => f.write_str("no"),
            Operand::Null => f.write_str("null"),
            Operand::Variable(name) | Operand::Unknown(name) => f.write_str(name),
        }
    }
}
