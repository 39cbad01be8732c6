//! The value algebra: arithmetic and comparison.
//!
//! Arithmetic is defined on number pairs. `+` is the exception: when either
//! side is not a number it renders both sides and concatenates, with
//! booleans spelled `True`/`False`. Equality works on any pair; ordering
//! needs two numbers.

use gotochan_ir::{ArithOp, CompareOp, Value};

use crate::EvalErrorKind;

/// Apply `left <op> right`.
pub fn evaluate_arith(left: &Value, right: &Value, op: ArithOp) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(eval_number(*a, *b, op))),
        _ if op == ArithOp::Add => Ok(Value::Str(concat_text(left) + &concat_text(right))),
        _ => Err(EvalErrorKind::InvalidOperands {
            op,
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}

/// A value's text on either side of a concatenation.
fn concat_text(value: &Value) -> String {
    match value {
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// IEEE semantics throughout: dividing by zero gives an infinity, not an
/// error.
fn eval_number(a: f64, b: f64, op: ArithOp) -> f64 {
    match op {
        ArithOp::Add => a + b,
        ArithOp::Sub => a - b,
        ArithOp::Mul => a * b,
        ArithOp::Div => a / b,
        ArithOp::Mod => a % b,
        ArithOp::Pow => a.powf(b),
    }
}

/// Evaluate `left <op> right` to a boolean.
pub fn evaluate_compare(left: &Value, op: CompareOp, right: &Value) -> Result<bool, EvalErrorKind> {
    if !op.is_ordering() {
        return Ok((left == right) == (op == CompareOp::Eq));
    }
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(EvalErrorKind::InvalidComparison {
            op,
            left: left.type_name(),
            right: right.type_name(),
        });
    };
    Ok(match op {
        CompareOp::Gt => a > b,
        CompareOp::Lt => a < b,
        CompareOp::GtEq => a >= b,
        _ => a <= b,
    })
}
