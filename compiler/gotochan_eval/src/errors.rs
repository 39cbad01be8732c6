//! Runtime error types.
//!
//! Every runtime error is fatal: the run stops and the error reports the
//! line that was executing. `EvalErrorKind` fixes the message and the
//! diagnostic code.

use gotochan_diagnostic::{Diagnostic, ErrorCode};
use gotochan_ir::{ArithOp, CompareOp};

/// A fatal runtime error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("runtime error on line {}: {kind}", .line + 1)]
pub struct EvalError {
    /// 0-based line of the failing instruction.
    pub line: usize,
    pub kind: EvalErrorKind,
}

impl EvalError {
    pub fn new(line: usize, kind: EvalErrorKind) -> Self {
        EvalError { line, kind }
    }

    /// The 1-based line number shown to users.
    pub fn display_line(&self) -> usize {
        self.line + 1
    }

    /// Convert to a diagnostic for the terminal emitter.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.kind.code())
            .with_message(self.kind.to_string())
            .with_line(self.line);
        match &self.kind {
            EvalErrorKind::UndefinedCondition { name } => {
                diag.with_suggestion(format!("assign `{name} = yes` or `{name} = no` first"))
            }
            EvalErrorKind::BacktoWithoutGoto { .. } => {
                diag.with_note("backto returns to the line after the latest goto of the label")
            }
            EvalErrorKind::InvalidOperands { .. } => {
                diag.with_note("only `+=` accepts non-number operands (it concatenates)")
            }
            _ => diag,
        }
    }
}

/// What went wrong while executing the line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("no boolean variable found with identifier '{name}'.")]
    UndefinedCondition { name: String },
    #[error("condition variable '{name}' must be a boolean, found '{type_name}'.")]
    NonBooleanCondition {
        name: String,
        type_name: &'static str,
    },
    #[error("goto has never been called on label '{label}'.")]
    BacktoWithoutGoto { label: String },
    #[error("cannot {} values of type '{left}' and '{right}'.", .op.verb())]
    InvalidOperands {
        op: ArithOp,
        left: &'static str,
        right: &'static str,
    },
    #[error("cannot compare types '{left}' and '{right}' with operator '{}'.", .op.as_symbol())]
    InvalidComparison {
        op: CompareOp,
        left: &'static str,
        right: &'static str,
    },
    #[error("unknown data type of value '{token}'.")]
    UnknownValue { token: String },
    #[error("{message}")]
    Builtin { name: String, message: String },
    #[error("'{name}' is not a built-in.")]
    UnknownBuiltin { name: String },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UndefinedCondition { .. } => ErrorCode::E6001,
            EvalErrorKind::NonBooleanCondition { .. } => ErrorCode::E6002,
            EvalErrorKind::BacktoWithoutGoto { .. } => ErrorCode::E6003,
            EvalErrorKind::InvalidOperands { .. } => ErrorCode::E6004,
            EvalErrorKind::InvalidComparison { .. } => ErrorCode::E6005,
            EvalErrorKind::UnknownValue { .. } => ErrorCode::E6006,
            EvalErrorKind::Builtin { .. } => ErrorCode::E6007,
            EvalErrorKind::UnknownBuiltin { .. } => ErrorCode::E6008,
        }
    }
}
