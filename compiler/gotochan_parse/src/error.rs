//! Parse error types.
//!
//! A syntax error is fatal: parsing stops at the first malformed line. The
//! error records the 0-based line and a `ParseErrorKind`, which fixes both
//! the message and the diagnostic code.

use gotochan_diagnostic::{Diagnostic, ErrorCode};

/// A fatal syntax error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("syntax error on line {}: {kind}", .line + 1)]
pub struct ParseError {
    /// 0-based source line.
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind) -> Self {
        ParseError { line, kind }
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
            ParseErrorKind::InvalidGotoTarget { .. } => diag.with_note(
                "a goto target is a built-in name, a label, a line number, or a +/- offset",
            ),
            ParseErrorKind::InvalidIdentifier { .. } => diag
                .with_note("identifiers start with a letter and contain only letters and digits"),
            ParseErrorKind::CompoundComparison { .. } => {
                diag.with_suggestion("assign the comparison with `=`, then apply the operator")
            }
            _ => diag,
        }
    }
}

/// What went wrong on the line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("goto statements must have a target.")]
    MissingGotoTarget,
    #[error("expected if after goto statement, got '{found}'.")]
    ExpectedIf { found: String },
    #[error("if statements must be followed by a variable identifier.")]
    MissingConditionVariable,
    #[error("unexpected '{found}' after {after}.")]
    UnexpectedToken { found: String, after: &'static str },
    #[error("backto statements must be followed by a label.")]
    MissingBacktoLabel,
    #[error("labels must have an identifier.")]
    MissingLabelIdentifier,
    #[error("'{name}' is not a valid identifier.")]
    InvalidIdentifier { name: String },
    #[error("variable names must be followed by a set operator.")]
    MissingSetOperator,
    #[error("set operators must be followed by a value.")]
    MissingValue,
    #[error("comparison operator must be followed by a value.")]
    MissingComparisonValue,
    #[error("unknown set operator: '{op}'.")]
    UnknownSetOperator { op: String },
    #[error("unknown comparison operator: '{op}'.")]
    UnknownComparisonOperator { op: String },
    #[error("only '=' can assign a comparison (got '{op}').")]
    CompoundComparison { op: String },
    #[error(
        "the target line number must be a valid integer, integer offset or label (got '{target}')."
    )]
    InvalidGotoTarget { target: String },
    #[error("goto target '{target}' is before the start of the program.")]
    TargetBeforeStart { target: String },
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::MissingGotoTarget => ErrorCode::E1001,
            ParseErrorKind::ExpectedIf { .. } => ErrorCode::E1002,
            ParseErrorKind::MissingConditionVariable => ErrorCode::E1003,
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1004,
            ParseErrorKind::MissingBacktoLabel => ErrorCode::E1005,
            ParseErrorKind::MissingLabelIdentifier => ErrorCode::E1006,
            ParseErrorKind::InvalidIdentifier { .. } => ErrorCode::E1007,
            ParseErrorKind::MissingSetOperator => ErrorCode::E1008,
            ParseErrorKind::MissingValue => ErrorCode::E1009,
            ParseErrorKind::MissingComparisonValue => ErrorCode::E1010,
            ParseErrorKind::UnknownSetOperator { .. } => ErrorCode::E1011,
            ParseErrorKind::UnknownComparisonOperator { .. } => ErrorCode::E1012,
            ParseErrorKind::CompoundComparison { .. } => ErrorCode::E1013,
            ParseErrorKind::InvalidGotoTarget { .. } => ErrorCode::E1014,
            ParseErrorKind::TargetBeforeStart { .. } => ErrorCode::E1015,
        }
    }
}

#[cfg(test)]
mod tests;
