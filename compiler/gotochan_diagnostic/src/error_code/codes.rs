use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E1xxx: Syntax errors (raised while parsing)
/// - E6xxx: Runtime errors (raised while executing)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Syntax Errors (E1xxx)
    /// `goto` without a target
    E1001,
    /// Something other than `if` after a goto target
    E1002,
    /// `if` without a condition variable
    E1003,
    /// Extra tokens at the end of a statement
    E1004,
    /// `backto` without a label
    E1005,
    /// `label` without an identifier
    E1006,
    /// Invalid identifier
    E1007,
    /// Variable name without a set operator
    E1008,
    /// Set operator without a value
    E1009,
    /// Comparison operator without a value
    E1010,
    /// Unknown set operator
    E1011,
    /// Unknown comparison operator
    E1012,
    /// Comparison assigned with a compound operator
    E1013,
    /// Goto target is not a built-in, label, or line number
    E1014,
    /// Goto target before the first line
    E1015,

    // Runtime Errors (E6xxx)
    /// Condition variable is unset
    E6001,
    /// Condition variable is not a boolean
    E6002,
    /// `backto` a label no goto has targeted
    E6003,
    /// Arithmetic on unsupported operand types
    E6004,
    /// Ordering comparison on non-numbers
    E6005,
    /// Value token of unknown shape
    E6006,
    /// A built-in reported failure
    E6007,
    /// Built-in missing from the registry at run time
    E6008,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
            ErrorCode::E1013 => "E1013",
            ErrorCode::E1014 => "E1014",
            ErrorCode::E1015 => "E1015",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
        }
    }

    /// Check if this is a syntax (parse-time) error.
    pub fn is_syntax_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a runtime error.
    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
