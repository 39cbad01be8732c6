//! The built-in registry capability.
//!
//! `goto <name>` dispatches to a built-in when the registry knows `name`.
//! Built-ins take no arguments: by convention they read `param` and write
//! `result` in the variable store they are handed.

use gotochan_ir::BuiltinLookup;

use crate::Variables;

/// A named set of zero-argument operations.
///
/// The parser uses the `BuiltinLookup` half to classify goto targets; the
/// interpreter calls `invoke`. A built-in may block (waiting for a key, a
/// timed sleep) and always runs to completion.
pub trait BuiltinRegistry: BuiltinLookup {
    /// Run the built-in called `name`.
    ///
    /// Only called for names where `is_builtin` returned `true`.
    fn invoke(&mut self, name: &str, variables: &mut Variables) -> Result<(), BuiltinError>;
}

/// A built-in's fatal failure, reported with the calling line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct BuiltinError {
    pub message: String,
}

impl BuiltinError {
    pub fn new(message: impl Into<String>) -> Self {
        BuiltinError {
            message: message.into(),
        }
    }
}
