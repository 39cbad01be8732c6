//! Gotochan IR - shared types for the parser and interpreter.
//!
//! This crate contains the data structures every phase agrees on:
//! - `Value`: the dynamic value algebra (string, number, boolean, null)
//! - `Operand`: a literal token classified once at parse time
//! - `Instruction` and `Program`: one optional instruction per source line
//! - `ArithOp` / `CompareOp`: the operator sets
//! - `BuiltinLookup`: the name check the parser needs from a built-in registry
//!
//! # Line Numbers
//!
//! Source syntax and diagnostics use 1-based line numbers. Everything in this
//! crate stores 0-based line indices; conversion happens only at display time.

mod ident;
mod instruction;
mod operand;
mod value;

pub use ident::is_valid_identifier;
pub use instruction::{ArithOp, CompareOp, Instruction, Program};
pub use operand::Operand;
pub use value::Value;

/// Name lookup for built-in jump targets.
///
/// The parser only needs to know whether `goto <name>` names a built-in;
/// invoking it is the interpreter's business. Any `BuiltinRegistry` in
/// `gotochan_eval` implements this.
pub trait BuiltinLookup {
    /// Returns `true` if `name` is a built-in label.
    fn is_builtin(&self, name: &str) -> bool;
}

impl<T: AsRef<str>> BuiltinLookup for [T] {
    fn is_builtin(&self, name: &str) -> bool {
        self.iter().any(|candidate| candidate.as_ref() == name)
    }
}

impl<T: AsRef<str>, const N: usize> BuiltinLookup for [T; N] {
    fn is_builtin(&self, name: &str) -> bool {
        self.as_slice().is_builtin(name)
    }
}
