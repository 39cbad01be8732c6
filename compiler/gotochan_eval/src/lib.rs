//! Gotochan Eval - interpreter for compiled gotochan programs.
//!
//! # Architecture
//!
//! - `Variables`: the variable store (identifier to `Value`)
//! - `CallSites`: last line that jumped to each label, for `backto`
//! - `evaluate_arith` / `evaluate_compare`: the value algebra
//! - `Interpreter`: the run loop, owning the store, the call-site table
//!   and an injected `BuiltinRegistry`
//! - `StandardBuiltins`: the built-in library over a swappable `Host`
//!
//! All interpreter state lives in the `Interpreter` value, so independent
//! runs never share anything.

mod builtins;
mod call_sites;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod registry;

pub use builtins::{Builtin, BufferHost, Host, StandardBuiltins, StandardNames, StdHost};
pub use call_sites::CallSites;
pub use environment::Variables;
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::Interpreter;
pub use operators::{evaluate_arith, evaluate_compare};
pub use registry::{BuiltinError, BuiltinRegistry};

pub use gotochan_ir::Value;

#[cfg(test)]
mod tests;
