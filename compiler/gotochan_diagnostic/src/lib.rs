//! Diagnostic system for error reporting.
//!
//! Every gotochan error is fatal, so a diagnostic is always the last thing a
//! run prints. Each one carries:
//! - An error code for searchability (E1xxx syntax, E6xxx runtime)
//! - A message saying what went wrong
//! - The source line where it went wrong
//! - Optional notes and suggestions

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
