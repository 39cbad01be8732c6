//! Gotochan driver.
//!
//! Glue between the phases: read a script, parse it against the standard
//! built-in names, run it, and render failures as diagnostics. The binary
//! in `main.rs` is a thin argument parser over `commands`.

pub mod commands;
mod options;
mod script;
mod tracing_setup;

pub use options::RunOptions;
pub use script::{
    check_source, dump_source, read_source, render_error, run_source, ReadError, ScriptError,
};
pub use tracing_setup::init_tracing;

/// Crate version, shown in the run banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The line printed before a script runs.
pub fn banner() -> String {
    format!("gotochan v{VERSION}")
}
