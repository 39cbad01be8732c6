//! Command handlers for the gotochan CLI.
//!
//! Handlers print to stdout/stderr and exit the process with status 1 on
//! any error.

use std::io::{self, IsTerminal};

use gotochan_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::{read_source, ScriptError};

mod check;
mod dump;
mod run;

pub use check::check_file;
pub use dump::dump_file;
pub use run::run_file;

/// Read a script or exit with a message.
fn read_file(path: &str) -> String {
    match read_source(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Print `error` as a diagnostic on stderr and exit.
fn report_and_exit(error: &ScriptError, source: &str, path: &str, color: ColorMode) -> ! {
    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::with_color_mode(io::stderr(), color, is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit(&error.to_diagnostic());
    emitter.flush();
    std::process::exit(1);
}
