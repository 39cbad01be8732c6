//! Phase glue: read, check, dump and run a script.

use std::io;
use std::path::Path;

use gotochan_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use gotochan_diagnostic::Diagnostic;
use gotochan_eval::{BuiltinRegistry, EvalError, Interpreter, StandardNames};
use gotochan_ir::Program;
use gotochan_parse::{parse, ParseError};
use tracing::debug;

/// Failure to load a script file.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Io { path: String, source: io::Error },
}

/// Read a script as UTF-8 text.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound { path },
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied { path },
            io::ErrorKind::InvalidData => ReadError::InvalidUtf8 { path },
            _ => ReadError::Io { path, source },
        }
    })
}

/// A fatal error from either phase.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl ScriptError {
    /// 0-based line of the failure.
    pub fn line(&self) -> usize {
        match self {
            ScriptError::Parse(err) => err.line,
            ScriptError::Eval(err) => err.line,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ScriptError::Parse(err) => err.to_diagnostic(),
            ScriptError::Eval(err) => err.to_diagnostic(),
        }
    }
}

/// Parse against the standard built-in names.
pub fn check_source(source: &str) -> Result<Program, ParseError> {
    parse(source, &StandardNames)
}

/// The compiled-instruction listing of a script.
pub fn dump_source(source: &str) -> Result<String, ParseError> {
    Ok(check_source(source)?.to_string())
}

/// Parse `source` against the interpreter's registry and run it.
pub fn run_source<R: BuiltinRegistry>(
    source: &str,
    interpreter: &mut Interpreter<R>,
) -> Result<(), ScriptError> {
    let program = parse(source, interpreter.registry())?;
    debug!(
        lines = program.len(),
        instructions = program.instructions().count(),
        "parsed"
    );
    interpreter.run(&program)?;
    Ok(())
}

/// Render `error` the way the CLI prints it, with the offending source
/// line echoed.
pub fn render_error(error: &ScriptError, source: &str, path: &str, color: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), color, false)
        .with_source(source)
        .with_file_path(path);
    emitter.emit(&error.to_diagnostic());
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}
