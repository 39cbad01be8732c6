//! The `check` command: parse a script without running it.

use crate::{check_source, RunOptions, ScriptError};

use super::{read_file, report_and_exit};

pub fn check_file(path: &str, options: RunOptions) {
    let source = read_file(path);
    match check_source(&source) {
        Ok(program) => {
            let instructions = program.instructions().count();
            println!("OK: {path} ({} lines, {instructions} instructions)", program.len());
        }
        Err(err) => report_and_exit(&ScriptError::from(err), &source, path, options.color),
    }
}
