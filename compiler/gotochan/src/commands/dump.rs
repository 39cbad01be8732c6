//! The `dump` command: print the compiled instruction listing.

use crate::{dump_source, RunOptions, ScriptError};

use super::{read_file, report_and_exit};

pub fn dump_file(path: &str, options: RunOptions) {
    let source = read_file(path);
    match dump_source(&source) {
        Ok(listing) => print!("{listing}"),
        Err(err) => report_and_exit(&ScriptError::from(err), &source, path, options.color),
    }
}
