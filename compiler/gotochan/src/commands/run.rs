//! The `run` command: parse and execute a script on the console.

use std::io::{self, Write};

use gotochan_eval::{Interpreter, StandardBuiltins, StdHost};

use crate::{banner, run_source, RunOptions};

use super::{read_file, report_and_exit};

/// Run a script with the standard built-ins over stdin/stdout.
pub fn run_file(path: &str, options: RunOptions) {
    let source = read_file(path);

    if options.banner {
        println!("{}", banner());
        println!();
    }

    let mut interpreter = Interpreter::new(StandardBuiltins::new(StdHost::new()));
    if let Err(err) = run_source(&source, &mut interpreter) {
        // Keep script output ahead of the diagnostic.
        let _ = io::stdout().flush();
        report_and_exit(&err, &source, path, options.color);
    }

    if options.banner {
        println!("\n");
        println!("end of program");
    }
}
