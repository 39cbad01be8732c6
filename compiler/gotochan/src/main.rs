//! Gotochan CLI
//!
//! Runs, checks and dumps gotochan scripts.

use std::path::Path;

use gotochan::commands::{check_file, dump_file, run_file};
use gotochan::{init_tracing, RunOptions, VERSION};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" | "check" | "dump" => {
            if args.len() < 3 {
                eprintln!("Usage: gotochan {command} <file.goto> [options]");
                std::process::exit(1);
            }
            let options = parse_options(&args[3..]);
            let path = &args[2];
            match command.as_str() {
                "run" => run_file(path, options),
                "check" => check_file(path, options),
                _ => dump_file(path, options),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("gotochan {VERSION}");
        }
        _ => {
            // A bare existing file is run with default options
            if Path::new(command).is_file() {
                run_file(command, parse_options(&args[2..]));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn parse_options(flags: &[String]) -> RunOptions {
    match RunOptions::parse(flags) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("gotochan {VERSION}");
    println!();
    println!("Usage: gotochan <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.goto>      Run a script");
    println!("  check <file.goto>    Parse a script without running it");
    println!("  dump <file.goto>     Print the compiled instruction listing");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --color=<mode>       Diagnostic colors: auto, always, never");
    println!("  --quiet, -q          Skip the version banner (run)");
    println!();
    println!("Environment:");
    println!("  GOTOCHAN_LOG         Tracing filter (falls back to RUST_LOG)");
    println!("  GOTOCHAN_LOG_TREE=1  Indented tree output for tracing");
}
