//! End-to-end tests: parse with the standard library's names, then run.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use gotochan_parse::parse;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{BufferHost, EvalError, Interpreter, StandardBuiltins, Value};

fn session(host: &BufferHost) -> Session {
    Interpreter::new(StandardBuiltins::with_rng(
        host.clone(),
        StdRng::seed_from_u64(42),
    ))
}

type Session = Interpreter<StandardBuiltins<BufferHost>>;

fn run_with(host: &BufferHost, source: &str) -> Result<Session, EvalError> {
    let mut interp = session(host);
    let program = parse(source, interp.registry()).unwrap();
    interp.run(&program)?;
    Ok(interp)
}

#[test]
fn test_hello_world() {
    let host = BufferHost::new();
    run_with(&host, "param = ~Hello,~world!\\n\ngoto say").unwrap();
    assert_eq!(host.output(), "Hello, world!\n");
}

#[test]
fn test_hash_escape_survives_comment_stripping() {
    let host = BufferHost::new();
    run_with(&host, "param = ~\\h1 # not printed\ngoto say").unwrap();
    assert_eq!(host.output(), "#1");
}

#[test]
fn test_countdown_with_subroutine() {
    let source = "\
n = 3
label loop
param = n
goto show
n -= 1
more = n > 0
goto loop if more
goto end

label show
goto say
param = ~\\n
goto say
backto show

label end";
    let host = BufferHost::new();
    run_with(&host, source).unwrap();
    assert_eq!(host.output(), "3\n2\n1\n");
}

#[test]
fn test_builtin_results_feed_later_lines() {
    let source = "\
param = ~abc
goto length
n = result
param = 2.5
goto round
r = result
param = r
goto gettype";
    let host = BufferHost::new();
    let interp = run_with(&host, source).unwrap();
    let vars = interp.variables();
    assert_eq!(vars.get("n"), Some(&Value::Number(3.0)));
    assert_eq!(vars.get("r"), Some(&Value::Number(3.0)));
    assert_eq!(vars.get("result"), Some(&Value::string("number")));
}

#[test]
fn test_wait_advances_clock() {
    let source = "\
goto gettime
start = result
param = 1.5
goto wait
goto gettime
elapsed = result
elapsed -= start";
    let host = BufferHost::new().with_clock(Duration::from_secs(100));
    let interp = run_with(&host, source).unwrap();
    assert_eq!(interp.variables().get("elapsed"), Some(&Value::Number(1.5)));
    assert_eq!(host.sleeps(), vec![Duration::from_millis(1500)]);
}

#[test]
fn test_read_keys_until_enter() {
    let source = "\
line = ~
label read
goto input
done = result == ~\\n
goto finish if done
line += result
goto read
label finish
param = line
goto say";
    let host = BufferHost::new().with_keys("hey\n");
    run_with(&host, source).unwrap();
    assert_eq!(host.output(), "hey");
}

#[test]
fn test_error_builtin_reports_line() {
    let host = BufferHost::new();
    let err = run_with(&host, "x = 1\nparam = ~boom\ngoto error").unwrap_err();
    assert_eq!(err.to_string(), "runtime error on line 3: boom");
}

#[test]
fn test_failed_session_is_debug_printable() {
    let host = BufferHost::new();
    let err = run_with(&host, "x = 1\ngoto 1 if x").unwrap_err();
    assert_eq!(err.display_line(), 2);

    let session = run_with(&host, "x = 1").unwrap();
    let rendered = format!("{session:?}");
    assert!(rendered.starts_with("Interpreter"));
    assert!(rendered.contains("Number(1.0)"));
}

#[test]
fn test_random_under_seed_is_repeatable() {
    let source = "param = 100\ngoto random\na = result\ngoto random\nb = result";
    let first = run_with(&BufferHost::new(), source).unwrap();
    let second = run_with(&BufferHost::new(), source).unwrap();
    assert_eq!(first.variables(), second.variables());
}

#[test]
fn test_one_session_runs_many_programs() {
    let host = BufferHost::new();
    let mut interp = session(&host);

    let first = parse("x = 1\nparam = x\ngoto say", interp.registry()).unwrap();
    let second = parse("param = x\ngoto say\ngoto gettype", interp.registry()).unwrap();

    interp.run(&first).unwrap();
    interp.run(&second).unwrap();
    assert_eq!(host.output(), "1");
    assert_eq!(
        interp.variables().get("result"),
        Some(&Value::string("null"))
    );
}
