//! The standard built-in library.
//!
//! Built-ins take no arguments. They read the `param` variable and write
//! the `result` variable; anything else they need (console, keyboard,
//! clock) comes from the `Host`.

mod host;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use gotochan_ir::{BuiltinLookup, Value};

use crate::{BuiltinError, BuiltinRegistry, Variables};

pub use host::{BufferHost, Host, StdHost};

/// The standard built-in names.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    Say,
    Clear,
    GetTime,
    Wait,
    Input,
    HasInput,
    Random,
    Error,
    GetType,
    Length,
    Truncate,
    Round,
    Floor,
    Ceiling,
}

impl Builtin {
    pub const ALL: [Builtin; 14] = [
        Builtin::Say,
        Builtin::Clear,
        Builtin::GetTime,
        Builtin::Wait,
        Builtin::Input,
        Builtin::HasInput,
        Builtin::Random,
        Builtin::Error,
        Builtin::GetType,
        Builtin::Length,
        Builtin::Truncate,
        Builtin::Round,
        Builtin::Floor,
        Builtin::Ceiling,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "say" => Builtin::Say,
            "clear" => Builtin::Clear,
            "gettime" => Builtin::GetTime,
            "wait" => Builtin::Wait,
            "input" => Builtin::Input,
            "hasinput" => Builtin::HasInput,
            "random" => Builtin::Random,
            "error" => Builtin::Error,
            "gettype" => Builtin::GetType,
            "length" => Builtin::Length,
            "truncate" => Builtin::Truncate,
            "round" => Builtin::Round,
            "floor" => Builtin::Floor,
            "ceiling" => Builtin::Ceiling,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Say => "say",
            Builtin::Clear => "clear",
            Builtin::GetTime => "gettime",
            Builtin::Wait => "wait",
            Builtin::Input => "input",
            Builtin::HasInput => "hasinput",
            Builtin::Random => "random",
            Builtin::Error => "error",
            Builtin::GetType => "gettype",
            Builtin::Length => "length",
            Builtin::Truncate => "truncate",
            Builtin::Round => "round",
            Builtin::Floor => "floor",
            Builtin::Ceiling => "ceiling",
        }
    }
}

/// The standard names alone, for parsing without a host.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardNames;

impl BuiltinLookup for StandardNames {
    fn is_builtin(&self, name: &str) -> bool {
        Builtin::from_name(name).is_some()
    }
}

/// The standard library over a host and a random source.
#[derive(Debug)]
pub struct StandardBuiltins<H> {
    host: H,
    rng: StdRng,
}

impl<H: Host> StandardBuiltins<H> {
    /// Built-ins over `host`, with an entropy-seeded RNG.
    pub fn new(host: H) -> Self {
        Self::with_rng(host, StdRng::from_entropy())
    }

    /// Built-ins over `host` with a caller-supplied RNG.
    pub fn with_rng(host: H, rng: StdRng) -> Self {
        StandardBuiltins { host, rng }
    }

    fn call(&mut self, builtin: Builtin, variables: &mut Variables) -> Result<(), BuiltinError> {
        match builtin {
            Builtin::Say => {
                if let Some(param) = variables.param() {
                    let text = param.to_string();
                    self.host.write(&text).map_err(io_error)?;
                }
            }
            Builtin::Clear => self.host.clear().map_err(io_error)?,
            Builtin::GetTime => {
                #[allow(clippy::cast_precision_loss, reason = "millisecond timestamps fit in f64")]
                let seconds = self.host.now().as_millis() as f64 / 1000.0;
                variables.set_result(Value::Number(seconds));
            }
            Builtin::Wait => {
                let seconds = number_param(variables)
                    .filter(|secs| secs.is_finite() && *secs >= 0.0)
                    .ok_or_else(|| BuiltinError::new("wait param must be a number."))?;
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "finite and non-negative"
                )]
                let millis = (seconds * 1000.0).round() as u64;
                self.host.sleep(Duration::from_millis(millis));
            }
            Builtin::Input => {
                let key = self.read_key()?;
                variables.set_result(Value::Str(key.to_string()));
            }
            Builtin::HasInput => {
                let available = self.host.key_available();
                variables.set_result(Value::Bool(available));
            }
            Builtin::Random => {
                let max = integer_param(variables)
                    .ok_or_else(|| BuiltinError::new("random param must be an integer."))?;
                if max < 0 {
                    return Err(BuiltinError::new("random param cannot be negative."));
                }
                #[allow(clippy::cast_precision_loss, reason = "script numbers are f64")]
                let value = self.rng.gen_range(0..=max) as f64;
                variables.set_result(Value::Number(value));
            }
            Builtin::Error => {
                let message = variables
                    .param()
                    .map_or_else(|| "error was called.".to_string(), Value::to_string);
                return Err(BuiltinError::new(message));
            }
            Builtin::GetType => {
                let type_name = variables.param().map_or("null", Value::type_name);
                variables.set_result(Value::string(type_name));
            }
            Builtin::Length => {
                let Some(Value::Str(text)) = variables.param() else {
                    return Err(BuiltinError::new("length param must be a string."));
                };
                #[allow(clippy::cast_precision_loss, reason = "script numbers are f64")]
                let length = text.chars().count() as f64;
                variables.set_result(Value::Number(length));
            }
            Builtin::Truncate | Builtin::Round | Builtin::Floor | Builtin::Ceiling => {
                let n = number_param(variables).ok_or_else(|| {
                    BuiltinError::new(format!("{} param must be a number.", builtin.name()))
                })?;
                let rounded = match builtin {
                    Builtin::Truncate => n.trunc(),
                    Builtin::Round => n.round(),
                    Builtin::Floor => n.floor(),
                    _ => n.ceil(),
                };
                variables.set_result(Value::Number(rounded));
            }
        }
        Ok(())
    }

    /// Block for the next key, skipping carriage returns and backspaces.
    fn read_key(&mut self) -> Result<char, BuiltinError> {
        loop {
            match self.host.read_key() {
                Some('\r' | '\u{8}' | '\u{7f}') => {}
                Some(key) => return Ok(key),
                None => return Err(BuiltinError::new("no more input is available.")),
            }
        }
    }
}

impl<H> BuiltinLookup for StandardBuiltins<H> {
    fn is_builtin(&self, name: &str) -> bool {
        Builtin::from_name(name).is_some()
    }
}

impl<H: Host> BuiltinRegistry for StandardBuiltins<H> {
    fn invoke(&mut self, name: &str, variables: &mut Variables) -> Result<(), BuiltinError> {
        let builtin = Builtin::from_name(name)
            .ok_or_else(|| BuiltinError::new(format!("'{name}' is not a built-in.")))?;
        trace!(builtin = builtin.name(), param = ?variables.param(), "invoke");
        self.call(builtin, variables)
    }
}

/// `param` as a number: a Number, or a String that parses as one.
fn number_param(variables: &Variables) -> Option<f64> {
    match variables.param()? {
        Value::Number(n) => Some(*n),
        Value::Str(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// `param` as an integer: an integral Number, or a String of digits.
fn integer_param(variables: &Variables) -> Option<i64> {
    match variables.param()? {
        Value::Number(n) => integral(*n),
        Value::Str(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "range checked before the cast"
)]
fn integral(n: f64) -> Option<i64> {
    let in_range = n >= i64::MIN as f64 && n < i64::MAX as f64;
    (n.trunc() == n && in_range).then(|| n as i64)
}

fn io_error(err: std::io::Error) -> BuiltinError {
    BuiltinError::new(format!("console error: {err}."))
}
