//! The variable store.
//!
//! One flat namespace, no scopes. A name is either bound to a `Value` or
//! unset; assigning an unset or null value removes the binding.

use rustc_hash::FxHashMap;

use gotochan_ir::{Operand, Value};

use crate::EvalErrorKind;

/// Identifier-to-value bindings for one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables {
    bindings: FxHashMap<String, Value>,
}

impl Variables {
    /// Input slot read by built-ins.
    pub const PARAM: &'static str = "param";
    /// Output slot written by built-ins.
    pub const RESULT: &'static str = "result";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Bind `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Remove the binding for `name`, returning the old value.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.bindings.remove(name)
    }

    /// Read `name` as an operand: an unset variable reads as `Null`.
    ///
    /// Every operand read in arithmetic and comparison goes through here.
    pub fn operand(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or(Value::Null)
    }

    /// Resolve a literal token, keeping "unset" distinct from `Null`.
    ///
    /// Returns `Ok(None)` for a variable with no binding.
    pub fn resolve(&self, operand: &Operand) -> Result<Option<Value>, EvalErrorKind> {
        match operand {
            Operand::Variable(name) => Ok(self.get(name).cloned()),
            Operand::Unknown(token) => Err(EvalErrorKind::UnknownValue {
                token: token.clone(),
            }),
            constant => Ok(constant.constant()),
        }
    }

    /// Resolve a literal token for use as an operand (unset reads as `Null`).
    pub fn resolve_operand(&self, operand: &Operand) -> Result<Value, EvalErrorKind> {
        match operand {
            Operand::Variable(name) => Ok(self.operand(name)),
            other => Ok(self.resolve(other)?.unwrap_or(Value::Null)),
        }
    }

    /// The built-in input slot.
    pub fn param(&self) -> Option<&Value> {
        self.get(Self::PARAM)
    }

    /// Write the built-in output slot.
    pub fn set_result(&mut self, value: Value) {
        self.set(Self::RESULT, value);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}
