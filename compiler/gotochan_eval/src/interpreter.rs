//! The run loop.
//!
//! A single program counter walks the line-indexed slots. Empty slots are
//! skipped; control-flow instructions overwrite the counter, everything else
//! falls through to the next line. Execution ends when the counter runs past
//! the last slot.

use tracing::{debug, trace};

use gotochan_ir::{Instruction, Program, Value};

use crate::operators::{evaluate_arith, evaluate_compare};
use crate::{BuiltinRegistry, CallSites, EvalError, EvalErrorKind, Variables};

/// Where execution continues after one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Next,
    Jump(usize),
}

/// One interpreter session.
///
/// Owns the variable store, the call-site table and the injected built-in
/// registry. `run` resets the session state first, so runs never see each
/// other's variables.
#[derive(Debug)]
pub struct Interpreter<R> {
    registry: R,
    variables: Variables,
    call_sites: CallSites,
}

impl<R: BuiltinRegistry> Interpreter<R> {
    pub fn new(registry: R) -> Self {
        Interpreter {
            registry,
            variables: Variables::new(),
            call_sites: CallSites::new(),
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Variables left behind by the last run.
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Forget all variables and call sites.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.call_sites.clear();
    }

    /// Execute `program` from its first line.
    ///
    /// Any error is fatal and carries the line that was executing.
    #[tracing::instrument(level = "debug", skip_all, fields(lines = program.len()))]
    pub fn run(&mut self, program: &Program) -> Result<(), EvalError> {
        self.reset();

        let mut pc = 0;
        while pc < program.len() {
            let Some(instruction) = program.get(pc) else {
                pc += 1;
                continue;
            };
            trace!(line = pc + 1, %instruction, "exec");
            pc = match self
                .execute(pc, instruction)
                .map_err(|kind| EvalError::new(pc, kind))?
            {
                Flow::Next => pc + 1,
                Flow::Jump(target) => target,
            };
        }

        debug!(variables = self.variables.len(), "program finished");
        Ok(())
    }

    fn execute(&mut self, line: usize, instruction: &Instruction) -> Result<Flow, EvalErrorKind> {
        match instruction {
            Instruction::GotoBuiltin { name, condition } => {
                if self.maybe_jump(line, Some(name), condition.as_deref())? {
                    self.call_builtin(name)?;
                }
                Ok(Flow::Next)
            }
            Instruction::GotoLabel {
                name,
                target_line,
                condition,
            } => {
                let taken = self.maybe_jump(line, Some(name), condition.as_deref())?;
                Ok(if taken {
                    Flow::Jump(*target_line)
                } else {
                    Flow::Next
                })
            }
            Instruction::GotoLine {
                target_line,
                condition,
            } => {
                let taken = self.maybe_jump(line, None, condition.as_deref())?;
                Ok(if taken {
                    Flow::Jump(*target_line)
                } else {
                    Flow::Next
                })
            }
            Instruction::BackTo { label } => match self.call_sites.get(label) {
                Some(site) => Ok(Flow::Jump(site + 1)),
                None => Err(EvalErrorKind::BacktoWithoutGoto {
                    label: label.clone(),
                }),
            },
            Instruction::AssignCompare {
                variable,
                lhs,
                op,
                rhs,
            } => {
                let left = self.variables.resolve_operand(lhs)?;
                let right = self.variables.resolve_operand(rhs)?;
                let result = evaluate_compare(&left, *op, &right)?;
                self.variables.set(variable.as_str(), Value::Bool(result));
                Ok(Flow::Next)
            }
            Instruction::AssignValue { variable, value } => {
                match self.variables.resolve(value)? {
                    Some(value) if !value.is_null() => self.variables.set(variable.as_str(), value),
                    _ => {
                        self.variables.unset(variable);
                    }
                }
                Ok(Flow::Next)
            }
            Instruction::VariableOp {
                variable,
                op,
                value,
            } => {
                let current = self.variables.operand(variable);
                let operand = self.variables.resolve_operand(value)?;
                let result = evaluate_arith(&current, &operand, *op)?;
                self.variables.set(variable.as_str(), result);
                Ok(Flow::Next)
            }
        }
    }

    /// Record the call site (when jumping to a label) and evaluate the
    /// condition.
    ///
    /// The call site is recorded even when the condition turns out false.
    fn maybe_jump(
        &mut self,
        line: usize,
        label: Option<&str>,
        condition: Option<&str>,
    ) -> Result<bool, EvalErrorKind> {
        if let Some(label) = label {
            self.call_sites.record(label, line);
        }

        let Some(name) = condition else {
            return Ok(true);
        };
        match self.variables.get(name) {
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(other) => Err(EvalErrorKind::NonBooleanCondition {
                name: name.to_string(),
                type_name: other.type_name(),
            }),
            None => Err(EvalErrorKind::UndefinedCondition {
                name: name.to_string(),
            }),
        }
    }

    fn call_builtin(&mut self, name: &str) -> Result<(), EvalErrorKind> {
        if !self.registry.is_builtin(name) {
            return Err(EvalErrorKind::UnknownBuiltin {
                name: name.to_string(),
            });
        }
        debug!(builtin = name, "dispatch");
        self.registry
            .invoke(name, &mut self.variables)
            .map_err(|err| EvalErrorKind::Builtin {
                name: name.to_string(),
                message: err.message,
            })
    }
}
