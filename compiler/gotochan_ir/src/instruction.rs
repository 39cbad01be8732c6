//! Instructions and programs.
//!
//! Each non-empty source line compiles to exactly one `Instruction`. Blank
//! lines, comment-only lines and `label` lines compile to an empty slot, so
//! slot `i` of a `Program` always corresponds to source line `i + 1`.

use std::fmt;

use crate::Operand;

/// Compound assignment operators (`+=`, `-=`, ...).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl ArithOp {
    /// Look up the operator for a compound assignment token such as `+=`.
    pub fn from_assign_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+=" => Self::Add,
            "-=" => Self::Sub,
            "*=" => Self::Mul,
            "/=" => Self::Div,
            "%=" => Self::Mod,
            "^=" => Self::Pow,
            _ => return None,
        })
    }

    /// Returns the source-level assignment token for this operator.
    pub const fn as_assign_symbol(self) -> &'static str {
        match self {
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Mul => "*=",
            Self::Div => "/=",
            Self::Mod => "%=",
            Self::Pow => "^=",
        }
    }

    /// Verb used in error messages ("cannot subtract values ...").
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
            Self::Mod => "take the remainder of",
            Self::Pow => "exponentiate",
        }
    }
}

/// Comparison operators for `x = a <op> b`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
}

impl CompareOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "==" => Self::Eq,
            "!=" => Self::NotEq,
            ">" => Self::Gt,
            "<" => Self::Lt,
            ">=" => Self::GtEq,
            "<=" => Self::LtEq,
            _ => return None,
        })
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
        }
    }

    /// Whether the operator orders its operands (and so needs numbers).
    pub const fn is_ordering(self) -> bool {
        !matches!(self, Self::Eq | Self::NotEq)
    }
}

/// A single executable line.
///
/// Jump targets are resolved by the parser; `target_line` is a 0-based slot
/// index and execution resumes *at* that slot. Only `BackTo` is resolved at
/// run time, against the interpreter's call-site table.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// `goto <builtin> [if cond]`
    GotoBuiltin {
        name: String,
        condition: Option<String>,
    },
    /// `goto <label> [if cond]`
    GotoLabel {
        name: String,
        target_line: usize,
        condition: Option<String>,
    },
    /// `goto <n>`, `goto +<n>` or `goto -<n>` `[if cond]`
    GotoLine {
        target_line: usize,
        condition: Option<String>,
    },
    /// `backto <label>`
    BackTo { label: String },
    /// `var = lhs <op> rhs`
    AssignCompare {
        variable: String,
        lhs: Operand,
        op: CompareOp,
        rhs: Operand,
    },
    /// `var = value`
    AssignValue { variable: String, value: Operand },
    /// `var <op>= value`
    VariableOp {
        variable: String,
        op: ArithOp,
        value: Operand,
    },
}

impl Instruction {
    /// The condition variable of a `goto`, if any.
    pub fn condition(&self) -> Option<&str> {
        match self {
            Instruction::GotoBuiltin { condition, .. }
            | Instruction::GotoLabel { condition, .. }
            | Instruction::GotoLine { condition, .. } => condition.as_deref(),
            _ => None,
        }
    }
}

/// Renders the instruction in source form. Line targets are shown 1-based;
/// label targets show the label and the line it resolved to.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::GotoBuiltin { name, .. } => write!(f, "goto {name}")?,
            Instruction::GotoLabel {
                name, target_line, ..
            } => write!(f, "goto {name} (line {})", target_line + 1)?,
            Instruction::GotoLine { target_line, .. } => write!(f, "goto {}", target_line + 1)?,
            Instruction::BackTo { label } => return write!(f, "backto {label}"),
            Instruction::AssignCompare {
                variable,
                lhs,
                op,
                rhs,
            } => return write!(f, "{variable} = {lhs} {} {rhs}", op.as_symbol()),
            Instruction::AssignValue { variable, value } => {
                return write!(f, "{variable} = {value}")
            }
            Instruction::VariableOp {
                variable,
                op,
                value,
            } => return write!(f, "{variable} {} {value}", op.as_assign_symbol()),
        }
        if let Some(condition) = self.condition() {
            write!(f, " if {condition}")?;
        }
        Ok(())
    }
}

/// A compiled program: one slot per source line.
///
/// Immutable once built. The interpreter borrows it for the whole run.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    slots: Vec<Option<Instruction>>,
}

impl Program {
    pub fn new(slots: Vec<Option<Instruction>>) -> Self {
        Program { slots }
    }

    /// Number of slots (source lines), including empty ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The instruction at `line`, or `None` for empty slots and lines past
    /// the end.
    pub fn get(&self, line: usize) -> Option<&Instruction> {
        self.slots.get(line).and_then(Option::as_ref)
    }

    pub fn slots(&self) -> &[Option<Instruction>] {
        &self.slots
    }

    /// Iterate over the non-empty slots with their 0-based line index.
    pub fn instructions(&self) -> impl Iterator<Item = (usize, &Instruction)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(line, slot)| slot.as_ref().map(|instr| (line, instr)))
    }
}

/// Compiled-code listing: `"<line>. <instruction>"` per slot, 1-based,
/// with empty slots shown as a bare line number.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(instr) => writeln!(f, "{}. {instr}", index + 1)?,
                None => writeln!(f, "{}.", index + 1)?,
            }
        }
        Ok(())
    }
}
