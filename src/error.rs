use crate::instruction::Address;
use std::{fmt, io};

/// Number of operands a mnemonic accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: usize,
}

impl Arity {
    pub const fn exactly(count: usize) -> Arity {
        Arity {
            min: count,
            max: count,
        }
    }

    pub const fn between(min: usize, max: usize) -> Arity {
        Arity { min, max }
    }

    pub fn accepts(self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{} to {}", self.min, self.max)
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("statement {statement}: unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { statement: usize, mnemonic: String },

    #[error("statement {statement}: `{mnemonic}` takes {expected} operand(s), found {found}")]
    ArityMismatch {
        statement: usize,
        mnemonic: String,
        expected: Arity,
        found: usize,
    },

    #[error("statement {statement}: undefined label `{label}`")]
    UndefinedLabel { statement: usize, label: String },

    #[error("statement {statement}: invalid operand `{operand}` for `{mnemonic}`")]
    InvalidOperand {
        statement: usize,
        mnemonic: String,
        operand: String,
    },

    #[error("statement {statement}: invalid label name `{label}`")]
    InvalidLabel { statement: usize, label: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("jump at instruction {at} targets {target}, outside of 0..={len}")]
    JumpOutOfRange { at: usize, target: Address, len: usize },

    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded { limit: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    InvalidToken(String),
    UnexpectedLabel(String),
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::InvalidToken(token) => write!(f, "invalid token `{}`", token),
            SyntaxErrorKind::UnexpectedLabel(token) => {
                write!(f, "label `{}` must precede the mnemonic", token)
            }
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("line {}: {}", .line + 1, .kind)]
pub struct SyntaxError {
    /// Zero-based line index.
    pub line: usize,
    pub kind: SyntaxErrorKind,
}

#[derive(thiserror::Error, Debug)]
pub enum PreprocessError {
    #[error("failed to include `{name}`")]
    FailedInclude {
        name: String,
        #[source]
        inner: io::Error,
    },

    #[error("`{name}` is already defined as `{original_value}`, cannot redefine as `{new_value}`")]
    DuplicateDefine {
        name: String,
        original_value: String,
        new_value: String,
    },

    #[error("empty %define")]
    EmptyDefine,

    #[error("%define `{0}` has no value")]
    DefineWithoutValue(String),

    #[error("%include without a file name")]
    EmptyInclude,

    #[error("`{name}` includes itself")]
    RecursiveInclude { name: String },
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Preprocess(#[from] PreprocessError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}
