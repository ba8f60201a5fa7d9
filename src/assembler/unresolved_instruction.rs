use super::{is_valid_label, register::parse_register};
use crate::{
    error::{Arity, AssemblyError},
    instruction::{Address, Register},
    statement::Argument,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum UnresolvedOperand<'a> {
    Register(Register),
    Literal(i64),
    Label(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum UnresolvedTarget<'a> {
    Index(Address),
    Label(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum UnresolvedInstruction<'a> {
    Mov(Register, UnresolvedOperand<'a>),
    Inc(Register, UnresolvedOperand<'a>),
    Dec(Register, UnresolvedOperand<'a>),
    Cmp(Register, UnresolvedOperand<'a>),
    Jmp(UnresolvedTarget<'a>),
    Je(UnresolvedTarget<'a>),
    Jne(UnresolvedTarget<'a>),
    Jl(UnresolvedTarget<'a>),
    Jle(UnresolvedTarget<'a>),
    Jg(UnresolvedTarget<'a>),
    Jge(UnresolvedTarget<'a>),
}

struct Decoder<'a> {
    statement: usize,
    mnemonic: &'a str,
    operands: &'a [Argument],
}

impl<'a> Decoder<'a> {
    fn invalid(&self, argument: &Argument) -> AssemblyError {
        AssemblyError::InvalidOperand {
            statement: self.statement,
            mnemonic: self.mnemonic.to_owned(),
            operand: argument.to_string(),
        }
    }

    fn check_arity(&self, expected: Arity) -> Result<(), AssemblyError> {
        if expected.accepts(self.operands.len()) {
            Ok(())
        } else {
            Err(AssemblyError::ArityMismatch {
                statement: self.statement,
                mnemonic: self.mnemonic.to_owned(),
                expected,
                found: self.operands.len(),
            })
        }
    }

    // Arity has been checked before any operand is decoded, so indexing is
    // in bounds for every mandatory position.
    fn register(&self, index: usize) -> Result<Register, AssemblyError> {
        let argument = &self.operands[index];
        match argument {
            Argument::Name(name) => parse_register(name).ok_or_else(|| self.invalid(argument)),
            Argument::Integer(_) => Err(self.invalid(argument)),
        }
    }

    fn operand(&self, index: usize) -> Result<UnresolvedOperand<'a>, AssemblyError> {
        let argument = &self.operands[index];
        match argument {
            Argument::Integer(value) => Ok(UnresolvedOperand::Literal(*value)),
            Argument::Name(name) => {
                if let Some(reg) = parse_register(name) {
                    Ok(UnresolvedOperand::Register(reg))
                } else if is_valid_label(name) {
                    Ok(UnresolvedOperand::Label(name))
                } else {
                    Err(self.invalid(argument))
                }
            }
        }
    }

    /// Like `operand`, but an omitted value means a step of one.
    fn step(&self, index: usize) -> Result<UnresolvedOperand<'a>, AssemblyError> {
        if index < self.operands.len() {
            self.operand(index)
        } else {
            Ok(UnresolvedOperand::Literal(1))
        }
    }

    fn target(&self, index: usize) -> Result<UnresolvedTarget<'a>, AssemblyError> {
        let argument = &self.operands[index];
        match argument {
            Argument::Integer(value) => Ok(UnresolvedTarget::Index(*value)),
            Argument::Name(name) if parse_register(name).is_none() && is_valid_label(name) => {
                Ok(UnresolvedTarget::Label(name))
            }
            Argument::Name(_) => Err(self.invalid(argument)),
        }
    }
}

impl UnresolvedInstruction<'_> {
    pub(super) fn decode<'a>(
        statement: usize,
        mnemonic: &'a str,
        operands: &'a [Argument],
    ) -> Result<UnresolvedInstruction<'a>, AssemblyError> {
        let decoder = Decoder {
            statement,
            mnemonic,
            operands,
        };

        macro_rules! instr {
            ($mnemonic:literal, $arity:expr, $instruction:ident, $($arg:ident($index:expr)),+) => {
                if mnemonic == $mnemonic {
                    decoder.check_arity($arity)?;
                    return Ok(UnresolvedInstruction::$instruction($(decoder.$arg($index)?),+));
                }
            };
        }

        instr!("mov", Arity::exactly(2), Mov, register(0), operand(1));
        instr!("inc", Arity::between(1, 2), Inc, register(0), step(1));
        instr!("dec", Arity::between(1, 2), Dec, register(0), step(1));
        instr!("cmp", Arity::exactly(2), Cmp, register(0), operand(1));
        instr!("jmp", Arity::exactly(1), Jmp, target(0));
        instr!("je", Arity::exactly(1), Je, target(0));
        instr!("jne", Arity::exactly(1), Jne, target(0));
        instr!("jl", Arity::exactly(1), Jl, target(0));
        instr!("jle", Arity::exactly(1), Jle, target(0));
        instr!("jg", Arity::exactly(1), Jg, target(0));
        instr!("jge", Arity::exactly(1), Jge, target(0));

        Err(AssemblyError::UnknownMnemonic {
            statement,
            mnemonic: mnemonic.to_owned(),
        })
    }
}
