use crate::instruction::Register;
use std::fmt;

/// A single operand as written by the caller, before the assembler decides
/// whether a name refers to a register or a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    Name(String),
    Integer(i64),
}

impl From<Register> for Argument {
    fn from(reg: Register) -> Argument {
        Argument::Name(reg.name().to_owned())
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Argument {
        Argument::Integer(value)
    }
}

impl From<i32> for Argument {
    fn from(value: i32) -> Argument {
        Argument::Integer(value.into())
    }
}

impl From<&str> for Argument {
    fn from(name: &str) -> Argument {
        Argument::Name(name.to_owned())
    }
}

impl From<String> for Argument {
    fn from(name: String) -> Argument {
        Argument::Name(name)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Name(name) => f.write_str(name),
            Argument::Integer(value) => write!(f, "{}", value),
        }
    }
}

/// Where a jump goes: an absolute instruction index or a label declared
/// anywhere in the same statement list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpTarget {
    Index(i64),
    Label(String),
}

impl From<i64> for JumpTarget {
    fn from(index: i64) -> JumpTarget {
        JumpTarget::Index(index)
    }
}

impl From<i32> for JumpTarget {
    fn from(index: i32) -> JumpTarget {
        JumpTarget::Index(index.into())
    }
}

impl From<&str> for JumpTarget {
    fn from(label: &str) -> JumpTarget {
        JumpTarget::Label(label.to_owned())
    }
}

impl From<String> for JumpTarget {
    fn from(label: String) -> JumpTarget {
        JumpTarget::Label(label)
    }
}

impl From<JumpTarget> for Argument {
    fn from(target: JumpTarget) -> Argument {
        match target {
            JumpTarget::Index(index) => Argument::Integer(index),
            JumpTarget::Label(label) => Argument::Name(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Label(String),
    Instruction {
        mnemonic: String,
        operands: Vec<Argument>,
    },
}

impl Statement {
    pub fn label<S: Into<String>>(name: S) -> Statement {
        Statement::Label(name.into())
    }

    pub fn instruction<S: Into<String>>(mnemonic: S, operands: Vec<Argument>) -> Statement {
        Statement::Instruction {
            mnemonic: mnemonic.into(),
            operands,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Label(name) => write!(f, "{}:", name),
            Statement::Instruction { mnemonic, operands } => {
                f.write_str(mnemonic)?;
                for (index, operand) in operands.iter().enumerate() {
                    let separator = if index == 0 { " " } else { ", " };
                    write!(f, "{}{}", separator, operand)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_convert_to_their_names() {
        assert_eq!(Argument::from(Register::Cx), Argument::Name("cx".to_owned()));
    }

    #[test]
    fn statements_are_displayed_as_source() {
        assert_eq!(Statement::label("loop").to_string(), "loop:");
        assert_eq!(
            Statement::instruction("mov", vec![Register::Ax.into(), 5.into()]).to_string(),
            "mov ax, 5"
        );
        assert_eq!(
            Statement::instruction("jmp", vec!["end".into()]).to_string(),
            "jmp end"
        );
    }
}
