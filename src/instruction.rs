use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Ax = 0,
    Bx = 1,
    Cx = 2,
    Dx = 3,
}

pub const NUM_REGISTERS: usize = 4;

impl Register {
    pub const ALL: [Register; NUM_REGISTERS] = [Register::Ax, Register::Bx, Register::Cx, Register::Dx];

    pub fn name(self) -> &'static str {
        match self {
            Register::Ax => "ax",
            Register::Bx => "bx",
            Register::Cx => "cx",
            Register::Dx => "dx",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Literal(i64),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(reg) => write!(f, "{}", reg),
            Operand::Literal(value) => write!(f, "{}", value),
        }
    }
}

/// Absolute instruction index. Signed so that a negative literal target
/// survives assembly and is reported by the engine as out of range.
pub type Address = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mov(Register, Operand),
    Inc(Register, Operand),
    Dec(Register, Operand),
    Cmp(Register, Operand),
    Jmp(Address),
    Je(Address),
    Jne(Address),
    Jl(Address),
    Jle(Address),
    Jg(Address),
    Jge(Address),
}

impl Instruction {
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Mov(..) => "mov",
            Instruction::Inc(..) => "inc",
            Instruction::Dec(..) => "dec",
            Instruction::Cmp(..) => "cmp",
            Instruction::Jmp(_) => "jmp",
            Instruction::Je(_) => "je",
            Instruction::Jne(_) => "jne",
            Instruction::Jl(_) => "jl",
            Instruction::Jle(_) => "jle",
            Instruction::Jg(_) => "jg",
            Instruction::Jge(_) => "jge",
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Mov(reg, op)
            | Instruction::Inc(reg, op)
            | Instruction::Dec(reg, op)
            | Instruction::Cmp(reg, op) => write!(f, "{} {}, {}", self.mnemonic(), reg, op),
            Instruction::Jmp(target)
            | Instruction::Je(target)
            | Instruction::Jne(target)
            | Instruction::Jl(target)
            | Instruction::Jle(target)
            | Instruction::Jg(target)
            | Instruction::Jge(target) => write!(f, "{} {}", self.mnemonic(), target),
        }
    }
}
