use crate::instruction::{Operand, Register, NUM_REGISTERS};
use std::fmt;

/// The four general registers and the hidden comparison value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterBank {
    registers: [i64; NUM_REGISTERS],
    comparison: i64,
}

impl RegisterBank {
    pub fn get(&self, reg: Register) -> i64 {
        self.registers[reg as usize]
    }

    pub fn set(&mut self, reg: Register, value: i64) {
        self.registers[reg as usize] = value;
    }

    pub fn value_of(&self, operand: Operand) -> i64 {
        match operand {
            Operand::Register(reg) => self.get(reg),
            Operand::Literal(value) => value,
        }
    }

    pub(crate) fn comparison(&self) -> i64 {
        self.comparison
    }

    pub(crate) fn set_comparison(&mut self, value: i64) {
        self.comparison = value;
    }

    pub fn snapshot(&self) -> Registers {
        Registers {
            ax: self.get(Register::Ax),
            bx: self.get(Register::Bx),
            cx: self.get(Register::Cx),
            dx: self.get(Register::Dx),
        }
    }
}

/// Final values of the general registers after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    pub ax: i64,
    pub bx: i64,
    pub cx: i64,
    pub dx: i64,
}

impl Registers {
    pub fn get(&self, reg: Register) -> i64 {
        match reg {
            Register::Ax => self.ax,
            Register::Bx => self.bx,
            Register::Cx => self.cx,
            Register::Dx => self.dx,
        }
    }

    pub fn as_tuple(&self) -> (i64, i64, i64, i64) {
        (self.ax, self.bx, self.cx, self.dx)
    }
}

impl From<Registers> for (i64, i64, i64, i64) {
    fn from(registers: Registers) -> (i64, i64, i64, i64) {
        registers.as_tuple()
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ax={} bx={} cx={} dx={}",
            self.ax, self.bx, self.cx, self.dx
        )
    }
}
