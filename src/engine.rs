use crate::{
    config::EngineConfig,
    error::ExecutionError,
    instruction::{Address, Instruction},
    program::Program,
    registers::RegisterBank,
};
use log::{debug, trace};
use std::convert::TryFrom;

pub use crate::registers::Registers;

/// Execution state of one program: the program counter and a private
/// register bank.
#[derive(Debug)]
pub struct Machine<'p> {
    program: &'p Program,
    pc: usize,
    registers: RegisterBank,
    steps: u64,
}

impl<'p> Machine<'p> {
    pub fn new(program: &'p Program) -> Machine<'p> {
        Machine {
            program,
            pc: 0,
            registers: RegisterBank::default(),
            steps: 0,
        }
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn registers(&self) -> Registers {
        self.registers.snapshot()
    }

    pub fn is_halted(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Executes the instruction at the program counter. Does nothing once
    /// the machine has halted.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let instruction = match self.program.get(self.pc) {
            Some(instruction) => *instruction,
            None => return Ok(()),
        };

        trace!("{:>4}: {}", self.pc, instruction);
        self.steps += 1;

        let bank = &mut self.registers;
        match instruction {
            Instruction::Mov(dest, source) => {
                let value = bank.value_of(source);
                bank.set(dest, value);
            }
            Instruction::Inc(dest, amount) => {
                let value = bank.get(dest).wrapping_add(bank.value_of(amount));
                bank.set(dest, value);
            }
            Instruction::Dec(dest, amount) => {
                let value = bank.get(dest).wrapping_sub(bank.value_of(amount));
                bank.set(dest, value);
            }
            Instruction::Cmp(lhs, rhs) => {
                let value = bank.get(lhs).wrapping_sub(bank.value_of(rhs));
                bank.set_comparison(value);
            }
            Instruction::Jmp(target) => return self.jump(target),
            Instruction::Je(target) => return self.branch(|c| c == 0, target),
            Instruction::Jne(target) => return self.branch(|c| c != 0, target),
            Instruction::Jl(target) => return self.branch(|c| c < 0, target),
            Instruction::Jle(target) => return self.branch(|c| c <= 0, target),
            Instruction::Jg(target) => return self.branch(|c| c > 0, target),
            Instruction::Jge(target) => return self.branch(|c| c >= 0, target),
        }

        self.pc += 1;
        Ok(())
    }

    fn branch<F>(&mut self, condition: F, target: Address) -> Result<(), ExecutionError>
    where
        F: FnOnce(i64) -> bool,
    {
        if condition(self.registers.comparison()) {
            self.jump(target)
        } else {
            self.pc += 1;
            Ok(())
        }
    }

    fn jump(&mut self, target: Address) -> Result<(), ExecutionError> {
        let len = self.program.len();
        match usize::try_from(target) {
            Ok(index) if index <= len => {
                self.pc = index;
                Ok(())
            }
            _ => Err(ExecutionError::JumpOutOfRange {
                at: self.pc,
                target,
                len,
            }),
        }
    }
}

/// Runs assembled programs, each against a freshly zeroed register bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Engine {
        Engine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn run(&self, program: &Program) -> Result<Registers, ExecutionError> {
        let mut machine = Machine::new(program);

        while !machine.is_halted() {
            if let Some(limit) = self.config.step_limit {
                if machine.steps() >= limit {
                    return Err(ExecutionError::StepLimitExceeded { limit });
                }
            }

            machine.step()?;
        }

        let registers = machine.registers();
        debug!(
            "program of {} instructions halted after {} steps with {}",
            program.len(),
            machine.steps(),
            registers
        );

        Ok(registers)
    }
}

/// Runs `program` with the default configuration.
pub fn execute(program: &Program) -> Result<Registers, ExecutionError> {
    Engine::default().run(program)
}
