use crate::{
    assembler,
    config::EngineConfig,
    engine::{Engine, Registers},
    error::{AssemblyError, ExecutionError},
    instruction::Instruction,
    statement::Statement,
};
use std::collections::HashMap;

/// An assembled program: the instructions in execution order and the label
/// table they were resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    labels: HashMap<String, usize>,
}

impl Program {
    pub(crate) fn new(instructions: Vec<Instruction>, labels: HashMap<String, usize>) -> Program {
        Program {
            instructions,
            labels,
        }
    }

    pub fn assemble(statements: &[Statement]) -> Result<Program, AssemblyError> {
        assembler::assemble(statements)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn labels(&self) -> &HashMap<String, usize> {
        &self.labels
    }

    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }

    /// Runs the program with the default engine configuration.
    pub fn run(&self) -> Result<Registers, ExecutionError> {
        Engine::new(EngineConfig::default()).run(self)
    }
}
