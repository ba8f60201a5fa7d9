use crate::{
    engine::execute,
    error::{AssemblyError, Error},
    instruction::Register,
    program::Program,
    registers::Registers,
    statement::{Argument, JumpTarget, Statement},
};

/// Fluent construction of a statement list.
///
/// ```
/// use regasm::{builder::Builder, instruction::Register::*};
///
/// let registers = Builder::new()
///     .mov(Cx, 3)
///     .label("top")
///     .cmp(Cx, 0)
///     .je("end")
///     .dec(Cx)
///     .jmp("top")
///     .label("end")
///     .mov(Ax, 1)
///     .run()
///     .unwrap();
///
/// assert_eq!(registers.as_tuple(), (1, 0, 0, 0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    statements: Vec<Statement>,
}

macro_rules! jumps {
    ($($name:ident),+) => {
        $(
            pub fn $name<T>(self, target: T) -> Builder
            where
                T: Into<JumpTarget>,
            {
                let target: JumpTarget = target.into();
                self.push(stringify!($name), vec![target.into()])
            }
        )+
    };
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    fn push(mut self, mnemonic: &str, operands: Vec<Argument>) -> Builder {
        self.statements.push(Statement::instruction(mnemonic, operands));
        self
    }

    pub fn label<S: Into<String>>(mut self, name: S) -> Builder {
        self.statements.push(Statement::label(name));
        self
    }

    pub fn mov<S: Into<Argument>>(self, dest: Register, source: S) -> Builder {
        self.push("mov", vec![dest.into(), source.into()])
    }

    pub fn inc(self, dest: Register) -> Builder {
        self.push("inc", vec![dest.into()])
    }

    pub fn inc_by<S: Into<Argument>>(self, dest: Register, amount: S) -> Builder {
        self.push("inc", vec![dest.into(), amount.into()])
    }

    pub fn dec(self, dest: Register) -> Builder {
        self.push("dec", vec![dest.into()])
    }

    pub fn dec_by<S: Into<Argument>>(self, dest: Register, amount: S) -> Builder {
        self.push("dec", vec![dest.into(), amount.into()])
    }

    pub fn cmp<S: Into<Argument>>(self, lhs: Register, rhs: S) -> Builder {
        self.push("cmp", vec![lhs.into(), rhs.into()])
    }

    jumps!(jmp, je, jne, jl, jle, jg, jge);

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn into_statements(self) -> Vec<Statement> {
        self.statements
    }

    pub fn assemble(&self) -> Result<Program, AssemblyError> {
        Program::assemble(&self.statements)
    }

    /// Assembles and runs with the default engine configuration.
    pub fn run(&self) -> Result<Registers, Error> {
        let program = self.assemble()?;
        Ok(execute(&program)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ExecutionError, instruction::Register::*};

    #[test]
    fn builds_the_statements_it_is_given() {
        let builder = Builder::new().label("a").inc(Ax).jne("a").jmp(0);

        assert_eq!(
            builder.statements(),
            &[
                Statement::label("a"),
                Statement::instruction("inc", vec![Ax.into()]),
                Statement::instruction("jne", vec!["a".into()]),
                Statement::instruction("jmp", vec![Argument::Integer(0)]),
            ]
        );
    }

    #[test]
    fn step_sizes_and_register_sources() {
        let registers = Builder::new()
            .inc_by(Ax, 10)
            .mov(Bx, Ax)
            .dec_by(Bx, 4)
            .inc_by(Cx, Bx)
            .run()
            .unwrap();

        assert_eq!(registers.as_tuple(), (10, 6, 6, 0));
    }

    #[test]
    fn execution_errors_are_surfaced() {
        match Builder::new().jmp(99).run() {
            Err(Error::Execution(ExecutionError::JumpOutOfRange { target: 99, .. })) => {}
            other => panic!("Expected JumpOutOfRange, found {:?}", other),
        }
    }

    #[test]
    fn assembly_errors_are_surfaced() {
        match Builder::new().je("nowhere").run() {
            Err(Error::Assembly(AssemblyError::UndefinedLabel { label, .. })) => {
                assert_eq!(label, "nowhere")
            }
            other => panic!("Expected UndefinedLabel, found {:?}", other),
        }
    }
}
