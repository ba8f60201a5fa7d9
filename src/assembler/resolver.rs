use super::{
    is_valid_label,
    register::parse_register,
    unresolved_instruction::{UnresolvedInstruction, UnresolvedOperand, UnresolvedTarget},
};
use crate::{
    error::AssemblyError,
    instruction::{Address, Instruction, Operand},
    statement::Statement,
};
use log::warn;
use std::collections::{hash_map::Entry, HashMap};

/// Binds every label to the index of the instruction that follows it. A
/// label declared twice keeps its last position.
pub(super) fn resolve_labels(
    statements: &[Statement],
) -> Result<HashMap<String, usize>, AssemblyError> {
    let mut labels = HashMap::<String, usize>::default();

    let mut instruction_index: usize = 0;

    for (statement, line) in statements.iter().enumerate() {
        match line {
            Statement::Label(name) => {
                if !is_valid_label(name) || parse_register(name).is_some() {
                    return Err(AssemblyError::InvalidLabel {
                        statement,
                        label: name.clone(),
                    });
                }

                match labels.entry(name.clone()) {
                    Entry::Occupied(mut occupied) => {
                        warn!(
                            "label `{}` redefined at statement {}, moving it from instruction {} to {}",
                            name,
                            statement,
                            occupied.get(),
                            instruction_index
                        );
                        occupied.insert(instruction_index);
                    }
                    Entry::Vacant(vacant) => {
                        vacant.insert(instruction_index);
                    }
                }
            }
            Statement::Instruction { .. } => instruction_index += 1,
        }
    }

    Ok(labels)
}

pub(super) fn resolve(
    statement: usize,
    instruction: &UnresolvedInstruction<'_>,
    labels: &HashMap<String, usize>,
) -> Result<Instruction, AssemblyError> {
    let lookup = |label: &str| -> Result<Address, AssemblyError> {
        labels
            .get(label)
            .map(|index| *index as Address)
            .ok_or_else(|| AssemblyError::UndefinedLabel {
                statement,
                label: label.to_owned(),
            })
    };

    macro_rules! operand {
        ($value:expr) => {
            match $value {
                UnresolvedOperand::Register(reg) => Operand::Register(*reg),
                UnresolvedOperand::Literal(value) => Operand::Literal(*value),
                UnresolvedOperand::Label(label) => Operand::Literal(lookup(*label)?),
            }
        };
    }

    macro_rules! target {
        ($value:expr) => {
            match $value {
                UnresolvedTarget::Index(index) => *index,
                UnresolvedTarget::Label(label) => lookup(*label)?,
            }
        };
    }

    let result = match instruction {
        UnresolvedInstruction::Mov(reg, source) => Instruction::Mov(*reg, operand!(source)),
        UnresolvedInstruction::Inc(reg, step) => Instruction::Inc(*reg, operand!(step)),
        UnresolvedInstruction::Dec(reg, step) => Instruction::Dec(*reg, operand!(step)),
        UnresolvedInstruction::Cmp(reg, rhs) => Instruction::Cmp(*reg, operand!(rhs)),
        UnresolvedInstruction::Jmp(target) => Instruction::Jmp(target!(target)),
        UnresolvedInstruction::Je(target) => Instruction::Je(target!(target)),
        UnresolvedInstruction::Jne(target) => Instruction::Jne(target!(target)),
        UnresolvedInstruction::Jl(target) => Instruction::Jl(target!(target)),
        UnresolvedInstruction::Jle(target) => Instruction::Jle(target!(target)),
        UnresolvedInstruction::Jg(target) => Instruction::Jg(target!(target)),
        UnresolvedInstruction::Jge(target) => Instruction::Jge(target!(target)),
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::Register;

    fn run(statements: &[Statement], expected_labels: Option<&[(&str, usize)]>) {
        let result = resolve_labels(statements);

        match expected_labels {
            None => {
                assert!(result.is_err());
            }
            Some(expected_labels) => {
                let actual_labels = result.unwrap();
                assert_eq!(actual_labels.len(), expected_labels.len());
                for expected_label in expected_labels {
                    assert_eq!(actual_labels[expected_label.0], expected_label.1);
                }
            }
        }
    }

    fn inc(reg: Register) -> Statement {
        Statement::instruction("inc", vec![reg.into()])
    }

    #[test]
    fn resolve_labels_can_resolve_labels() {
        run(
            &[
                Statement::label("label1"),
                inc(Register::Ax),
                Statement::label("start"),
                inc(Register::Bx),
                inc(Register::Cx),
                Statement::label("label2"),
                Statement::label("label3"),
                inc(Register::Dx),
                Statement::label("end"),
            ],
            Some(&[
                ("label1", 0),
                ("start", 1),
                ("label2", 3),
                ("label3", 3),
                ("end", 4),
            ]),
        );
    }

    #[test]
    fn resolve_labels_keeps_the_last_definition() {
        run(
            &[
                Statement::label("again"),
                inc(Register::Ax),
                Statement::label("again"),
                inc(Register::Bx),
            ],
            Some(&[("again", 1)]),
        );
    }

    #[test]
    fn resolve_labels_rejects_register_names_and_garbage() {
        run(&[Statement::label("ax")], None);
        run(&[Statement::label("1abc")], None);
        run(&[Statement::label("")], None);
    }

    #[test]
    fn resolve_replaces_labels_with_indices() {
        let mut labels = HashMap::default();
        labels.insert("top".to_owned(), 4);

        assert_eq!(
            resolve(0, &UnresolvedInstruction::Jle(UnresolvedTarget::Label("top")), &labels),
            Ok(Instruction::Jle(4))
        );
        assert_eq!(
            resolve(
                0,
                &UnresolvedInstruction::Mov(Register::Dx, UnresolvedOperand::Label("top")),
                &labels
            ),
            Ok(Instruction::Mov(Register::Dx, Operand::Literal(4)))
        );
        assert_eq!(
            resolve(0, &UnresolvedInstruction::Jmp(UnresolvedTarget::Index(9)), &labels),
            Ok(Instruction::Jmp(9))
        );
    }

    #[test]
    fn resolve_reports_undefined_labels() {
        assert_eq!(
            resolve(
                3,
                &UnresolvedInstruction::Je(UnresolvedTarget::Label("nowhere")),
                &HashMap::default()
            ),
            Err(AssemblyError::UndefinedLabel {
                statement: 3,
                label: "nowhere".to_owned()
            })
        );
    }
}
