mod register;
mod resolver;
mod unresolved_instruction;

use crate::{error::AssemblyError, program::Program, statement::Statement};
use log::debug;
use resolver::{resolve, resolve_labels};
use unresolved_instruction::UnresolvedInstruction;

pub(crate) fn is_valid_label(s: &str) -> bool {
    fn is_valid_first_char(c: u8) -> bool {
        match c {
            b'$' | b'@' | b'_' => true,
            b'A'..=b'Z' => true,
            b'a'..=b'z' => true,
            _ => false,
        }
    }

    fn is_valid_char(c: u8) -> bool {
        match c {
            b'0'..=b'9' => true,
            _ => is_valid_first_char(c),
        }
    }

    let mut bytes = s.bytes();
    if let Some(first) = bytes.next() {
        is_valid_first_char(first) && bytes.all(is_valid_char)
    } else {
        false
    }
}

/// Assembles `statements` into a program. Labels may be used before they are
/// declared; every reference is replaced by an instruction index, so the
/// resulting program contains no names.
pub fn assemble(statements: &[Statement]) -> Result<Program, AssemblyError> {
    let labels = resolve_labels(statements)?;

    let mut instructions = Vec::with_capacity(statements.len());

    for (index, statement) in statements.iter().enumerate() {
        if let Statement::Instruction { mnemonic, operands } = statement {
            let unresolved = UnresolvedInstruction::decode(index, mnemonic, operands)?;
            instructions.push(resolve(index, &unresolved, &labels)?);
        }
    }

    debug!(
        "assembled {} statements into {} instructions with {} labels",
        statements.len(),
        instructions.len(),
        labels.len()
    );

    Ok(Program::new(instructions, labels))
}
