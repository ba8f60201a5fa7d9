use crate::instruction::Register;
use std::collections::HashMap;

lazy_static! {
    static ref REGISTER_MAP: HashMap<&'static str, Register> = Register::ALL
        .iter()
        .map(|reg| (reg.name(), *reg))
        .collect();
}

pub(crate) fn parse_register(name: &str) -> Option<Register> {
    REGISTER_MAP.get(name).copied()
}
