use crate::{
    config::EngineConfig,
    engine::Engine,
    error::Error,
    parser::parse_lines,
    preprocessor::preprocess,
    program::Program,
    registers::Registers,
    statement::Statement,
};
use log::info;
use std::{fs, io, path::Path};

/// Preprocesses, lexes and parses assembly source into statements.
pub fn parse_source(source: &str) -> Result<Vec<Statement>, Error> {
    let lines = preprocess(source)?;
    Ok(parse_lines(&lines)?)
}

pub fn assemble_source(source: &str) -> Result<Program, Error> {
    let statements = parse_source(source)?;
    Ok(Program::assemble(&statements)?)
}

pub fn interpret(source: &str, config: EngineConfig) -> Result<Registers, Error> {
    let program = assemble_source(source)?;
    Ok(Engine::new(config).run(&program)?)
}

fn read_to_string_with_possible_extension(path: &Path, extension: &str) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(s) => return Ok(s),
        Err(error) => match error.kind() {
            io::ErrorKind::NotFound => (),
            _ => return Err(error),
        },
    };

    let mut with_extension = path.as_os_str().to_owned();
    with_extension.push(extension);
    fs::read_to_string(with_extension)
}

/// Reads `path` (trying `path.asm` if it does not exist) and runs it.
pub fn interpret_file<P: AsRef<Path>>(path: P, config: EngineConfig) -> Result<Registers, Error> {
    let path = path.as_ref();
    info!("running {}", path.display());

    let source = read_to_string_with_possible_extension(path, ".asm")?;
    interpret(&source, config)
}
