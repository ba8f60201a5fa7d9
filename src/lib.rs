#[macro_use]
extern crate lazy_static;

pub mod assembler;
pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod preprocessor;
pub mod program;
pub mod registers;
pub mod statement;

pub use assembler::assemble;
pub use engine::{execute, Engine};
pub use error::{AssemblyError, Error, ExecutionError};
pub use program::Program;
pub use registers::Registers;
pub use statement::{Argument, JumpTarget, Statement};
