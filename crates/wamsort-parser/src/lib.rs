//! # wamsort Parser
//!
//! Recognizes WAZER programs, splits them into header, cuts and footer, and
//! writes them back verbatim in any cut order.

pub mod dialect;
pub mod file_io;
pub mod parser;
pub mod program;

pub use dialect::BlockDialect;
pub use file_io::{list_programs, output_path, read_program, write_program};
pub use parser::BlockParser;
pub use program::{serialize, Program};

/// Parse a program with the WAZER dialect
pub fn parse(text: &str) -> Result<Program, wamsort_core::GcodeError> {
    Program::parse(text)
}
