//! Bongolang: a minimal compiler and interpreter for the line-oriented
//! "bongo" instruction language.
//!
//! A program is a sequence of `<opcode>:<arg1> <arg2> ...` lines. The
//! compiler turns the text into an instruction list, skipping blank lines,
//! `::` comments, and malformed lines (with a diagnostic); the virtual
//! machine then executes the list against a ten-slot variable store
//! addressed by hashing variable names, emitting a trace line per
//! instruction and halting at the first `return`.

pub mod compiler;
pub mod error;
pub mod program;
pub mod vm;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub use compiler::Compiler;
pub use error::{BongoError, CompileError};
pub use program::{disassemble_program, Instruction, Opcode, Program};
pub use vm::{Store, Vm};

/// Compile and run a bongo program, tracing to stdout and reporting compile
/// diagnostics on stderr. Returns the value of the first `return`
/// instruction, if any.
pub fn run(source: &str) -> Result<Option<i64>, BongoError> {
    run_with_options(source, false)
}

/// Compile and run a bongo program, optionally printing the compiled
/// instruction listing before execution.
pub fn run_with_options(source: &str, disassemble: bool) -> Result<Option<i64>, BongoError> {
    let mut compiler = Compiler::new();
    let program = compiler.compile(source);
    for diagnostic in compiler.diagnostics() {
        eprintln!("bongo: {}", diagnostic);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if disassemble {
        write!(out, "{}", disassemble_program(&program))?;
        writeln!(out, "---")?;
    }

    let mut vm = Vm::new();
    let value = vm.run(&program);
    for line in &vm.output {
        writeln!(out, "{}", line)?;
    }
    Ok(value)
}

/// Run a bongo program from a file path.
pub fn run_file(path: &Path, disassemble: bool) -> Result<Option<i64>, BongoError> {
    let source = fs::read_to_string(path).map_err(|source| BongoError::Script {
        path: path.display().to_string(),
        source,
    })?;
    run_with_options(&source, disassemble)
}
