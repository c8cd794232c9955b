//! Line compiler: turns bongo source text into an instruction list.

use crate::error::CompileError;
use crate::program::{Instruction, Opcode, Program, MAX_ARGS, MAX_ARG_LEN};

/// Maximum accepted source line length, in bytes.
pub const MAX_LINE_LEN: usize = 255;

/// The compiler walks source lines in order, appending one instruction per
/// valid line and recording a diagnostic for every line it has to skip.
/// Compilation never fails as a whole; the diagnostics are the only side
/// channel.
pub struct Compiler {
    diagnostics: Vec<CompileError>,
}

impl Compiler {
    pub fn new() -> Compiler {
        Compiler {
            diagnostics: Vec::new(),
        }
    }

    /// Compile a whole source text into a program.
    ///
    /// Blank lines and `::` comment lines are skipped silently; malformed
    /// lines are skipped with a diagnostic. Instruction order matches the
    /// order of the surviving source lines.
    pub fn compile(&mut self, source: &str) -> Program {
        let mut program = Program::new();
        for (index, line) in source.lines().enumerate() {
            if let Some(instruction) = self.compile_line(line, index + 1) {
                program.push(instruction);
            }
        }
        program
    }

    /// Diagnostics recorded so far, in source order.
    pub fn diagnostics(&self) -> &[CompileError] {
        &self.diagnostics
    }

    /// Drain the recorded diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<CompileError> {
        std::mem::take(&mut self.diagnostics)
    }

    fn compile_line(&mut self, line: &str, number: usize) -> Option<Instruction> {
        if line.is_empty() {
            return None;
        }
        if line.starts_with("::") {
            return None;
        }
        if line.len() > MAX_LINE_LEN {
            self.diagnostics.push(CompileError::line_too_long(number));
            return None;
        }

        // The opcode token runs up to the first ':'; a line without one is a
        // bare opcode token with no argument list.
        let (token, rest) = line.split_once(':').unwrap_or((line, ""));
        let Some(opcode) = Opcode::parse(token) else {
            self.diagnostics
                .push(CompileError::invalid_instruction(token, number));
            return None;
        };

        let args: Vec<String> = rest.split_whitespace().map(str::to_owned).collect();
        if args.is_empty() {
            self.diagnostics
                .push(CompileError::missing_arguments(opcode.name(), number));
            return None;
        }
        if args.len() > MAX_ARGS {
            self.diagnostics
                .push(CompileError::too_many_arguments(args.len(), number));
            return None;
        }
        if let Some(arg) = args.iter().find(|arg| arg.len() > MAX_ARG_LEN) {
            self.diagnostics
                .push(CompileError::argument_too_long(arg.as_str(), number));
            return None;
        }

        Some(Instruction::new(opcode, args, number))
    }
}

impl Default for Compiler {
    fn default() -> Compiler {
        Compiler::new()
    }
}
