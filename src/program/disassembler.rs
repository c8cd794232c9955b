//! Program listing for debug output and round-trips.

use std::fmt::Write;

use super::{Instruction, Program};

/// Render a compiled program back to normalized source: one
/// `<opcode>:<arg1> <arg2> ...` line per instruction.
///
/// Compiling the output again yields an instruction-for-instruction
/// equivalent program (argument separators collapse to single spaces).
pub fn disassemble_program(program: &Program) -> String {
    let mut out = String::new();
    for instruction in program {
        disassemble_instruction(instruction, &mut out);
    }
    out
}

fn disassemble_instruction(instruction: &Instruction, out: &mut String) {
    writeln!(out, "{}:{}", instruction.opcode, instruction.args.join(" ")).unwrap();
}
