//! Instruction definitions for the bongo virtual machine.

use std::fmt;

/// Maximum number of positional arguments per instruction.
pub const MAX_ARGS: usize = 10;

/// Maximum length of a single argument, in bytes.
pub const MAX_ARG_LEN: usize = 15;

/// Opcodes of the bongo instruction set.
///
/// The vocabulary is closed: the compiler matches source tokens against it
/// case-sensitively and rejects everything else with a diagnostic, so no
/// sentinel "unknown" variant exists at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Store an integer literal in a variable: `define:<name> <literal>`
    Define,
    /// Copy one variable into another: `set:<dest> <src>`
    Set,
    /// Sum two variables into a destination: `add:<dest> <lhs> <rhs>`
    Add,
    /// Subtract two variables into a destination: `subtract:<dest> <lhs> <rhs>`
    Subtract,
    /// Multiply two variables into a destination: `multiply:<dest> <lhs> <rhs>`
    Multiply,
    /// Print a variable's value and halt: `return:<name>`
    Return,
}

impl Opcode {
    /// Match a source token against the opcode vocabulary. Case-sensitive.
    pub fn parse(token: &str) -> Option<Opcode> {
        match token {
            "define" => Some(Opcode::Define),
            "set" => Some(Opcode::Set),
            "add" => Some(Opcode::Add),
            "subtract" => Some(Opcode::Subtract),
            "multiply" => Some(Opcode::Multiply),
            "return" => Some(Opcode::Return),
            _ => None,
        }
    }

    /// The canonical source token for this opcode.
    pub fn name(self) -> &'static str {
        match self {
            Opcode::Define => "define",
            Opcode::Set => "set",
            Opcode::Add => "add",
            Opcode::Subtract => "subtract",
            Opcode::Multiply => "multiply",
            Opcode::Return => "return",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single compiled instruction: an opcode plus positional string arguments.
///
/// Instructions are created once by the compiler and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    /// Positional arguments, 1..=[`MAX_ARGS`] entries as enforced by the
    /// compiler. Variable names or numeric literals.
    pub args: Vec<String>,
    /// 1-based source line this instruction was compiled from.
    pub line: usize,
}

impl Instruction {
    pub fn new(opcode: Opcode, args: Vec<String>, line: usize) -> Instruction {
        Instruction { opcode, args, line }
    }

    /// Argument at `index`, or the empty string when absent.
    ///
    /// Execution resolves a missing argument as the empty name, which hashes
    /// like any other string, so opcode handlers never fail on arity.
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_token_roundtrip() {
        for opcode in [
            Opcode::Define,
            Opcode::Set,
            Opcode::Add,
            Opcode::Subtract,
            Opcode::Multiply,
            Opcode::Return,
        ] {
            assert_eq!(Opcode::parse(opcode.name()), Some(opcode));
        }
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        assert_eq!(Opcode::parse("foo"), None);
        assert_eq!(Opcode::parse("none"), None);
        assert_eq!(Opcode::parse(""), None);
        // Matching is case-sensitive.
        assert_eq!(Opcode::parse("DEFINE"), None);
        assert_eq!(Opcode::parse("Define"), None);
    }

    #[test]
    fn test_missing_argument_is_empty() {
        let instruction = Instruction::new(Opcode::Return, vec!["x".to_string()], 1);
        assert_eq!(instruction.arg(0), "x");
        assert_eq!(instruction.arg(1), "");
        assert_eq!(instruction.arg(9), "");
    }
}
