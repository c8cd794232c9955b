//! Execution engine: walks a compiled program against the variable store.

pub mod store;

pub use store::{Store, STORE_CAPACITY};

use crate::program::{Opcode, Program};

/// The bongo virtual machine.
///
/// Owns the variable store and a cursor over the instruction list. Control
/// flow is strictly linear: execution halts at the first `return` or after
/// the last instruction, whichever comes first. Execution itself cannot
/// fail — slot addressing is always in range by construction and the
/// arithmetic wraps.
pub struct Vm {
    store: Store,
    /// Trace lines, one per executed instruction (for printing or capture).
    pub output: Vec<String>,
}

impl Vm {
    pub fn new() -> Vm {
        Vm {
            store: Store::new(),
            output: Vec::new(),
        }
    }

    /// The variable store, primarily for inspection in tests.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Execute `program` from the top, pushing one trace line per
    /// instruction onto [`Vm::output`].
    ///
    /// Returns the value produced by the first `return` instruction, or
    /// `None` when the program ends without one.
    pub fn run(&mut self, program: &Program) -> Option<i64> {
        for instruction in program {
            let opcode = instruction.opcode;
            match opcode {
                Opcode::Define => {
                    let name = instruction.arg(0);
                    let slot = Store::slot(name);
                    let value = parse_literal(instruction.arg(1));
                    self.store.set(slot, value);
                    self.output
                        .push(format!("{}: {} ({}) to {}", opcode, name, slot, value));
                }
                Opcode::Set => {
                    let dest = instruction.arg(0);
                    let src = instruction.arg(1);
                    let dest_slot = Store::slot(dest);
                    let src_slot = Store::slot(src);
                    let value = self.store.get(src_slot);
                    self.store.set(dest_slot, value);
                    self.output.push(format!(
                        "{}: {} ({}) to {} ({}); {}",
                        opcode, dest, dest_slot, src, src_slot, value
                    ));
                }
                Opcode::Add | Opcode::Subtract | Opcode::Multiply => {
                    let dest = instruction.arg(0);
                    let lhs = instruction.arg(1);
                    let rhs = instruction.arg(2);
                    let dest_slot = Store::slot(dest);
                    let lhs_slot = Store::slot(lhs);
                    let rhs_slot = Store::slot(rhs);
                    let a = self.store.get(lhs_slot);
                    let b = self.store.get(rhs_slot);
                    let value = match opcode {
                        Opcode::Add => a.wrapping_add(b),
                        Opcode::Subtract => a.wrapping_sub(b),
                        Opcode::Multiply => a.wrapping_mul(b),
                        _ => unreachable!("non-arithmetic opcode in arithmetic arm"),
                    };
                    self.store.set(dest_slot, value);
                    self.output.push(format!(
                        "{}: {} ({}) to {} ({}), {} ({}); {} {} {} = {}",
                        opcode, dest, dest_slot, lhs, lhs_slot, rhs, rhs_slot, a, opcode, b, value
                    ));
                }
                Opcode::Return => {
                    let value = self.store.fetch(instruction.arg(0));
                    self.output.push(format!("{}: {}", opcode, value));
                    return Some(value);
                }
            }
        }
        None
    }
}

impl Default for Vm {
    fn default() -> Vm {
        Vm::new()
    }
}

/// Permissive integer parsing in the manner of C's `atoi`: optional leading
/// whitespace and sign, then leading decimal digits. Anything else — or no
/// digits at all — contributes 0.
fn parse_literal(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let mut value: i64 = 0;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(i64::from(byte - b'0'));
    }
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::Compiler;

    fn run_source(source: &str) -> (Vec<String>, Option<i64>) {
        let mut compiler = Compiler::new();
        let program = compiler.compile(source);
        let mut vm = Vm::new();
        let value = vm.run(&program);
        (vm.output, value)
    }

    #[test]
    fn test_define_add_return() {
        let (trace, value) = run_source("define:x 5\ndefine:y 3\nadd:z x y\nreturn:z\n");
        assert_eq!(value, Some(8));
        assert_eq!(
            trace,
            vec![
                "define: x (3) to 5",
                "define: y (4) to 3",
                "add: z (5) to x (3), y (4); 5 add 3 = 8",
                "return: 8",
            ]
        );
    }

    #[test]
    fn test_subtract_and_multiply() {
        let (_, difference) = run_source("define:x 5\ndefine:y 3\nsubtract:z x y\nreturn:z\n");
        assert_eq!(difference, Some(2));

        let (_, product) = run_source("define:x 5\ndefine:y 3\nmultiply:z x y\nreturn:z\n");
        assert_eq!(product, Some(15));
    }

    #[test]
    fn test_set_copies_between_slots() {
        let (trace, value) = run_source("define:b 9\nset:a b\nreturn:a\n");
        assert_eq!(value, Some(9));
        assert_eq!(trace[1], "set: a (0) to b (1); 9");
    }

    #[test]
    fn test_set_from_undefined_copies_zero() {
        let (trace, value) = run_source("set:a b\nreturn:a\n");
        assert_eq!(value, Some(0));
        assert_eq!(trace, vec!["set: a (0) to b (1); 0", "return: 0"]);
    }

    #[test]
    fn test_return_of_undefined_is_zero() {
        // The malformed first line is skipped at compile time, so `x` is
        // never defined and the zero-initialized slot is returned.
        let (trace, value) = run_source("foo:1 2\nreturn:x\n");
        assert_eq!(value, Some(0));
        assert_eq!(trace, vec!["return: 0"]);
    }

    #[test]
    fn test_return_halts_execution() {
        let (trace, value) = run_source("define:x 1\nreturn:x\ndefine:y 9\n");
        assert_eq!(value, Some(1));
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_no_return_yields_none() {
        let (trace, value) = run_source("define:x 1\ndefine:y 2\n");
        assert_eq!(value, None);
        assert_eq!(trace.len(), 2);
    }

    #[test]
    fn test_empty_program_is_a_noop() {
        let (trace, value) = run_source("");
        assert_eq!(value, None);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_colliding_names_alias() {
        // "a" and "k" hash to the same slot; defining one defines the other.
        let (_, value) = run_source("define:a 7\nreturn:k\n");
        assert_eq!(value, Some(7));
    }

    #[test]
    fn test_runs_are_idempotent() {
        let source = "define:x 5\ndefine:y 3\nadd:z x y\nset:x z\nreturn:x\n";
        let (first_trace, first_value) = run_source(source);
        let (second_trace, second_value) = run_source(source);
        assert_eq!(first_trace, second_trace);
        assert_eq!(first_value, second_value);
    }

    #[test]
    fn test_redefine_overwrites_slot() {
        let (_, value) = run_source("define:x 5\ndefine:x 6\nreturn:x\n");
        assert_eq!(value, Some(6));
    }

    #[test]
    fn test_destination_may_alias_operand() {
        let (_, value) = run_source("define:x 5\nadd:x x x\nreturn:x\n");
        assert_eq!(value, Some(10));
    }

    #[test]
    fn test_permissive_literal_parsing() {
        assert_eq!(parse_literal("5"), 5);
        assert_eq!(parse_literal("-3"), -3);
        assert_eq!(parse_literal("+7"), 7);
        assert_eq!(parse_literal("5x"), 5);
        assert_eq!(parse_literal("x"), 0);
        assert_eq!(parse_literal(""), 0);
        assert_eq!(parse_literal("  42"), 42);
        assert_eq!(parse_literal("-"), 0);
    }

    #[test]
    fn test_non_numeric_define_stores_zero() {
        let (trace, value) = run_source("define:x oops\nreturn:x\n");
        assert_eq!(value, Some(0));
        assert_eq!(trace[0], "define: x (3) to 0");
    }
}
