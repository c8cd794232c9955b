//! Error types for the compilation pipeline and the CLI boundary.

use std::io;

use thiserror::Error;

use crate::compiler::MAX_LINE_LEN;
use crate::program::{MAX_ARGS, MAX_ARG_LEN};

/// Per-line compile diagnostics.
///
/// These are collected by the compiler and reported by the caller; a
/// diagnostic always means the offending line was skipped, never that
/// compilation as a whole failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Invalid instruction \"{text}\" at line {line}")]
    InvalidInstruction { text: String, line: usize },

    #[error("Line {line} is longer than {max} bytes")]
    LineTooLong { line: usize, max: usize },

    #[error("Missing arguments for '{opcode}' at line {line}")]
    MissingArguments { opcode: &'static str, line: usize },

    #[error("Too many arguments ({count}, limit {max}) at line {line}")]
    TooManyArguments {
        count: usize,
        max: usize,
        line: usize,
    },

    #[error("Argument \"{text}\" is longer than {max} bytes at line {line}")]
    ArgumentTooLong {
        text: String,
        max: usize,
        line: usize,
    },
}

impl CompileError {
    pub fn invalid_instruction(text: impl Into<String>, line: usize) -> Self {
        Self::InvalidInstruction {
            text: text.into(),
            line,
        }
    }

    pub fn line_too_long(line: usize) -> Self {
        Self::LineTooLong {
            line,
            max: MAX_LINE_LEN,
        }
    }

    pub fn missing_arguments(opcode: &'static str, line: usize) -> Self {
        Self::MissingArguments { opcode, line }
    }

    pub fn too_many_arguments(count: usize, line: usize) -> Self {
        Self::TooManyArguments {
            count,
            max: MAX_ARGS,
            line,
        }
    }

    pub fn argument_too_long(text: impl Into<String>, line: usize) -> Self {
        Self::ArgumentTooLong {
            text: text.into(),
            max: MAX_ARG_LEN,
            line,
        }
    }

    /// 1-based source line the diagnostic refers to.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidInstruction { line, .. } => *line,
            Self::LineTooLong { line, .. } => *line,
            Self::MissingArguments { line, .. } => *line,
            Self::TooManyArguments { line, .. } => *line,
            Self::ArgumentTooLong { line, .. } => *line,
        }
    }
}

/// A unified error type for the outer boundary.
///
/// The core never terminates the process; `main` maps these to exit codes.
#[derive(Debug, Error)]
pub enum BongoError {
    /// The program file could not be read.
    #[error("Could not open '{path}': {source}")]
    Script { path: String, source: io::Error },

    /// Writing trace or listing output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
