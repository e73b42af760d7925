use std::{io, sync::Arc};

use thiserror::Error;

/// Represents all errors that can occur during evaluation and execution.
///
/// Every variant carries the line of the token the failure is attributed to.
/// The `Display` output is the exact report text: the message, a newline, and
/// `[line L]`.
///
/// # Example
/// ```
/// use lox::error::RuntimeError;
///
/// let error = RuntimeError::OperandsMustBeNumbers { line: 7 };
///
/// assert_eq!(error.to_string(), "Operands must be numbers.\n[line 7]");
/// assert_eq!(error.line(), 7);
/// ```
#[derive(Debug, Clone, Error)]
pub enum RuntimeError {
    /// Read or assignment of a name no reachable scope defines.
    #[error("Undefined variable '{name}'.\n[line {line}]")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Unary minus applied to a non-number.
    #[error("Operand must be a number.\n[line {line}]")]
    OperandMustBeNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic or comparison applied to non-numbers.
    #[error("Operands must be numbers.\n[line {line}]")]
    OperandsMustBeNumbers {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `+` applied to anything other than two numbers or two strings.
    #[error("Operands must be of the same type.\n[line {line}]")]
    OperandsMustBeSameType {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Call of a value that is not callable.
    #[error("Can only call functions and classes.\n[line {line}]")]
    NotCallable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a callable.
    #[error("Expected {expected} arguments but got {found}.\n[line {line}]")]
    ArityMismatch {
        /// The callable's arity.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A native function failed.
    #[error("{message}\n[line {line}]")]
    Native {
        /// Details about the failure.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operator token that has no meaning in the position it appears in.
    /// The parser never produces one; hand-built trees can.
    #[error("Unsupported operator '{operator}'.\n[line {line}]")]
    UnsupportedOperator {
        /// The operator's lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Writing or flushing program output failed.
    #[error("Could not write output: {source}\n[line {line}]")]
    Output {
        /// The underlying I/O error.
        #[source]
        source: Arc<io::Error>,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl RuntimeError {
    /// The source line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::OperandMustBeNumber { line }
            | Self::OperandsMustBeNumbers { line }
            | Self::OperandsMustBeSameType { line }
            | Self::NotCallable { line }
            | Self::ArityMismatch { line, .. }
            | Self::Native { line, .. }
            | Self::UnsupportedOperator { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}
