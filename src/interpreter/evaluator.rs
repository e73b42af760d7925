/// Binary operator evaluation logic.
///
/// Arithmetic, comparison, string concatenation and equality. Both operands
/// are always evaluated, left first.
pub mod binary;

/// Unary operator evaluation logic: numeric negation and logical not.
pub mod unary;

/// Evaluation of `and` / `or`.
pub mod logic;

/// Core evaluation logic.
///
/// Contains the `Interpreter` itself, the dispatch over expression and
/// statement nodes, and the error boundary that reports runtime errors.
pub mod core;

/// Statement execution: printing, declarations, blocks and control flow.
pub mod statement;

/// Utility functions for evaluation.
///
/// Operand checks shared by the operator modules and the guard that restores
/// the active scope when a block is left.
pub mod utils;

/// Function calls.
///
/// Defines the callable capability, the native function table and the
/// evaluation of call expressions.
pub mod function;
