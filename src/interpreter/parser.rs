/// Parser state, token cursor and error recovery.
///
/// Holds the `Parser` struct, the helpers every grammar rule uses to inspect
/// and consume tokens, and `synchronize`, which skips to the next statement
/// boundary after a syntax error.
pub mod core;

/// Declarations and statements.
///
/// Parses `var` declarations, blocks, `print`, `if`, `while`, and rewrites
/// `for` loops into blocks and `while` loops.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the precedence ladder from assignment down to factors,
/// including the short-circuiting `and` / `or` operators.
pub mod binary;

/// Unary, call and primary expressions.
///
/// Parses prefix operators, call chains and the atomic expressions at the
/// bottom of the grammar.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides helpers shared by several grammar rules, such as argument lists.
pub mod utils;
