/// Syntax errors.
///
/// Defines the errors that can occur while scanning and parsing source code:
/// unexpected characters, missing punctuation, malformed expressions and the
/// soft limits the parser enforces without aborting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a program:
/// type mismatches, undefined variables, bad calls and output failures.
pub mod runtime_error;

pub use parse_error::{Location, ParseError, ParseErrorKind};
pub use runtime_error::RuntimeError;
