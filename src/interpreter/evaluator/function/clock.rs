use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Returns the wall-clock time as fractional seconds since the Unix epoch.
///
/// Takes no arguments. Useful for timing parts of a script.
///
/// # Errors
/// A native error if the system clock reads earlier than the epoch.
///
/// # Example
/// ```
/// use lox::interpreter::{evaluator::function::clock::clock, value::core::Value};
///
/// let Value::Number(seconds) = clock(&[], 1).unwrap() else {
///     panic!("clock returns a number");
/// };
/// assert!(seconds > 1_000_000_000.0);
/// ```
pub fn clock(_arguments: &[Value], line: usize) -> EvalResult<Value> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)
                                   .map_err(|error| RuntimeError::Native { message:
                                                                               format!("System clock is set before the Unix epoch: {error}."),
                                                                           line })?;

    Ok(Value::Number(elapsed.as_secs_f64()))
}
