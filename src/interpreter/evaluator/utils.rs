use std::{
    cell::RefCell,
    mem,
    ops::{Deref, DerefMut},
    rc::Rc,
};

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

/// Makes a scope the active one for as long as the guard lives.
///
/// Dropping the guard restores the scope that was active before, whether the
/// block finished normally or a runtime error is propagating out of it.
/// The guard dereferences to the interpreter, so the block body runs through
/// it.
pub struct ScopeGuard<'a> {
    interpreter: &'a mut Interpreter,
    previous:    Rc<RefCell<Environment>>,
}

impl<'a> ScopeGuard<'a> {
    pub fn enter(interpreter: &'a mut Interpreter, scope: Environment) -> Self {
        let previous = mem::replace(&mut interpreter.environment, Rc::new(RefCell::new(scope)));
        Self { interpreter,
               previous }
    }
}

impl Deref for ScopeGuard<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Interpreter {
        self.interpreter
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Interpreter {
        self.interpreter
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.interpreter.environment = Rc::clone(&self.previous);
    }
}

/// Returns the operand of a unary numeric operator.
///
/// # Errors
/// `Operand must be a number.` when `operand` is not a number.
pub fn number_operand(operand: &Value, line: usize) -> EvalResult<f64> {
    match operand.as_number() {
        Some(n) => Ok(n),
        None => Err(RuntimeError::OperandMustBeNumber { line }),
    }
}

/// Returns both operands of a binary numeric operator.
///
/// # Errors
/// `Operands must be numbers.` unless both operands are numbers.
///
/// # Example
/// ```
/// use lox::interpreter::{evaluator::utils::number_operands, value::core::Value};
///
/// assert_eq!(number_operands(&Value::Number(1.0), &Value::Number(2.0), 1).unwrap(), (1.0, 2.0));
/// assert!(number_operands(&Value::Number(1.0), &Value::Nil, 1).is_err());
/// ```
pub fn number_operands(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
    }
}
