use std::{fmt, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Interpreter},
            function::clock,
        },
        lexer::Token,
        value::core::Value,
    },
};

/// Something a program can call.
///
/// The arity is checked by the caller before [`Callable::call`] runs, so an
/// implementation always receives exactly `arity()` arguments. `Display`
/// gives the text `print` shows for the value.
pub trait Callable: fmt::Debug + fmt::Display {
    /// The name the callable was defined under.
    fn name(&self) -> &str;

    /// The exact number of arguments the callable takes.
    fn arity(&self) -> usize;

    /// Runs the callable. `line` is the line of the call's closing
    /// parenthesis, for errors raised inside the call.
    ///
    /// # Errors
    /// Whatever runtime error the callable raises.
    fn call(&self,
            interpreter: &mut Interpreter,
            arguments: Vec<Value>,
            line: usize)
            -> EvalResult<Value>;
}

/// Signature of a native function body.
///
/// A native receives its evaluated arguments and the line number of the call.
pub type NativeFn = fn(&[Value], usize) -> EvalResult<Value>;

/// A callable implemented in Rust.
#[derive(Debug, Clone, Copy)]
pub struct NativeFunction {
    name:  &'static str,
    arity: usize,
    func:  NativeFn,
}

impl NativeFunction {
    /// Wraps `func` as a callable taking exactly `arity` arguments.
    #[must_use]
    pub const fn new(name: &'static str, arity: usize, func: NativeFn) -> Self {
        Self { name, arity, func }
    }
}

impl Callable for NativeFunction {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call(&self, _: &mut Interpreter, arguments: Vec<Value>, line: usize) -> EvalResult<Value> {
        (self.func)(&arguments, line)
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

/// Defines native functions by generating a lookup table and a name list.
///
/// Each entry provides a name, an arity and a function pointer implementing
/// the native. The macro produces `NATIVE_TABLE` and `NATIVE_FUNCTIONS`.
macro_rules! native_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static NATIVE_TABLE: &[NativeFunction] = &[
            $(
                NativeFunction::new($name, $arity, $func),
            )*
        ];
        /// Names of every native defined in a fresh global scope.
        pub const NATIVE_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

native_functions! {
    "clock" => { arity: 0, func: clock::clock },
}

/// Defines every native function in `globals`.
pub fn define_natives(globals: &mut Environment) {
    for native in NATIVE_TABLE {
        globals.define(native.name, Value::Callable(Rc::new(*native)));
    }
}

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right.
    /// Only then is the callee checked to be callable and the argument count
    /// checked against its arity.
    ///
    /// # Errors
    /// On the line of `paren`:
    /// - `Can only call functions and classes.` when the callee is not
    ///   callable.
    /// - `Expected N arguments but got M.` on an arity mismatch.
    ///
    /// Errors from evaluating the operands or from the call itself propagate
    /// unchanged.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       callee: &Expr,
                                                       paren: &Token,
                                                       arguments: &[Expr])
                                                       -> EvalResult<Value> {
        let callee = self.evaluate(callee)?;
        let arguments = arguments.iter()
                                 .map(|argument| self.evaluate(argument))
                                 .collect::<EvalResult<Vec<_>>>()?;

        let Value::Callable(function) = callee else {
            return Err(RuntimeError::NotCallable { line: paren.line });
        };

        if arguments.len() != function.arity() {
            return Err(RuntimeError::ArityMismatch { expected: function.arity(),
                                                     found:    arguments.len(),
                                                     line:     paren.line, });
        }

        tracing::trace!(function = function.name(), line = paren.line, "call");
        function.call(self, arguments, paren.line)
    }
}
