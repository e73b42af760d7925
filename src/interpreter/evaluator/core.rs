use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
    sync::Arc,
};

use crate::{
    ast::{Expr, Stmt},
    diagnostic::Reporter,
    error::RuntimeError,
    interpreter::{
        environment::Environment, evaluator::function::core::define_natives, value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes programs and holds the state that outlives a single run.
///
/// ## Usage
///
/// An `Interpreter` is created once and reused: globals defined by one call
/// to [`Interpreter::interpret`] are visible to the next, which is what lets
/// the REPL build up state line by line.
pub struct Interpreter {
    /// The outermost scope. Natives are defined here.
    pub(in crate::interpreter::evaluator) globals:     Rc<RefCell<Environment>>,
    /// The scope new declarations go into. Replaced while a block runs.
    pub(in crate::interpreter::evaluator) environment: Rc<RefCell<Environment>>,
    /// Where `print` writes.
    pub(in crate::interpreter::evaluator) output:      Box<dyn Write>,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }

    /// Creates an interpreter that prints to `output`.
    ///
    /// The global scope starts out holding the native functions.
    ///
    /// # Example
    /// ```
    /// use std::{cell::RefCell, io::Write, rc::Rc};
    ///
    /// use lox::{diagnostic::CollectingReporter, interpreter::evaluator::core::Interpreter};
    ///
    /// #[derive(Clone, Default)]
    /// struct Shared(Rc<RefCell<Vec<u8>>>);
    ///
    /// impl Write for Shared {
    ///     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    ///         self.0.borrow_mut().write(buf)
    ///     }
    ///
    ///     fn flush(&mut self) -> std::io::Result<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let output = Shared::default();
    /// let mut interpreter = Interpreter::with_output(output.clone());
    /// let mut reporter = CollectingReporter::default();
    ///
    /// lox::run("print 1 + 2;", &mut interpreter, &mut reporter);
    ///
    /// assert_eq!(output.0.borrow().as_slice(), b"3\n");
    /// ```
    pub fn with_output(output: impl Write + 'static) -> Self {
        let mut globals = Environment::new();
        define_natives(&mut globals);

        let globals = Rc::new(RefCell::new(globals));
        Self { environment: Rc::clone(&globals),
               globals,
               output: Box::new(output) }
    }

    /// Binds `name` in the global scope, as if declared at top level.
    ///
    /// Embedders use this to hand values, such as extra natives, to scripts.
    pub fn define_global(&mut self, name: &str, value: Value) {
        self.globals.borrow_mut().define(name, value);
    }

    /// Executes `statements` in order.
    ///
    /// The first runtime error stops execution; it is sent to `reporter` and
    /// nothing after it runs. Output already written stays written and is
    /// flushed. A failed flush is reported as [`RuntimeError::Output`] on
    /// line 0, unless an earlier error already ended the run.
    pub fn interpret(&mut self, statements: &[Stmt], reporter: &mut dyn Reporter) {
        tracing::debug!(statements = statements.len(), "interpreting");

        let executed = statements.iter().try_for_each(|statement| self.execute(statement));
        let flushed = self.output.flush().map_err(|source| {
                                             RuntimeError::Output { source: Arc::new(source),
                                                                    line:   0, }
                                         });

        if let Err(error) = executed.and(flushed) {
            tracing::debug!(line = error.line(), "runtime error");
            reporter.runtime_error(&error);
        }
    }

    /// Executes a single statement.
    ///
    /// # Errors
    /// Any runtime error raised while executing the statement.
    pub fn execute(&mut self, statement: &Stmt) -> EvalResult<()> {
        ensure_sufficient_stack(|| match statement {
            Stmt::Expression { expression } => self.evaluate(expression).map(drop),
            Stmt::Print { expression } => self.exec_print(expression),
            Stmt::Var { name, initializer } => self.exec_var(name, initializer.as_ref()),
            Stmt::Block { statements } => {
                let scope = Environment::new_enclosed(Rc::clone(&self.environment));
                self.execute_block(statements, scope)
            },
            Stmt::If { condition,
                       then_branch,
                       else_branch, } => self.exec_if(condition, then_branch, else_branch.as_deref()),
            Stmt::While { condition, body } => self.exec_while(condition, body),
        })
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation; it dispatches
    /// on the expression variant.
    ///
    /// # Errors
    /// Any runtime error raised while evaluating the expression or one of its
    /// subexpressions.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal { value } => Ok(Value::from(value)),
            Expr::Grouping { expression } => self.evaluate(expression),
            Expr::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                Self::eval_unary(operator, &right)
            },
            Expr::Binary { left,
                           operator,
                           right, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::eval_binary(operator, &left, &right)
            },
            Expr::Logical { left,
                            operator,
                            right, } => self.eval_logical(left, operator, right),
            Expr::Variable { name } => self.environment.borrow().get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.borrow_mut().assign(name, value.clone())?;
                Ok(value)
            },
            Expr::Call { callee,
                         paren,
                         arguments, } => self.eval_call(callee, paren, arguments),
        })
    }
}
