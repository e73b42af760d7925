use std::{io::Write, sync::Arc};

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::ScopeGuard,
        },
        lexer::Token,
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `expression` and writes its display form as one line.
    pub(in crate::interpreter::evaluator) fn exec_print(&mut self, expression: &Expr) -> EvalResult<()> {
        let value = self.evaluate(expression)?;

        writeln!(self.output, "{value}").map_err(|source| {
                                            RuntimeError::Output { source: Arc::new(source),
                                                                   line:   expression.line_number()
                                                                                     .unwrap_or_default(), }
                                        })
    }

    /// Declares `name` in the active scope, `nil` when there is no
    /// initializer. The initializer is evaluated before the name exists, so
    /// `var a = a;` reads any outer `a`.
    pub(in crate::interpreter::evaluator) fn exec_var(&mut self,
                                                      name: &Token,
                                                      initializer: Option<&Expr>)
                                                      -> EvalResult<()> {
        let value = match initializer {
            Some(expr) => self.evaluate(expr)?,
            None => Value::Nil,
        };

        self.environment.borrow_mut().define(name.lexeme.as_str(), value);
        Ok(())
    }

    /// Runs `statements` with `scope` as the active scope.
    ///
    /// The previously active scope is restored however the block is left.
    ///
    /// # Errors
    /// The first runtime error raised by a statement in the block.
    pub fn execute_block(&mut self, statements: &[Stmt], scope: Environment) -> EvalResult<()> {
        let mut guard = ScopeGuard::enter(self, scope);

        for statement in statements {
            guard.execute(statement)?;
        }

        Ok(())
    }

    pub(in crate::interpreter::evaluator) fn exec_if(&mut self,
                                                     condition: &Expr,
                                                     then_branch: &Stmt,
                                                     else_branch: Option<&Stmt>)
                                                     -> EvalResult<()> {
        if self.evaluate(condition)?.is_truthy() {
            self.execute(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.execute(else_branch)
        } else {
            Ok(())
        }
    }

    /// Re-evaluates `condition` before every iteration. The loop itself adds
    /// no scope; a block body gets a fresh one each time round.
    pub(in crate::interpreter::evaluator) fn exec_while(&mut self,
                                                        condition: &Expr,
                                                        body: &Stmt)
                                                        -> EvalResult<()> {
        while self.evaluate(condition)?.is_truthy() {
            self.execute(body)?;
        }

        Ok(())
    }
}
