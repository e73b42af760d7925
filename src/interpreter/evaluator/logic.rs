use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        lexer::{Token, TokenKind},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates `left or right` / `left and right`, always to a boolean.
    ///
    /// - `or` yields the truthiness of `left`. `right` is never evaluated.
    /// - `and` yields `false` when `left` is falsy, without evaluating
    ///   `right`, and the truthiness of `right` otherwise.
    pub(in crate::interpreter::evaluator) fn eval_logical(&mut self,
                                                          left: &Expr,
                                                          operator: &Token,
                                                          right: &Expr)
                                                          -> EvalResult<Value> {
        let left = self.evaluate(left)?.is_truthy();

        match operator.kind {
            TokenKind::Or => Ok(Value::Bool(left)),
            TokenKind::And if !left => Ok(Value::Bool(false)),
            TokenKind::And => Ok(Value::Bool(self.evaluate(right)?.is_truthy())),
            _ => Err(RuntimeError::UnsupportedOperator { operator: operator.lexeme.clone(),
                                                         line:     operator.line, }),
        }
    }
}
