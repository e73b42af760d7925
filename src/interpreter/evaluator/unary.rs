use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::number_operand,
        },
        lexer::{Token, TokenKind},
        value::core::Value,
    },
};

impl Interpreter {
    /// Applies a prefix operator to an already evaluated operand.
    ///
    /// - `-` negates a number.
    /// - `!` yields the opposite of the operand's truthiness, for any value.
    ///
    /// # Errors
    /// `Operand must be a number.` for `-` on anything but a number, on the
    /// operator's line.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let minus = Token::new(TokenKind::Minus, "-", 1);
    /// let bang = Token::new(TokenKind::Bang, "!", 1);
    ///
    /// assert_eq!(Interpreter::eval_unary(&minus, &Value::Number(5.0)).unwrap(), Value::Number(-5.0));
    /// assert_eq!(Interpreter::eval_unary(&bang, &Value::Nil).unwrap(), Value::Bool(true));
    /// assert!(Interpreter::eval_unary(&minus, &Value::from("5")).is_err());
    /// ```
    pub fn eval_unary(operator: &Token, right: &Value) -> EvalResult<Value> {
        match operator.kind {
            TokenKind::Minus => Ok(Value::Number(-number_operand(right, operator.line)?)),
            TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
            _ => Err(RuntimeError::UnsupportedOperator { operator: operator.lexeme.clone(),
                                                         line:     operator.line, }),
        }
    }
}
