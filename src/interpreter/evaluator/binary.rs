use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::number_operands,
        },
        lexer::{Token, TokenKind},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// - `-`, `*`, `/` and the comparisons require two numbers and follow
    ///   IEEE-754: dividing by zero yields an infinity or NaN, not an error.
    /// - `+` adds two numbers or concatenates two strings.
    /// - `==` and `!=` compare any two values without coercion.
    ///
    /// # Errors
    /// On the operator's line:
    /// - `Operands must be numbers.` for a numeric operator on other values.
    /// - `Operands must be of the same type.` for `+` on anything but two
    ///   numbers or two strings.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     evaluator::core::Interpreter,
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let plus = Token::new(TokenKind::Plus, "+", 1);
    ///
    /// let sum = Interpreter::eval_binary(&plus, &Value::Number(3.0), &Value::Number(4.0));
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let text = Interpreter::eval_binary(&plus, &Value::from("a"), &Value::from("b"));
    /// assert_eq!(text.unwrap(), Value::from("ab"));
    /// ```
    pub fn eval_binary(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
        let line = operator.line;

        match operator.kind {
            TokenKind::Plus => match (left, right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::from(format!("{a}{b}").as_str())),
                _ => Err(RuntimeError::OperandsMustBeSameType { line }),
            },
            TokenKind::Minus => number_operands(left, right, line).map(|(a, b)| Value::Number(a - b)),
            TokenKind::Star => number_operands(left, right, line).map(|(a, b)| Value::Number(a * b)),
            TokenKind::Slash => number_operands(left, right, line).map(|(a, b)| Value::Number(a / b)),
            TokenKind::Greater => number_operands(left, right, line).map(|(a, b)| Value::Bool(a > b)),
            TokenKind::GreaterEqual => {
                number_operands(left, right, line).map(|(a, b)| Value::Bool(a >= b))
            },
            TokenKind::Less => number_operands(left, right, line).map(|(a, b)| Value::Bool(a < b)),
            TokenKind::LessEqual => {
                number_operands(left, right, line).map(|(a, b)| Value::Bool(a <= b))
            },
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            _ => Err(RuntimeError::UnsupportedOperator { operator: operator.lexeme.clone(),
                                                         line }),
        }
    }
}
