use crate::{
    ast::{Expr, LiteralValue},
    error::{ParseError, ParseErrorKind},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_, '_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix operators:
    /// - `-`  (numeric negation)
    /// - `!`  (logical not)
    ///
    /// Unary operators are right-associative, so an input like `!-x` is parsed
    /// as `!( -x )`. Without an operator the rule falls through to calls.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("!" | "-") unary
    ///            | call
    /// ```
    pub(in crate::interpreter::parser) fn unary(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| {
            if let Some(operator) = self.matches(&[TokenKind::Bang, TokenKind::Minus]) {
                let right = self.unary()?;
                return Ok(Expr::Unary { operator: operator.clone(),
                                        right:    Box::new(right), });
            }

            self.call()
        })
    }

    /// Parses a primary expression followed by any number of call suffixes,
    /// so `f()()` calls the result of `f()`.
    ///
    /// Grammar: `call := primary ("(" arguments? ")")*`
    fn call(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;

        while self.matches(&[TokenKind::LeftParen]).is_some() {
            let arguments = self.arguments()?;
            let paren = self.consume(TokenKind::RightParen, "Expect ')' after arguments.")?
                            .clone();
            expr = Expr::Call { callee: Box::new(expr),
                                paren,
                                arguments };
        }

        Ok(expr)
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER | STRING | "true" | "false" | "nil"
    ///              | IDENTIFIER | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// `Expect expression.` at the current token when nothing here can start
    /// an expression; the token is left for `synchronize` to discard.
    fn primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();

        let expr = match token.kind {
            TokenKind::False => Expr::Literal { value: LiteralValue::Bool(false) },
            TokenKind::True => Expr::Literal { value: LiteralValue::Bool(true) },
            TokenKind::Nil => Expr::Literal { value: LiteralValue::Nil },
            TokenKind::Number | TokenKind::String => {
                Expr::Literal { value: token.literal.clone().unwrap_or(LiteralValue::Nil) }
            },
            TokenKind::Identifier => Expr::Variable { name: token.clone() },
            TokenKind::LeftParen => {
                self.advance();
                let expression = self.expression()?;
                self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::Grouping { expression: Box::new(expression) });
            },
            _ => return Err(ParseError::at(token, ParseErrorKind::ExpectExpression)),
        };

        self.advance();
        Ok(expr)
    }
}
