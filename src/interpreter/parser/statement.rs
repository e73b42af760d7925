use crate::{
    ast::{Expr, LiteralValue, Stmt},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_, '_> {
    /// Parses a declaration and recovers from any syntax error inside it.
    ///
    /// This is the boundary at which hard syntax errors stop: the error is
    /// reported, tokens are skipped up to the next statement boundary and
    /// `None` is returned so the broken statement leaves no trace in the
    /// program.
    ///
    /// Grammar: `declaration := var_declaration | statement`
    pub(in crate::interpreter::parser) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.matches(&[TokenKind::Var]).is_some() {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.report(&error);
                self.synchronize();
                None
            },
        }
    }

    /// Parses the rest of a variable declaration after `var`.
    ///
    /// Grammar: `var_declaration := "var" IDENTIFIER ("=" expression)? ";"`
    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?
                       .clone();

        let initializer = if self.matches(&[TokenKind::Equal]).is_some() {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenKind::Semicolon, "Expect ';' after variable declaration.")?;
        Ok(Stmt::Var { name, initializer })
    }

    /// Parses a single non-declaration statement.
    ///
    /// Grammar:
    /// ```text
    ///     statement := for_statement | if_statement | print_statement
    ///                | while_statement | block | expression_statement
    /// ```
    fn statement(&mut self) -> ParseResult<Stmt> {
        ensure_sufficient_stack(|| {
            if self.matches(&[TokenKind::For]).is_some() {
                self.for_statement()
            } else if self.matches(&[TokenKind::If]).is_some() {
                self.if_statement()
            } else if self.matches(&[TokenKind::Print]).is_some() {
                self.print_statement()
            } else if self.matches(&[TokenKind::While]).is_some() {
                self.while_statement()
            } else if self.matches(&[TokenKind::LeftBrace]).is_some() {
                Ok(Stmt::Block { statements: self.block()? })
            } else {
                self.expression_statement()
            }
        })
    }

    /// Parses a `for` loop and rewrites it into simpler statements.
    ///
    /// ```text
    ///     for (init; cond; incr) body
    /// ```
    /// becomes
    /// ```text
    ///     { init; while (cond) { body; incr; } }
    /// ```
    /// A missing condition becomes `true`. Without an increment the body is
    /// not wrapped, and without an initializer the loop is not wrapped.
    ///
    /// Grammar:
    /// ```text
    ///     for_statement := "for" "(" (var_declaration | expression_statement | ";")
    ///                      expression? ";" expression? ")" statement
    /// ```
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'for'.")?;

        let initializer = if self.matches(&[TokenKind::Semicolon]).is_some() {
            None
        } else if self.matches(&[TokenKind::Var]).is_some() {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semicolon, "Expect ';' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after for clauses.")?;

        let mut body = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block { statements: vec![body, Stmt::Expression { expression: increment }] };
        }

        let condition = condition.unwrap_or(Expr::Literal { value: LiteralValue::Bool(true) });
        body = Stmt::While { condition,
                             body: Box::new(body) };

        if let Some(initializer) = initializer {
            body = Stmt::Block { statements: vec![initializer, body] };
        }

        Ok(body)
    }

    /// Grammar: `if_statement := "if" "(" expression ")" statement ("else" statement)?`
    ///
    /// A dangling `else` binds to the nearest `if`.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.matches(&[TokenKind::Else]).is_some() {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If { condition,
                      then_branch,
                      else_branch })
    }

    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let expression = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print { expression })
    }

    /// Grammar: `while_statement := "while" "(" expression ")" statement`
    fn while_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    /// Parses the declarations of a block up to and including its `}`.
    ///
    /// Errors inside the block are recovered from declaration by declaration,
    /// so only a missing `}` fails the block itself.
    ///
    /// Grammar: `block := "{" declaration* "}"`
    fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expression = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression { expression })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, LiteralValue, Stmt},
        diagnostic::CollectingReporter,
        interpreter::{lexer::scan, parser::core::Parser},
    };

    fn parse(source: &str) -> Vec<Stmt> {
        let mut reporter = CollectingReporter::default();
        let tokens = scan(source, &mut reporter);
        let statements = Parser::new(&tokens, &mut reporter).parse();
        assert!(reporter.syntax_errors.is_empty(), "{:?}", reporter.syntax_errors);
        statements
    }

    #[test]
    fn for_loop_is_desugared_into_block_and_while() {
        let statements = parse("for (var i = 0; i < 3; i = i + 1) print i;");

        let [Stmt::Block { statements }] = statements.as_slice() else {
            panic!("expected a single block, got {statements:?}");
        };
        let [Stmt::Var { .. }, Stmt::While { body, .. }] = statements.as_slice() else {
            panic!("expected initializer and loop, got {statements:?}");
        };
        let Stmt::Block { statements: body } = body.as_ref() else {
            panic!("expected the body to be wrapped, got {body:?}");
        };
        assert!(matches!(body.as_slice(),
                         [Stmt::Print { .. }, Stmt::Expression { expression: Expr::Assign { .. } }]));
    }

    #[test]
    fn bare_for_loop_is_an_infinite_while() {
        let statements = parse("for (;;) print 1;");

        assert_eq!(statements.len(), 1);
        let Stmt::While { condition, body } = &statements[0] else {
            panic!("expected a while loop, got {statements:?}");
        };
        assert_eq!(condition, &Expr::Literal { value: LiteralValue::Bool(true) });
        assert!(matches!(body.as_ref(), Stmt::Print { .. }));
    }

    #[test]
    fn else_binds_to_nearest_if() {
        let statements = parse("if (true) if (false) print 1; else print 2;");

        let [Stmt::If { then_branch,
                        else_branch: None,
                        .. }] = statements.as_slice()
        else {
            panic!("outer if should not own the else: {statements:?}");
        };
        assert!(matches!(then_branch.as_ref(), Stmt::If { else_branch: Some(_), .. }));
    }

    #[test]
    fn var_without_initializer() {
        let statements = parse("var a;");

        assert!(matches!(statements.as_slice(), [Stmt::Var { initializer: None, .. }]));
    }
}
