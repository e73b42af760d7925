use crate::{
    ast::Expr,
    error::{ParseError, ParseErrorKind},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_, '_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, assignment, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := assignment`
    pub(in crate::interpreter::parser) fn expression(&mut self) -> ParseResult<Expr> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// Parses an assignment, which is right-associative.
    ///
    /// The target is parsed as an ordinary expression first; only once `=` is
    /// seen is it checked to be a plain variable. Any other target is
    /// reported as invalid, but parsing carries on and the right-hand side
    /// stands in for the whole assignment.
    ///
    /// Grammar: `assignment := IDENTIFIER "=" assignment | logic_or`
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logic_or()?;

        if let Some(equals) = self.matches(&[TokenKind::Equal]) {
            let value = self.assignment()?;

            if let Expr::Variable { name } = &expr {
                return Ok(Expr::Assign { name:  name.clone(),
                                         value: Box::new(value), });
            }

            self.report(&ParseError::at(equals, ParseErrorKind::InvalidAssignmentTarget));
            return Ok(value);
        }

        Ok(expr)
    }

    /// Grammar: `logic_or := logic_and ("or" logic_and)*`
    fn logic_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.logic_and()?;

        while let Some(operator) = self.matches(&[TokenKind::Or]) {
            let right = self.logic_and()?;
            left = Expr::Logical { left:     Box::new(left),
                                   operator: operator.clone(),
                                   right:    Box::new(right), };
        }

        Ok(left)
    }

    /// Grammar: `logic_and := equality ("and" equality)*`
    fn logic_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.equality()?;

        while let Some(operator) = self.matches(&[TokenKind::And]) {
            let right = self.equality()?;
            left = Expr::Logical { left:     Box::new(left),
                                   operator: operator.clone(),
                                   right:    Box::new(right), };
        }

        Ok(left)
    }

    /// Grammar: `equality := comparison (("!=" | "==") comparison)*`
    fn equality(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::BangEqual, TokenKind::EqualEqual], Self::comparison)
    }

    /// Grammar: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
    fn comparison(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Greater,
                                TokenKind::GreaterEqual,
                                TokenKind::Less,
                                TokenKind::LessEqual],
                              Self::term)
    }

    /// Grammar: `term := factor (("-" | "+") factor)*`
    fn term(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    /// Grammar: `factor := unary (("/" | "*") unary)*`
    fn factor(&mut self) -> ParseResult<Expr> {
        self.left_associative(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    /// Parses one left-associative precedence level.
    ///
    /// `operand` parses the next-higher level; `operators` are the tokens
    /// that combine operands at this level. `a - b - c` becomes
    /// `(a - b) - c`.
    fn left_associative(&mut self,
                        operators: &[TokenKind],
                        operand: fn(&mut Self) -> ParseResult<Expr>)
                        -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(operator) = self.matches(operators) {
            let right = operand(self)?;
            left = Expr::Binary { left:     Box::new(left),
                                  operator: operator.clone(),
                                  right:    Box::new(right), };
        }

        Ok(left)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, Stmt, printer::print_expr},
        diagnostic::CollectingReporter,
        interpreter::{lexer::scan, parser::core::Parser},
    };

    fn parse_expression(source: &str) -> (String, CollectingReporter) {
        let mut reporter = CollectingReporter::default();
        let tokens = scan(&format!("{source};"), &mut reporter);
        let statements = Parser::new(&tokens, &mut reporter).parse();

        let printed = match statements.as_slice() {
            [Stmt::Expression { expression }] => print_expr(expression),
            other => format!("{other:?}"),
        };
        (printed, reporter)
    }

    #[test]
    fn precedence_ladder() {
        let (printed, _) = parse_expression("1 + 2 * 3 - 4 / 2 == 5 > 1 or false and true");

        assert_eq!(printed,
                   "(or (== (- (+ 1 (* 2 3)) (/ 4 2)) (> 5 1)) (and false true))");
    }

    #[test]
    fn subtraction_is_left_associative() {
        let (printed, _) = parse_expression("a - b - c");

        assert_eq!(printed, "(- (- a b) c)");
    }

    #[test]
    fn assignment_is_right_associative() {
        let (printed, _) = parse_expression("a = b = 1");

        assert_eq!(printed, "(= a (= b 1))");
    }

    #[test]
    fn invalid_assignment_target_is_soft() {
        let (printed, reporter) = parse_expression("(a) = 3");

        assert_eq!(printed, "3");
        assert_eq!(reporter.syntax_errors.len(), 1);
        assert_eq!(reporter.syntax_errors[0].to_string(),
                   "[line 1] Error at '=': Invalid assignment target.");
    }

    #[test]
    fn grouping_is_kept_as_a_node() {
        let mut reporter = CollectingReporter::default();
        let tokens = scan("(1);", &mut reporter);
        let statements = Parser::new(&tokens, &mut reporter).parse();

        assert!(matches!(statements.as_slice(),
                         [Stmt::Expression { expression: Expr::Grouping { .. } }]));
    }
}
