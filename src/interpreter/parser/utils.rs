use crate::{
    ast::Expr,
    error::{ParseError, ParseErrorKind},
    interpreter::{
        lexer::TokenKind,
        parser::core::{MAX_ARGUMENTS, ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses a comma-separated argument list, stopping in front of `)`.
    ///
    /// An immediately encountered `)` produces an empty list. The closing
    /// parenthesis itself is left for the caller, which keeps its token.
    ///
    /// Passing more than [`MAX_ARGUMENTS`] arguments is reported once, at the
    /// first argument over the limit, and the remaining arguments are still
    /// collected.
    ///
    /// Grammar: `arguments := expression ("," expression)*`
    pub(in crate::interpreter::parser) fn arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut arguments = Vec::new();
        if self.check(TokenKind::RightParen) {
            return Ok(arguments);
        }

        loop {
            if arguments.len() == MAX_ARGUMENTS {
                let error = ParseError::at(self.peek(), ParseErrorKind::TooManyArguments);
                self.report(&error);
            }
            arguments.push(self.expression()?);

            if self.matches(&[TokenKind::Comma]).is_none() {
                break;
            }
        }

        Ok(arguments)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, Stmt},
        diagnostic::CollectingReporter,
        interpreter::{lexer::scan, parser::core::Parser},
    };

    fn call_with(count: usize) -> (Vec<Stmt>, CollectingReporter) {
        let arguments = vec!["a"; count].join(",");
        let mut reporter = CollectingReporter::default();
        let tokens = scan(&format!("f({arguments});"), &mut reporter);
        let statements = Parser::new(&tokens, &mut reporter).parse();
        (statements, reporter)
    }

    #[test]
    fn does_not_error_on_max_arguments() {
        let (_, reporter) = call_with(255);

        assert!(reporter.syntax_errors.is_empty());
    }

    #[test]
    fn errors_once_on_more_than_max_arguments_and_keeps_them() {
        let (statements, reporter) = call_with(300);

        assert_eq!(reporter.syntax_errors.len(), 1);
        assert_eq!(reporter.syntax_errors[0].to_string(),
                   "[line 1] Error at 'a': Can't have more than 255 arguments.");

        let [Stmt::Expression { expression: Expr::Call { arguments, .. } }] = statements.as_slice()
        else {
            panic!("expected a call statement, got {statements:?}");
        };
        assert_eq!(arguments.len(), 300);
    }

    #[test]
    fn empty_argument_list() {
        let (statements, reporter) = call_with(0);

        assert!(reporter.syntax_errors.is_empty());
        assert!(matches!(statements.as_slice(),
                         [Stmt::Expression { expression: Expr::Call { arguments, .. } }]
                         if arguments.is_empty()));
    }
}
