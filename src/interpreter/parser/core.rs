use std::{iter::Peekable, slice::Iter};

use crate::{
    ast::Stmt,
    diagnostic::Reporter,
    error::{ParseError, ParseErrorKind},
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The largest number of arguments a call may pass.
pub const MAX_ARGUMENTS: usize = 255;

/// Stands in for the terminator when a caller hands over a token slice
/// without one.
static END_OF_INPUT: Token = Token { kind:    TokenKind::Eof,
                                     lexeme:  String::new(),
                                     literal: None,
                                     line:    0, };

/// A recursive-descent parser over one token sequence.
///
/// Each grammar rule is a method; rules are spread over the sibling modules
/// by precedence level. Hard syntax errors travel up as `Err(ParseError)` to
/// the nearest declaration, which reports them and resynchronizes. Soft
/// errors are reported on the spot and parsing carries on.
pub struct Parser<'t, 'r> {
    tokens:   Peekable<Iter<'t, Token>>,
    reporter: &'r mut dyn Reporter,
    errors:   usize,
}

impl<'t, 'r> Parser<'t, 'r> {
    /// Creates a parser over `tokens`, which should end with an EOF token.
    pub fn new(tokens: &'t [Token], reporter: &'r mut dyn Reporter) -> Self {
        Self { tokens: tokens.iter().peekable(),
               reporter,
               errors: 0 }
    }

    /// Parses a whole program.
    ///
    /// Never fails: every syntax error is reported and the statement that
    /// contained it is left out of the result.
    ///
    /// Grammar: `program := declaration* EOF`
    ///
    /// # Example
    /// ```
    /// use lox::{
    ///     diagnostic::CollectingReporter,
    ///     interpreter::{lexer::scan, parser::core::Parser},
    /// };
    ///
    /// let mut reporter = CollectingReporter::default();
    /// let tokens = scan("print 1; print ; print 2;", &mut reporter);
    /// let statements = Parser::new(&tokens, &mut reporter).parse();
    ///
    /// assert_eq!(statements.len(), 2);
    /// assert_eq!(reporter.syntax_errors.len(), 1);
    /// ```
    pub fn parse(mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        tracing::debug!(statements = statements.len(), errors = self.errors, "parsed program");
        statements
    }

    /// Returns the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> &'t Token {
        self.tokens.peek().copied().unwrap_or(&END_OF_INPUT)
    }

    pub(in crate::interpreter::parser) fn is_at_end(&mut self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(in crate::interpreter::parser) fn check(&mut self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes and returns the next token. At the end of input the EOF token
    /// is returned and stays in place.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> &'t Token {
        match self.tokens.next_if(|token| token.kind != TokenKind::Eof) {
            Some(token) => token,
            None => self.peek(),
        }
    }

    /// Consumes the next token if its kind is one of `kinds`.
    pub(in crate::interpreter::parser) fn matches(&mut self, kinds: &[TokenKind]) -> Option<&'t Token> {
        self.tokens.next_if(|token| kinds.contains(&token.kind))
    }

    /// Consumes a token of the given kind or fails with `message`.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  message: &'static str)
                                                  -> ParseResult<&'t Token> {
        match self.matches(&[kind]) {
            Some(token) => Ok(token),
            None => Err(ParseError::at(self.peek(), ParseErrorKind::Expected(message))),
        }
    }

    /// Sends an error to the reporter without interrupting the current rule.
    pub(in crate::interpreter::parser) fn report(&mut self, error: &ParseError) {
        self.errors += 1;
        self.reporter.syntax_error(error);
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// Stops just past a `;`, or in front of a keyword that begins a
    /// statement. The token that caused the error is always discarded, so
    /// recovery makes progress. Never moves past the end of input.
    pub(in crate::interpreter::parser) fn synchronize(&mut self) {
        while !self.is_at_end() {
            let token = self.advance();
            if token.kind == TokenKind::Semicolon || self.peek().kind.starts_statement() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Expr, LiteralValue, Stmt},
        diagnostic::CollectingReporter,
        interpreter::{lexer::scan, parser::core::Parser},
    };

    fn parse(source: &str) -> (Vec<Stmt>, CollectingReporter) {
        let mut reporter = CollectingReporter::default();
        let tokens = scan(source, &mut reporter);
        let statements = Parser::new(&tokens, &mut reporter).parse();
        (statements, reporter)
    }

    fn messages(reporter: &CollectingReporter) -> Vec<String> {
        reporter.syntax_errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn reports_each_broken_statement_once() {
        let (statements, reporter) = parse("var = 1; print (2;\nprint 3;");

        assert_eq!(statements.len(), 1);
        assert_eq!(messages(&reporter),
                   ["[line 1] Error at '=': Expect variable name.",
                    "[line 1] Error at ';': Expect ')' after expression."]);
    }

    #[test]
    fn recovery_stops_at_statement_keywords() {
        let (statements, reporter) = parse("1 + ; var a = 1;");

        assert_eq!(reporter.syntax_errors.len(), 1);
        assert!(matches!(statements.as_slice(), [Stmt::Var { .. }]));
    }

    #[test]
    fn missing_semicolon_is_reported_at_end() {
        let (statements, reporter) = parse("print 1");

        assert!(statements.is_empty());
        assert_eq!(messages(&reporter), ["[line 1] Error at end: Expect ';' after value."]);
    }

    #[test]
    fn tolerates_a_token_slice_without_terminator() {
        let mut reporter = CollectingReporter::default();
        let statements = Parser::new(&[], &mut reporter).parse();

        assert!(statements.is_empty());
        assert!(reporter.syntax_errors.is_empty());
    }

    #[test]
    fn literals_keep_their_values() {
        let (statements, _) = parse("print \"hi\";");

        assert_eq!(statements,
                   [Stmt::Print { expression: Expr::Literal { value:
                                                                  LiteralValue::String("hi".into()), }, }]);
    }
}
