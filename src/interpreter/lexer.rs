use logos::Logos;

use crate::{
    ast::LiteralValue,
    diagnostic::Reporter,
    error::{ParseError, ParseErrorKind},
};

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace, comments and newlines are recognised here but skipped; they
/// never reach the parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Identifier tokens; variable names such as `x` or `clock`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// String literal tokens, such as `"hello"`. May span several lines.
    #[regex(r#""[^"]*""#, allow_greedy = true)]
    String,
    /// A string literal missing its closing quote.
    #[regex(r#""[^"]*"#, allow_greedy = true)]
    UnterminatedString,
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `for`
    #[token("for")]
    For,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks advance the line counter and are otherwise ignored.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Never produced by logos itself; appended by [`scan`].
    Eof,
}

impl TokenKind {
    /// Returns `true` for keywords that begin a statement or declaration.
    ///
    /// The parser stops discarding tokens at these when recovering from a
    /// syntax error.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// A token handed from the lexer to the parser.
///
/// Tokens are immutable once produced. The parser stores copies of operator
/// and name tokens inside AST nodes so that the evaluator can attribute
/// runtime errors to a source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The exact source text of the token. Empty for [`TokenKind::Eof`].
    pub lexeme:  String,
    /// The literal value of number and string tokens.
    pub literal: Option<LiteralValue>,
    /// The source line the token ends on.
    pub line:    usize,
}

impl Token {
    /// Creates a token without a literal value.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: None,
               line }
    }
}

/// Converts source text into a token sequence terminated by one EOF token.
///
/// Lexical errors (unexpected characters, unterminated strings) are sent to
/// `reporter` and the offending text is dropped, so scanning always runs to
/// the end of the input.
///
/// # Example
/// ```
/// use lox::{
///     diagnostic::CollectingReporter,
///     interpreter::lexer::{TokenKind, scan},
/// };
///
/// let mut reporter = CollectingReporter::default();
/// let tokens = scan("var answer = 42;", &mut reporter);
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
pub fn scan(source: &str, reporter: &mut dyn Reporter) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let lexeme = lexer.slice();
        let Ok(kind) = result else {
            reporter.syntax_error(&ParseError::bare(ParseErrorKind::UnexpectedCharacter,
                                                    lexer.extras.line));
            continue;
        };

        if matches!(kind, TokenKind::String | TokenKind::UnterminatedString) {
            lexer.extras.line += lexeme.matches('\n').count();
        }

        let line = lexer.extras.line;
        let literal = match kind {
            TokenKind::UnterminatedString => {
                reporter.syntax_error(&ParseError::bare(ParseErrorKind::UnterminatedString, line));
                continue;
            },
            TokenKind::String => Some(LiteralValue::String(lexeme[1..lexeme.len() - 1].to_string())),
            TokenKind::Number => lexeme.parse().ok().map(LiteralValue::Number),
            _ => None,
        };

        tokens.push(Token { kind,
                            lexeme: lexeme.to_string(),
                            literal,
                            line });
    }

    tokens.push(Token::new(TokenKind::Eof, "", lexer.extras.line));
    tracing::debug!(count = tokens.len(), "scanned tokens");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::CollectingReporter;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut reporter = CollectingReporter::default();
        scan(source, &mut reporter).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_win_over_identifiers_only_on_exact_match() {
        assert_eq!(kinds("or orchid"),
                   [TokenKind::Or, TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn ignores_comments_and_counts_lines() {
        let mut reporter = CollectingReporter::default();
        let tokens = scan("// header\n1 +\n  2", &mut reporter);

        assert_eq!(tokens.iter().map(|t| t.line).collect::<Vec<_>>(), [2, 2, 3, 3]);
        assert!(reporter.syntax_errors.is_empty());
    }

    #[test]
    fn string_literals_drop_quotes_and_advance_lines() {
        let mut reporter = CollectingReporter::default();
        let tokens = scan("\"a\nb\" x", &mut reporter);

        assert_eq!(tokens[0].literal, Some(LiteralValue::String("a\nb".into())));
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn number_literals_are_doubles() {
        let mut reporter = CollectingReporter::default();
        let tokens = scan("12 3.5", &mut reporter);

        assert_eq!(tokens[0].literal, Some(LiteralValue::Number(12.0)));
        assert_eq!(tokens[1].literal, Some(LiteralValue::Number(3.5)));
    }

    #[test]
    fn reports_unexpected_characters_and_keeps_going() {
        let mut reporter = CollectingReporter::default();
        let tokens = scan("1 @ 2", &mut reporter);

        assert_eq!(tokens.len(), 3);
        assert_eq!(reporter.syntax_errors.len(), 1);
        assert_eq!(reporter.syntax_errors[0].to_string(),
                   "[line 1] Error: Unexpected character.");
    }

    #[test]
    fn reports_unterminated_strings() {
        let mut reporter = CollectingReporter::default();
        let tokens = scan("\"open", &mut reporter);

        assert_eq!(tokens.len(), 1);
        assert_eq!(reporter.syntax_errors[0].to_string(),
                   "[line 1] Error: Unterminated string.");
    }
}
