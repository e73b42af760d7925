use std::fmt;

use thiserror::Error;

use crate::interpreter::lexer::{Token, TokenKind};

/// Where on its line a syntax error was detected.
///
/// Rendered as the `<where>` part of `[line L] Error<where>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// No token to point at; used by the lexer.
    Line,
    /// The error was detected at the end of input.
    AtEnd,
    /// The error was detected at the token with this lexeme.
    At(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => Ok(()),
            Self::AtEnd => write!(f, " at end"),
            Self::At(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A character that does not start any token.
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    /// A string literal that reaches the end of input without closing.
    #[error("Unterminated string.")]
    UnterminatedString,
    /// No expression could be parsed at this position.
    #[error("Expect expression.")]
    ExpectExpression,
    /// A specific token was required; the payload is the full message, such
    /// as `Expect ';' after value.`.
    #[error("{0}")]
    Expected(&'static str),
    /// The left side of `=` is not a variable.
    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget,
    /// A call with more than 255 arguments.
    #[error("Can't have more than {max} arguments.", max = crate::interpreter::parser::core::MAX_ARGUMENTS)]
    TooManyArguments,
}

/// A syntax error together with its source position.
///
/// The `Display` output is the exact report line:
/// `[line L] Error<where>: <message>`.
///
/// # Example
/// ```
/// use lox::error::{Location, ParseError, ParseErrorKind};
///
/// let error = ParseError { kind:     ParseErrorKind::ExpectExpression,
///                          line:     3,
///                          location: Location::At("+".into()), };
///
/// assert_eq!(error.to_string(), "[line 3] Error at '+': Expect expression.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[line {line}] Error{location}: {kind}")]
pub struct ParseError {
    /// What went wrong.
    pub kind:     ParseErrorKind,
    /// The source line where the error occurred.
    pub line:     usize,
    /// Where on the line the error was detected.
    pub location: Location,
}

impl ParseError {
    /// Creates an error located at `token`.
    #[must_use]
    pub fn at(token: &Token, kind: ParseErrorKind) -> Self {
        let location = if token.kind == TokenKind::Eof {
            Location::AtEnd
        } else {
            Location::At(token.lexeme.clone())
        };

        Self { kind,
               line: token.line,
               location }
    }

    /// Creates an error that only knows its line.
    #[must_use]
    pub const fn bare(kind: ParseErrorKind, line: usize) -> Self {
        Self { kind,
               line,
               location: Location::Line }
    }
}
