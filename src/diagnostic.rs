use crate::error::{ParseError, RuntimeError};

/// Receives the diagnostics produced while running a program.
///
/// The lexer and parser send syntax errors here as they recover from them,
/// and the interpreter sends the runtime error that ended an `interpret`
/// call. The sink owns the "had an error" flags; the core only reads them.
pub trait Reporter {
    /// Records and presents a syntax error.
    fn syntax_error(&mut self, error: &ParseError);
    /// Records and presents a runtime error.
    fn runtime_error(&mut self, error: &RuntimeError);
    /// Whether a syntax error has been reported since the last reset.
    fn had_syntax_error(&self) -> bool;
    /// Starts a new run: earlier syntax errors no longer count towards
    /// [`Reporter::had_syntax_error`].
    fn reset_syntax_error(&mut self);
    /// Whether a runtime error has been reported.
    fn had_runtime_error(&self) -> bool;
}

/// Writes diagnostics to standard error.
///
/// Used by the command line harness, which turns the flags into exit codes.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    had_syntax_error:  bool,
    had_runtime_error: bool,
}

impl Reporter for ConsoleReporter {
    fn syntax_error(&mut self, error: &ParseError) {
        eprintln!("{error}");
        self.had_syntax_error = true;
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{error}");
        self.had_runtime_error = true;
    }

    fn had_syntax_error(&self) -> bool {
        self.had_syntax_error
    }

    fn reset_syntax_error(&mut self) {
        self.had_syntax_error = false;
    }

    fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }
}

/// Keeps every diagnostic in memory instead of printing it.
///
/// Useful when embedding the interpreter or asserting on diagnostics. A
/// reset keeps the history; it only moves the point syntax errors are
/// counted from.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    /// Syntax errors, in the order they were reported.
    pub syntax_errors:  Vec<ParseError>,
    /// Runtime errors, in the order they were reported.
    pub runtime_errors: Vec<RuntimeError>,
    /// How many of `syntax_errors` predate the last reset.
    reset_at:           usize,
}

impl Reporter for CollectingReporter {
    fn syntax_error(&mut self, error: &ParseError) {
        self.syntax_errors.push(error.clone());
    }

    fn runtime_error(&mut self, error: &RuntimeError) {
        self.runtime_errors.push(error.clone());
    }

    fn had_syntax_error(&self) -> bool {
        self.syntax_errors.len() > self.reset_at
    }

    fn reset_syntax_error(&mut self) {
        self.reset_at = self.syntax_errors.len();
    }

    fn had_runtime_error(&self) -> bool {
        !self.runtime_errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CollectingReporter, Reporter};
    use crate::error::{ParseError, ParseErrorKind};

    #[test]
    fn reset_keeps_history_but_clears_flag() {
        let mut reporter = CollectingReporter::default();
        reporter.syntax_error(&ParseError::bare(ParseErrorKind::UnexpectedCharacter, 1));
        assert!(reporter.had_syntax_error());

        reporter.reset_syntax_error();
        assert!(!reporter.had_syntax_error());
        assert_eq!(reporter.syntax_errors.len(), 1);

        reporter.syntax_error(&ParseError::bare(ParseErrorKind::UnterminatedString, 2));
        assert!(reporter.had_syntax_error());
    }
}
