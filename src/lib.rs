//! # lox
//!
//! lox is a tree-walking interpreter for a small subset of the Lox scripting
//! language, written in Rust. It scans, parses and executes programs made of
//! variables, blocks, `if`/`while`/`for` control flow, `print` and calls to
//! native functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Stmt,
    diagnostic::Reporter,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of a program as a tree. The tree is built by the parser
/// and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps the tokens needed to attribute runtime errors to a line.
/// - Prints trees for debugging.
pub mod ast;
/// Where syntax and runtime errors are sent.
///
/// The `Reporter` trait decouples the interpreter from how errors are shown,
/// so the command line prints them while tests collect them.
pub mod diagnostic;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during scanning, parsing
/// or evaluating code. Their `Display` output is the exact text shown to the
/// user.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and locations for context.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scopes and value
/// representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment
///   and value types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared by several phases.
pub mod util;

/// Scans and parses `source` into a program.
///
/// Every syntax error is sent to `reporter`; statements containing one are
/// left out of the result.
///
/// # Examples
/// ```
/// use lox::{diagnostic::CollectingReporter, parse_source};
///
/// let mut reporter = CollectingReporter::default();
/// let program = parse_source("var a = 1; print a;", &mut reporter);
///
/// assert_eq!(program.len(), 2);
/// assert!(reporter.syntax_errors.is_empty());
/// ```
pub fn parse_source(source: &str, reporter: &mut dyn Reporter) -> Vec<Stmt> {
    let tokens = scan(source, reporter);
    Parser::new(&tokens, reporter).parse()
}

/// Runs `source` on `interpreter`.
///
/// The program is scanned and parsed first. If that reported any syntax
/// error nothing is executed; errors from earlier runs on the same
/// `reporter` do not count. Otherwise the statements run until the end or
/// until the first runtime error, which is sent to `reporter`.
///
/// State persists in `interpreter` between calls, so a REPL can feed it one
/// line at a time.
///
/// # Examples
/// ```
/// use lox::{diagnostic::CollectingReporter, interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::with_output(std::io::sink());
/// let mut reporter = CollectingReporter::default();
///
/// run("var x = 1;", &mut interpreter, &mut reporter);
/// run("x = x + 1;", &mut interpreter, &mut reporter);
/// assert!(reporter.runtime_errors.is_empty());
///
/// run("print y;", &mut interpreter, &mut reporter);
/// assert_eq!(reporter.runtime_errors[0].to_string(), "Undefined variable 'y'.\n[line 1]");
///
/// run("print ;", &mut interpreter, &mut reporter);
/// run("print x;", &mut interpreter, &mut reporter);
/// assert_eq!(reporter.syntax_errors.len(), 1);
/// assert_eq!(reporter.runtime_errors.len(), 1);
/// ```
pub fn run(source: &str, interpreter: &mut Interpreter, reporter: &mut dyn Reporter) {
    reporter.reset_syntax_error();
    let program = parse_source(source, reporter);
    if reporter.had_syntax_error() {
        tracing::debug!("syntax errors reported, not executing");
        return;
    }

    interpreter.interpret(&program, reporter);
}
