/// The evaluator module executes the syntax tree.
///
/// The evaluator walks statements in order, evaluates expressions to values,
/// manages the chain of scopes and calls functions. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every expression and statement node.
/// - Restores the active scope whenever a block is left.
/// - Reports the first runtime error of a run and stops that run.
pub mod evaluator;
/// Lexical scopes and variable bindings.
///
/// An `Environment` maps names to values and links to its enclosing scope.
/// Lookups and assignments walk outward through the chain.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   line.
/// - Handles numeric and string literals, identifiers and keywords.
/// - Reports lexical errors and keeps scanning.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements of a program. It recovers from syntax errors so that one run
/// reports as many of them as possible.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Rewrites `for` loops into blocks and `while` loops.
/// - Reports syntax errors with their location and resynchronizes.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, equality and the display form used by `print`.
pub mod value;
