use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use lox::{
    ast::printer::print_stmt,
    diagnostic::{ConsoleReporter, Reporter},
    interpreter::evaluator::core::Interpreter,
};

/// Exit status for a malformed command line.
const EXIT_USAGE: i32 = 64;
/// Exit status when the script contains a syntax error.
const EXIT_DATA_ERROR: i32 = 65;
/// Exit status when the script cannot be read.
const EXIT_NO_INPUT: i32 = 66;
/// Exit status when the script fails at runtime.
const EXIT_SOFTWARE: i32 = 70;

/// lox runs scripts written in a small subset of the Lox language, or starts
/// an interactive prompt when no script is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print each parsed statement in prefix form before running it.
    #[arg(long)]
    print_ast: bool,

    /// The script to run. Without one, lines are read from standard input.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|error| {
                                    let code = if error.use_stderr() { EXIT_USAGE } else { 0 };
                                    // Help and version requests are not usage errors.
                                    if let Err(io_error) = error.print() {
                                        eprintln!("Could not print usage: {io_error}.");
                                    }
                                    process::exit(code);
                                });

    init_tracing();

    match &args.script {
        Some(path) => run_file(path, args.print_ast),
        None => run_prompt(args.print_ast),
    }
}

/// Installs a log subscriber, but only when `RUST_LOG` asks for one, so that
/// program output is never mixed with logs by default.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn run_file(path: &Path, print_ast: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|error| {
                                             eprintln!("Could not read '{}': {error}.",
                                                       path.display());
                                             process::exit(EXIT_NO_INPUT);
                                         });

    let mut interpreter = Interpreter::new();
    let mut reporter = ConsoleReporter::default();
    execute(&source, &mut interpreter, &mut reporter, print_ast);

    if reporter.had_syntax_error() {
        process::exit(EXIT_DATA_ERROR);
    }
    if reporter.had_runtime_error() {
        process::exit(EXIT_SOFTWARE);
    }
}

fn run_prompt(print_ast: bool) {
    let mut interpreter = Interpreter::new();
    let mut reporter = ConsoleReporter::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };

        execute(&line, &mut interpreter, &mut reporter, print_ast);
    }
}

fn execute(source: &str,
           interpreter: &mut Interpreter,
           reporter: &mut ConsoleReporter,
           print_ast: bool) {
    if !print_ast {
        lox::run(source, interpreter, reporter);
        return;
    }

    reporter.reset_syntax_error();
    let program = lox::parse_source(source, reporter);
    for statement in &program {
        println!("{}", print_stmt(statement));
    }
    if !reporter.had_syntax_error() {
        interpreter.interpret(&program, reporter);
    }
}
