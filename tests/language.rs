use std::{
    cell::RefCell,
    fs,
    io::{self, Write},
    path::Path,
    rc::Rc,
};

use lox::{
    diagnostic::CollectingReporter,
    error::RuntimeError,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
    run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// An output sink the test keeps a handle to after giving it away.
#[derive(Clone, Default)]
struct Captured(Rc<RefCell<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct Outcome {
    output:   String,
    reporter: CollectingReporter,
}

impl Outcome {
    fn syntax_errors(&self) -> Vec<String> {
        self.reporter.syntax_errors.iter().map(ToString::to_string).collect()
    }

    fn runtime_errors(&self) -> Vec<String> {
        self.reporter.runtime_errors.iter().map(ToString::to_string).collect()
    }
}

fn execute(source: &str) -> Outcome {
    let output = Captured::default();
    let mut interpreter = Interpreter::with_output(output.clone());
    let mut reporter = CollectingReporter::default();

    run(source, &mut interpreter, &mut reporter);

    Outcome { output: output.text(),
              reporter }
}

fn assert_output(source: &str, expected: &str) {
    let outcome = execute(source);
    assert!(outcome.reporter.syntax_errors.is_empty(), "{:?}", outcome.syntax_errors());
    assert!(outcome.reporter.runtime_errors.is_empty(), "{:?}", outcome.runtime_errors());
    assert_eq!(outcome.output, expected);
}

fn assert_runtime_error(source: &str, expected: &str) {
    let outcome = execute(source);
    assert!(outcome.reporter.syntax_errors.is_empty(), "{:?}", outcome.syntax_errors());
    assert_eq!(outcome.runtime_errors(), [expected]);
}

#[test]
fn whole_numbers_print_without_fraction() {
    assert_output("print 4.0; print 4.5; print 2 * 2;", "4\n4.5\n4\n");
}

#[test]
fn block_shadowing_leaves_outer_variable() {
    assert_output("var x = 1; { var x = 2; print x; } print x;", "2\n1\n");
}

#[test]
fn assignment_without_declaration_fails_on_its_line() {
    assert_runtime_error("print 0;\n\ny = 1;", "Undefined variable 'y'.\n[line 3]");
}

#[test]
fn logical_operators_skip_right_operand() {
    assert_output("print false and (1/0); print true or (1/0);", "false\ntrue\n");
    assert_output("print false and missing; print true or missing;", "false\ntrue\n");
}

#[test]
fn or_yields_truthiness_of_left_operand() {
    assert_output("print nil or 1; print \"s\" or nil;", "false\ntrue\n");
}

#[test]
fn and_yields_truthiness_of_right_operand() {
    assert_output("print 1 and 2; print 1 and false; print nil and 2;", "true\nfalse\nfalse\n");
}

#[test]
fn for_loop_counts() {
    assert_output("for (var i = 0; i < 3; i = i + 1) print i;", "0\n1\n2\n");
}

#[test]
fn call_errors() {
    assert_runtime_error("clock(1);", "Expected 0 arguments but got 1.\n[line 1]");
    assert_runtime_error("var x = 1; x();", "Can only call functions and classes.\n[line 1]");
    assert_runtime_error("nil();", "Can only call functions and classes.\n[line 1]");
}

#[test]
fn operand_type_errors() {
    assert_runtime_error("-true;", "Operand must be a number.\n[line 1]");
    assert_runtime_error("1 * \"2\";", "Operands must be numbers.\n[line 1]");
    assert_runtime_error("nil + nil;", "Operands must be of the same type.\n[line 1]");
}

#[test]
fn two_malformed_statements_give_two_syntax_errors() {
    let outcome = execute("print 1 +;\nvar 2 = 3;\nprint \"ok\";");

    assert_eq!(outcome.syntax_errors(),
               ["[line 1] Error at ';': Expect expression.",
                "[line 2] Error at '2': Expect variable name."]);
    assert_eq!(outcome.output, "");
    assert!(outcome.reporter.runtime_errors.is_empty());
}

#[test]
fn runtime_error_keeps_earlier_output_and_stops() {
    let outcome = execute("print 1; print -nil; print 2;");

    assert_eq!(outcome.output, "1\n");
    assert_eq!(outcome.runtime_errors(), ["Operand must be a number.\n[line 1]"]);
}

#[test]
fn scope_is_restored_after_error_inside_block() {
    let output = Captured::default();
    let mut interpreter = Interpreter::with_output(output.clone());
    let mut reporter = CollectingReporter::default();

    run("var a = \"global\"; { var a = \"block\"; missing; }", &mut interpreter, &mut reporter);
    assert_eq!(reporter.runtime_errors.len(), 1);

    run("print a;", &mut interpreter, &mut reporter);
    assert_eq!(output.text(), "global\n");
    assert_eq!(reporter.runtime_errors.len(), 1);
}

#[test]
fn state_persists_across_runs() {
    let output = Captured::default();
    let mut interpreter = Interpreter::with_output(output.clone());
    let mut reporter = CollectingReporter::default();

    run("var counter = 1;", &mut interpreter, &mut reporter);
    run("counter = counter + 1;", &mut interpreter, &mut reporter);
    run("print counter;", &mut interpreter, &mut reporter);

    assert_eq!(output.text(), "2\n");
}

#[test]
fn syntax_error_does_not_block_later_runs() {
    let output = Captured::default();
    let mut interpreter = Interpreter::with_output(output.clone());
    let mut reporter = CollectingReporter::default();

    run("print ;", &mut interpreter, &mut reporter);
    run("print 42;", &mut interpreter, &mut reporter);

    assert_eq!(output.text(), "42\n");
    assert_eq!(reporter.syntax_errors.len(), 1);
}

/// Accepts every write but cannot flush.
struct UnflushableOutput;

impl Write for UnflushableOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("disk full"))
    }
}

#[test]
fn failed_flush_is_a_runtime_error() {
    let mut interpreter = Interpreter::with_output(UnflushableOutput);
    let mut reporter = CollectingReporter::default();

    run("print 1;", &mut interpreter, &mut reporter);

    let errors = reporter.runtime_errors.iter().map(ToString::to_string).collect::<Vec<_>>();
    assert_eq!(errors, ["Could not write output: disk full\n[line 0]"]);
}

#[test]
fn failed_flush_does_not_hide_earlier_runtime_error() {
    let mut interpreter = Interpreter::with_output(UnflushableOutput);
    let mut reporter = CollectingReporter::default();

    run("print -nil;", &mut interpreter, &mut reporter);

    assert_eq!(reporter.runtime_errors.len(), 1);
    assert!(matches!(reporter.runtime_errors[0], RuntimeError::OperandMustBeNumber { line: 1 }));
}

#[test]
fn embedders_can_define_globals() {
    let output = Captured::default();
    let mut interpreter = Interpreter::with_output(output.clone());
    let mut reporter = CollectingReporter::default();

    interpreter.define_global("greeting", Value::from("hello"));
    run("print greeting + \", world\";", &mut interpreter, &mut reporter);

    assert_eq!(output.text(), "hello, world\n");
}

#[test]
fn deeply_nested_expressions_do_not_overflow() {
    let depth = 2_000;
    let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));

    assert_output(&source, "1\n");
}

#[test]
fn deeply_nested_blocks_do_not_overflow() {
    let depth = 1_000;
    let source = format!("{}print \"deep\";{}", "{".repeat(depth), "}".repeat(depth));

    assert_output(&source, "deep\n");
}

#[test]
fn long_operator_chains_do_not_overflow() {
    let terms = 300_000;
    let source = format!("print 1{};", " + 1".repeat(terms));

    assert_output(&source, &format!("{}\n", terms + 1));
}

#[test]
fn runtime_errors_carry_their_line() {
    let outcome = execute("var a = 1;\n\n\nprint a - nil;");

    let [error] = outcome.reporter.runtime_errors.as_slice() else {
        panic!("expected one runtime error, got {:?}", outcome.runtime_errors());
    };
    assert!(matches!(error, RuntimeError::OperandsMustBeNumbers { line: 4 }));
}

/// What a script under `tests/scripts` says should happen when it runs.
#[derive(Default)]
struct Expectations {
    output:        Vec<String>,
    syntax_errors: Vec<String>,
    runtime_error: Option<(String, usize)>,
}

fn read_expectations(source: &str) -> Expectations {
    let mut expected = Expectations::default();

    for (index, line) in source.lines().enumerate() {
        if let Some((_, text)) = line.split_once("// expect: ") {
            expected.output.push(text.to_string());
        } else if let Some((_, text)) = line.split_once("// expect error: ") {
            expected.syntax_errors.push(text.to_string());
        } else if let Some((_, text)) = line.split_once("// expect runtime error: ") {
            expected.runtime_error = Some((text.to_string(), index + 1));
        }
    }

    expected
}

fn check_script(path: &Path) {
    let source =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    let expected = read_expectations(&source);
    let outcome = execute(&source);

    let output = outcome.output.lines().map(str::to_string).collect::<Vec<_>>();
    assert_eq!(output, expected.output, "output of {path:?}");
    assert_eq!(outcome.syntax_errors(), expected.syntax_errors, "syntax errors of {path:?}");

    match (&expected.runtime_error, outcome.reporter.runtime_errors.as_slice()) {
        (None, []) => {},
        (Some((message, line)), [error]) => {
            assert_eq!(error.to_string(),
                       format!("{message}\n[line {line}]"),
                       "runtime error of {path:?}");
        },
        (expected, actual) => panic!("{path:?}: expected runtime error {expected:?}, got {actual:?}"),
    }
}

#[test]
fn scripts_behave_as_annotated() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").sort_by_file_name()
                                     .into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        count += 1;
        check_script(entry.path());
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
