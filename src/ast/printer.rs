use crate::{
    ast::{Expr, LiteralValue, Stmt},
    util::stack::ensure_sufficient_stack,
};

/// Renders an expression in fully parenthesized prefix form.
///
/// # Example
/// ```
/// use lox::{ast::printer::print_expr, diagnostic::CollectingReporter};
///
/// let mut reporter = CollectingReporter::default();
/// let program = lox::parse_source("-123 * (45.67);", &mut reporter);
///
/// let [lox::ast::Stmt::Expression { expression }] = program.as_slice() else {
///     panic!("expected one expression statement");
/// };
/// assert_eq!(print_expr(expression), "(* (- 123) (group 45.67))");
/// ```
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_prefix_expr(&mut out, expr);
    out
}

/// Renders a statement in the same prefix form as [`print_expr`].
///
/// `for` loops show up as the blocks and `while` loops they were rewritten
/// into.
#[must_use]
pub fn print_stmt(stmt: &Stmt) -> String {
    let mut out = String::new();
    write_prefix_stmt(&mut out, stmt);
    out
}

/// Renders an expression back into source text the parser accepts.
///
/// Every compound expression is wrapped in parentheses, so the text parses
/// back into a tree that evaluates the same way regardless of precedence.
/// Groupings add nothing on top of that, which makes rendering the reparsed
/// tree give the same text again.
///
/// # Example
/// ```
/// use lox::{ast::printer::to_source, diagnostic::CollectingReporter};
///
/// let mut reporter = CollectingReporter::default();
/// let program = lox::parse_source("1 + 2 * 3 == 7;", &mut reporter);
///
/// let [lox::ast::Stmt::Expression { expression }] = program.as_slice() else {
///     panic!("expected one expression statement");
/// };
/// assert_eq!(to_source(expression), "((1 + (2 * 3)) == 7)");
/// ```
#[must_use]
pub fn to_source(expr: &Expr) -> String {
    let mut out = String::new();
    write_source(&mut out, expr);
    out
}

fn write_prefix_expr(out: &mut String, expr: &Expr) {
    ensure_sufficient_stack(|| match expr {
        Expr::Literal { value } => write_literal(out, value),
        Expr::Grouping { expression } => parenthesize(out, "group", [expression.as_ref()]),
        Expr::Unary { operator, right } => parenthesize(out, &operator.lexeme, [right.as_ref()]),
        Expr::Binary { left,
                       operator,
                       right, }
        | Expr::Logical { left,
                          operator,
                          right, } => {
            parenthesize(out, &operator.lexeme, [left.as_ref(), right.as_ref()]);
        },
        Expr::Variable { name } => out.push_str(&name.lexeme),
        Expr::Assign { name, value } => {
            out.push_str("(= ");
            out.push_str(&name.lexeme);
            out.push(' ');
            write_prefix_expr(out, value);
            out.push(')');
        },
        Expr::Call { callee, arguments, .. } => {
            parenthesize(out, "call", std::iter::once(callee.as_ref()).chain(arguments));
        },
    });
}

fn write_prefix_stmt(out: &mut String, stmt: &Stmt) {
    ensure_sufficient_stack(|| match stmt {
        Stmt::Expression { expression } => parenthesize(out, ";", [expression]),
        Stmt::Print { expression } => parenthesize(out, "print", [expression]),
        Stmt::Var { name, initializer } => {
            out.push_str("(var ");
            out.push_str(&name.lexeme);
            if let Some(initializer) = initializer {
                out.push(' ');
                write_prefix_expr(out, initializer);
            }
            out.push(')');
        },
        Stmt::Block { statements } => {
            out.push_str("(block");
            for statement in statements {
                out.push(' ');
                write_prefix_stmt(out, statement);
            }
            out.push(')');
        },
        Stmt::If { condition,
                   then_branch,
                   else_branch, } => {
            out.push_str(if else_branch.is_some() { "(if-else " } else { "(if " });
            write_prefix_expr(out, condition);
            out.push(' ');
            write_prefix_stmt(out, then_branch);
            if let Some(else_branch) = else_branch {
                out.push(' ');
                write_prefix_stmt(out, else_branch);
            }
            out.push(')');
        },
        Stmt::While { condition, body } => {
            out.push_str("(while ");
            write_prefix_expr(out, condition);
            out.push(' ');
            write_prefix_stmt(out, body);
            out.push(')');
        },
    });
}

fn write_source(out: &mut String, expr: &Expr) {
    ensure_sufficient_stack(|| match expr {
        Expr::Literal { value: LiteralValue::String(s) } => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        },
        Expr::Literal { value } => write_literal(out, value),
        Expr::Grouping { expression } => write_source(out, expression),
        Expr::Unary { operator, right } => {
            out.push('(');
            out.push_str(&operator.lexeme);
            write_source(out, right);
            out.push(')');
        },
        Expr::Binary { left,
                       operator,
                       right, }
        | Expr::Logical { left,
                          operator,
                          right, } => {
            out.push('(');
            write_source(out, left);
            out.push(' ');
            out.push_str(&operator.lexeme);
            out.push(' ');
            write_source(out, right);
            out.push(')');
        },
        Expr::Variable { name } => out.push_str(&name.lexeme),
        Expr::Assign { name, value } => {
            out.push('(');
            out.push_str(&name.lexeme);
            out.push_str(" = ");
            write_source(out, value);
            out.push(')');
        },
        Expr::Call { callee, arguments, .. } => {
            write_source(out, callee);
            out.push('(');
            for (index, argument) in arguments.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                write_source(out, argument);
            }
            out.push(')');
        },
    });
}

fn write_literal(out: &mut String, value: &LiteralValue) {
    match value {
        LiteralValue::Nil => out.push_str("nil"),
        LiteralValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        LiteralValue::Number(n) => out.push_str(&n.to_string()),
        LiteralValue::String(s) => out.push_str(s),
    }
}

/// Writes `(name e1 e2 ...)` with each expression in prefix form.
fn parenthesize<'a>(out: &mut String, name: &str, exprs: impl IntoIterator<Item = &'a Expr>) {
    out.push('(');
    out.push_str(name);
    for expr in exprs {
        out.push(' ');
        write_prefix_expr(out, expr);
    }
    out.push(')');
}
