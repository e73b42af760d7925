use std::mem;

use crate::interpreter::lexer::Token;

/// Prints expressions and statements for debugging and round-tripping.
///
/// Two renderings are offered: a fully parenthesized prefix form used by the
/// `--print-ast` flag, and an infix source form that the parser accepts again.
pub mod printer;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code. It is carried both by literal tokens produced by the lexer and by
/// [`Expr::Literal`] nodes built by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The absence of a value, written `nil`.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A 64-bit floating-point literal. Integers are represented as well.
    Number(f64),
    /// A string literal, without its surrounding quotes.
    String(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant models a distinct syntactic construct. Operator and name
/// tokens are kept inside the nodes only so that runtime errors can report
/// the line they occurred on. Nodes are never mutated after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or nil).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A parenthesized expression.
    Grouping {
        /// The expression between the parentheses.
        expression: Box<Self>,
    },
    /// A prefix operation: `!x` or `-x`.
    Unary {
        /// The `!` or `-` token.
        operator: Token,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A short-circuiting `and` / `or` operation.
    Logical {
        /// Left operand, always evaluated.
        left:     Box<Self>,
        /// The `and` or `or` token.
        operator: Token,
        /// Right operand, evaluated only when the operator requires it.
        right:    Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
    /// Assignment to an existing variable. Yields the assigned value.
    Assign {
        /// The identifier token of the target.
        name:  Token,
        /// The expression producing the new value.
        value: Box<Self>,
    },
    /// A call expression such as `clock()`.
    Call {
        /// Expression producing the value being called.
        callee:    Box<Self>,
        /// The closing parenthesis, used to locate call-site errors.
        paren:     Token,
        /// Arguments, in source order.
        arguments: Vec<Self>,
    },
}

/// An AST node representing a statement.
///
/// A program is an ordered sequence of statements. `for` loops do not appear
/// here: the parser rewrites them into [`Stmt::While`] nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expression: Expr,
    },
    /// `print <expression>;`
    Print {
        /// The expression whose value is printed.
        expression: Expr,
    },
    /// `var <name> (= <initializer>)?;`
    Var {
        /// The identifier token being declared.
        name:        Token,
        /// Optional initializer; the variable is `nil` without one.
        initializer: Option<Expr>,
    },
    /// `{ ... }` introducing a new lexical scope.
    Block {
        /// Statements executed in the new scope.
        statements: Vec<Self>,
    },
    /// `if (<condition>) <then> (else <else>)?`
    If {
        /// The condition, tested for truthiness.
        condition:   Expr,
        /// Statement executed when the condition is truthy.
        then_branch: Box<Self>,
        /// Statement executed otherwise, if present.
        else_branch: Option<Box<Self>>,
    },
    /// `while (<condition>) <body>`
    While {
        /// The loop condition, re-evaluated before each iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
}

impl Expr {
    /// Returns the source line most closely associated with the expression.
    ///
    /// Literals and groupings carry no token of their own, so the line is
    /// taken from the nearest nested token, or `None` for a bare literal.
    #[must_use]
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::Literal { .. } => None,
            Self::Grouping { expression } => expression.line_number(),
            Self::Unary { operator, .. }
            | Self::Binary { operator, .. }
            | Self::Logical { operator, .. } => Some(operator.line),
            Self::Variable { name } | Self::Assign { name, .. } => Some(name.line),
            Self::Call { paren, .. } => Some(paren.line),
        }
    }
}

impl Expr {
    /// A childless node, left behind when a child is moved out.
    const HOLLOW: Self = Self::Literal { value: LiteralValue::Nil };

    /// Moves every direct subexpression into `pending`.
    fn take_children(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => {},
            Self::Grouping { expression: child }
            | Self::Unary { right: child, .. }
            | Self::Assign { value: child, .. } => {
                pending.push(mem::replace(&mut **child, Self::HOLLOW));
            },
            Self::Binary { left, right, .. } | Self::Logical { left, right, .. } => {
                pending.push(mem::replace(&mut **left, Self::HOLLOW));
                pending.push(mem::replace(&mut **right, Self::HOLLOW));
            },
            Self::Call { callee, arguments, .. } => {
                pending.push(mem::replace(&mut **callee, Self::HOLLOW));
                pending.append(arguments);
            },
        }
    }
}

/// Trees can be nested far deeper than the native stack allows recursion, so
/// they are dismantled with an explicit work list.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);

        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

impl Stmt {
    /// A childless statement, left behind when a child is moved out.
    const HOLLOW: Self = Self::Block { statements: Vec::new() };

    /// Moves every direct substatement into `pending`. Expressions take care
    /// of themselves.
    fn take_children(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::Expression { .. } | Self::Print { .. } | Self::Var { .. } => {},
            Self::Block { statements } => pending.append(statements),
            Self::If { then_branch,
                       else_branch, .. } => {
                pending.push(mem::replace(&mut **then_branch, Self::HOLLOW));
                if let Some(else_branch) = else_branch {
                    pending.push(mem::replace(&mut **else_branch, Self::HOLLOW));
                }
            },
            Self::While { body, .. } => pending.push(mem::replace(&mut **body, Self::HOLLOW)),
        }
    }
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);

        while let Some(mut stmt) = pending.pop() {
            stmt.take_children(&mut pending);
        }
    }
}
