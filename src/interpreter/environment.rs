use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::core::Value},
};

/// One lexical scope: a table of names plus a link to the enclosing scope.
///
/// Scopes are shared through `Rc<RefCell<_>>` so that a block can hold its
/// parent while the interpreter holds the block. The global scope has no
/// enclosing scope.
#[derive(Debug, Default)]
pub struct Environment {
    values:    HashMap<String, Value>,
    enclosing: Option<Rc<RefCell<Self>>>,
}

impl Environment {
    /// Creates an empty top-level scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope nested inside `enclosing`.
    #[must_use]
    pub fn new_enclosed(enclosing: Rc<RefCell<Self>>) -> Self {
        Self { values:    HashMap::new(),
               enclosing: Some(enclosing), }
    }

    /// Binds `name` in this scope, replacing any earlier binding here.
    ///
    /// Redeclaring a name in the same scope is allowed. Enclosing scopes are
    /// never touched, so a declaration in a block shadows an outer one.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks up `name`, searching from this scope outward.
    ///
    /// # Errors
    /// `Undefined variable 'name'.` on the token's line when no scope in the
    /// chain binds the name.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     environment::Environment,
    ///     lexer::{Token, TokenKind},
    ///     value::core::Value,
    /// };
    ///
    /// let mut globals = Environment::new();
    /// globals.define("x", Value::Number(1.0));
    ///
    /// let x = Token::new(TokenKind::Identifier, "x", 3);
    /// assert_eq!(globals.get(&x).unwrap(), Value::Number(1.0));
    ///
    /// let y = Token::new(TokenKind::Identifier, "y", 3);
    /// assert_eq!(globals.get(&y).unwrap_err().to_string(),
    ///            "Undefined variable 'y'.\n[line 3]");
    /// ```
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }

        let mut current = self.enclosing.clone();
        while let Some(scope) = current {
            let scope = scope.borrow();
            if let Some(value) = scope.values.get(&name.lexeme) {
                return Ok(value.clone());
            }
            current = scope.enclosing.clone();
        }

        Err(undefined(name))
    }

    /// Rebinds `name` in the nearest scope that already defines it.
    ///
    /// # Errors
    /// `Undefined variable 'name'.` when no scope in the chain binds the name.
    /// Assignment never creates a variable.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            return Ok(());
        }

        let mut current = self.enclosing.clone();
        while let Some(scope) = current {
            let mut scope = scope.borrow_mut();
            if let Some(slot) = scope.values.get_mut(&name.lexeme) {
                *slot = value;
                return Ok(());
            }
            current = scope.enclosing.clone();
        }

        Err(undefined(name))
    }
}

fn undefined(name: &Token) -> RuntimeError {
    RuntimeError::UndefinedVariable { name: name.lexeme.clone(),
                                      line: name.line, }
}
