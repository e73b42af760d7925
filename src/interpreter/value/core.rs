use std::{fmt, ptr, rc::Rc};

use crate::{ast::LiteralValue, interpreter::evaluator::function::core::Callable};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a variable can hold, an expression can yield
/// or `print` can display.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value. Uninitialized variables hold `nil`.
    Nil,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A double precision floating-point number. There is no integer type.
    Number(f64),
    /// An immutable string. Concatenation always allocates a new one.
    String(Rc<str>),
    /// Anything that can be called with `(...)`.
    Callable(Rc<dyn Callable>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::from(s.as_str()),
        }
    }
}

impl Value {
    /// Returns whether the value counts as true in a condition.
    ///
    /// Only `nil` and `false` are falsy. `0` and `""` are truthy.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Returns the number inside a `Value::Number`, or `None` for any other
    /// variant. No coercion is attempted.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Structural equality without coercion between variants.
///
/// `nil` equals only `nil`. Numbers compare by value, except that `NaN`
/// equals `NaN` so that a value is always equal to itself. Callables are
/// equal only to themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Callable(a), Self::Callable(b)) => ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool(b) => write!(f, "{b}"),
            // `f64` already drops the fractional part of whole numbers.
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Callable(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::ast::LiteralValue;

    #[test]
    fn whole_numbers_print_without_fraction() {
        assert_eq!(Value::Number(4.0).to_string(), "4");
        assert_eq!(Value::Number(4.5).to_string(), "4.5");
        assert_eq!(Value::Number(-0.25).to_string(), "-0.25");
        assert_eq!(Value::Number(1e21).to_string(), "1000000000000000000000");
    }

    #[test]
    fn other_variants_print_naturally() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from("raw text").to_string(), "raw text");
    }

    #[test]
    fn equality_never_coerces() {
        assert_eq!(Value::Nil, Value::Nil);
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_ne!(Value::Number(0.0), Value::Bool(false));
        assert_ne!(Value::from("1"), Value::Number(1.0));
        assert_eq!(Value::from("ab"), Value::from("ab"));
    }

    #[test]
    fn nan_equals_itself() {
        assert_eq!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert_ne!(Value::Number(f64::NAN), Value::Number(1.0));
    }

    #[test]
    fn literals_convert() {
        assert_eq!(Value::from(&LiteralValue::Number(2.0)), Value::Number(2.0));
        assert_eq!(Value::from(&LiteralValue::from("s")), Value::from("s"));
        assert_eq!(Value::from(&LiteralValue::Nil), Value::Nil);
    }
}
