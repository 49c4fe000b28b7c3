//! Function values.
//!
//! A [`Function`] is a shared, immutable callable stored inside a
//! [`Value`]. Two function values are equal only when they are the same
//! allocation, which is what lets a pattern compare a function by identity.

use std::fmt;
use std::sync::Arc;

use super::Value;

type Callable = dyn Fn(&Value) -> Value + Send + Sync;

/// A callable value with identity semantics.
///
/// Cloning a `Function` shares the underlying closure; clones compare equal
/// to each other and to nothing else.
///
/// # Examples
///
/// ```rust
/// use monadic_match::value::{Function, Value};
///
/// let double = Function::new(|value| match value {
///     Value::Number(n) => Value::Number(n * 2.0),
///     other => other.clone(),
/// });
/// assert_eq!(double.call(&Value::from(21)), Value::from(42));
///
/// let same = double.clone();
/// let lookalike = Function::new(|value| value.clone());
/// assert_eq!(double, same);
/// assert_ne!(double, lookalike);
/// ```
#[derive(Clone)]
pub struct Function(Arc<Callable>);

impl Function {
    /// Creates a function value from a closure.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(function))
    }

    /// Creates a function value that returns a boolean.
    ///
    /// This is the usual shape for predicate conditions.
    pub fn predicate<P>(predicate: P) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(move |value| Value::Bool(predicate(value)))
    }

    /// Invokes the function.
    #[inline]
    pub fn call(&self, argument: &Value) -> Value {
        (self.0)(argument)
    }

    /// Invokes the function and reports whether the result is truthy.
    #[inline]
    pub fn test(&self, argument: &Value) -> bool {
        self.call(argument).is_truthy()
    }

    /// Returns `true` if both values share the same closure.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// Wraps this function as a condition that matches only itself.
    ///
    /// Same as [`opaque`](crate::matching::opaque).
    #[cfg(feature = "matching")]
    #[inline]
    pub const fn opaque(self) -> crate::matching::Condition {
        crate::matching::opaque(self)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Function({:p})", Arc::as_ptr(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_predicate_returns_bool_value() {
        let positive = Function::predicate(|value| matches!(value, Value::Number(n) if *n > 0.0));
        assert_eq!(positive.call(&Value::from(3)), Value::Bool(true));
        assert!(!positive.test(&Value::from(-3)));
    }

    #[rstest]
    fn test_identity_survives_clone() {
        let function = Function::new(|_| Value::Null);
        let clone = function.clone();
        assert!(function.ptr_eq(&clone));
        assert!(!function.ptr_eq(&Function::new(|_| Value::Null)));
    }

    #[cfg(feature = "matching")]
    #[rstest]
    fn test_opaque_condition_matches_only_itself() {
        let function = Function::new(|_| Value::Bool(true));
        let condition = function.clone().opaque();
        assert!(condition.matches(&Value::Function(function)));
        assert!(!condition.matches(&Value::from(1)));
    }
}
