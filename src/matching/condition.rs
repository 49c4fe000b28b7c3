//! Conditions and the condition evaluator.
//!
//! A [`Condition`] is classified once, when it is built, into one of a
//! closed set of kinds. Evaluation then dispatches on that kind in a fixed
//! order, so a function wrapped as a value is never mistaken for a
//! predicate.
//!
//! # Precedence
//!
//! 1. [`Condition::Any`] matches everything.
//! 2. [`Condition::Opaque`] matches the identical function value.
//! 3. [`Condition::Option`] / [`Condition::Result`] match a monad of the same
//!    variant whose payload matches the inner condition. Inside them,
//!    predicates are compared by identity and never invoked.
//! 4. [`Condition::Predicate`] invokes the function; a truthy result matches.
//! 5. [`Condition::Object`] / [`Condition::Array`] match partially, key by key.
//! 6. [`Condition::Literal`] compares with strict equality.
//!
//! # Examples
//!
//! ```rust
//! use monadic_match::matching::Condition;
//! use monadic_match::value::Value;
//!
//! let template = Condition::object([("a", Condition::from(5))]);
//! assert!(template.matches(&Value::object([("a", 5), ("b", 6)])));
//! assert!(!template.matches(&Value::object([("b", 6)])));
//!
//! assert!(Condition::some(5).matches(&Value::some(5)));
//! assert!(!Condition::ok(1).matches(&Value::err(1)));
//! ```

use std::collections::BTreeMap;

use crate::monad::{Maybe, Outcome};
use crate::value::{Function, Value};

/// A declared condition of a chained branch.
#[derive(Clone, Debug)]
pub enum Condition {
    /// Matches any value; inside a template it only requires the key to
    /// exist.
    Any,
    /// A function used as a value: matches the identical function.
    Opaque(Function),
    /// Matches an Option value of the same variant with a matching payload.
    Option(Maybe<Box<Self>>),
    /// Matches a Result value of the same variant with a matching payload.
    Result(Outcome<Box<Self>, Box<Self>>),
    /// Matches when the function returns a truthy value.
    Predicate(Function),
    /// Matches objects that have every listed key with a matching value.
    Object(BTreeMap<String, Self>),
    /// Matches arrays that have every listed index with a matching value.
    Array(BTreeMap<usize, Self>),
    /// Matches a strictly equal value.
    Literal(Value),
}

/// Returns the match-anything marker.
#[inline]
pub const fn any() -> Condition {
    Condition::Any
}

/// Returns the match-anything marker under its default-placeholder name.
///
/// Identical to [`any`]; both spellings exist so templates can read as
/// "any value here" or "default here".
#[inline]
pub const fn default_marker() -> Condition {
    Condition::Any
}

/// Wraps a function so that it is matched by identity, never invoked.
///
/// # Examples
///
/// ```rust
/// use monadic_match::matching::opaque;
/// use monadic_match::value::{Function, Value};
///
/// let handler = Function::new(|_| Value::Null);
/// let condition = opaque(handler.clone());
///
/// assert!(condition.matches(&Value::Function(handler)));
/// assert!(!condition.matches(&Value::function(|_| Value::Null)));
/// ```
#[inline]
pub const fn opaque(function: Function) -> Condition {
    Condition::Opaque(function)
}

impl Condition {
    /// The condition matching the shared `None` value.
    pub const NONE: Self = Self::Option(Maybe::None);

    /// Matches `Some(payload)` where the payload matches `inner`.
    pub fn some(inner: impl Into<Self>) -> Self {
        Self::Option(Maybe::Some(Box::new(inner.into())))
    }

    /// Matches `Ok(payload)` where the payload matches `inner`.
    pub fn ok(inner: impl Into<Self>) -> Self {
        Self::Result(Outcome::Ok(Box::new(inner.into())))
    }

    /// Matches `Err(payload)` where the payload matches `inner`.
    pub fn err(inner: impl Into<Self>) -> Self {
        Self::Result(Outcome::Err(Box::new(inner.into())))
    }

    /// Builds a predicate condition from a closure.
    pub fn predicate<P>(predicate: P) -> Self
    where
        P: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Function::predicate(predicate))
    }

    /// Builds a literal condition compared with strict equality.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Builds a partial object template.
    pub fn object<K, C, I>(entries: I) -> Self
    where
        K: Into<String>,
        C: Into<Self>,
        I: IntoIterator<Item = (K, C)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, condition)| (key.into(), condition.into()))
                .collect(),
        )
    }

    /// Builds a partial array template constraining indices `0..n`.
    pub fn array<C, I>(elements: I) -> Self
    where
        C: Into<Self>,
        I: IntoIterator<Item = C>,
    {
        Self::Array(
            elements
                .into_iter()
                .map(Into::into)
                .enumerate()
                .collect(),
        )
    }

    /// Builds a sparse array template constraining only the listed indices.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_match::matching::Condition;
    /// use monadic_match::value::Value;
    ///
    /// let third_is_seven = Condition::array_at([(2, 7)]);
    /// assert!(third_is_seven.matches(&Value::array([0, 0, 7])));
    /// assert!(!third_is_seven.matches(&Value::array([7])));
    /// ```
    pub fn array_at<C, I>(elements: I) -> Self
    where
        C: Into<Self>,
        I: IntoIterator<Item = (usize, C)>,
    {
        Self::Array(
            elements
                .into_iter()
                .map(|(index, condition)| (index, condition.into()))
                .collect(),
        )
    }

    /// Evaluates this condition against `value`.
    #[inline]
    pub fn matches(&self, value: &Value) -> bool {
        evaluate(self, value)
    }
}

/// Decides whether `condition` matches `value`.
pub fn evaluate(condition: &Condition, value: &Value) -> bool {
    evaluate_with(condition, value, true)
}

/// `invoke_predicates` is cleared below monad-wrapped conditions.
fn evaluate_with(condition: &Condition, value: &Value, invoke_predicates: bool) -> bool {
    match condition {
        Condition::Any => true,
        Condition::Opaque(function) => is_same_function(function, value),
        Condition::Option(expected) => match (expected, value) {
            (Maybe::Some(inner), Value::Option(Maybe::Some(payload))) => {
                evaluate_with(inner, payload, false)
            }
            (Maybe::None, Value::Option(Maybe::None)) => true,
            _ => false,
        },
        Condition::Result(expected) => match (expected, value) {
            (Outcome::Ok(inner), Value::Result(Outcome::Ok(payload)))
            | (Outcome::Err(inner), Value::Result(Outcome::Err(payload))) => {
                evaluate_with(inner, payload, false)
            }
            _ => false,
        },
        Condition::Predicate(function) => {
            is_same_function(function, value) || (invoke_predicates && function.test(value))
        }
        Condition::Object(template) => match value {
            Value::Object(entries) => template.iter().all(|(key, inner)| {
                entries
                    .get(key)
                    .is_some_and(|element| evaluate_with(inner, element, invoke_predicates))
            }),
            _ => false,
        },
        Condition::Array(template) => match value {
            Value::Array(elements) => template.iter().all(|(index, inner)| {
                elements
                    .get(*index)
                    .is_some_and(|element| evaluate_with(inner, element, invoke_predicates))
            }),
            _ => false,
        },
        Condition::Literal(expected) => expected == value,
    }
}

fn is_same_function(function: &Function, value: &Value) -> bool {
    value
        .as_function()
        .is_some_and(|candidate| candidate.ptr_eq(function))
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<Value> for Condition {
    /// Classifies a value into a condition: functions become predicates,
    /// arrays and objects become partial templates, monads become
    /// monad-wrapped conditions, and everything else is a literal.
    fn from(value: Value) -> Self {
        match value {
            Value::Function(function) => Self::Predicate(function),
            Value::Array(elements) => Self::array(elements),
            Value::Object(entries) => Self::object(entries),
            Value::Option(maybe) => Self::Option(maybe.map(|payload| Box::new(Self::from(*payload)))),
            Value::Result(outcome) => Self::Result(
                outcome
                    .map(|payload| Box::new(Self::from(*payload)))
                    .map_err(|payload| Box::new(Self::from(*payload))),
            ),
            scalar => Self::Literal(scalar),
        }
    }
}

impl From<Function> for Condition {
    fn from(function: Function) -> Self {
        Self::Predicate(function)
    }
}

macro_rules! literal_condition_from {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for Condition {
                fn from(value: $source) -> Self {
                    Self::Literal(Value::from(value))
                }
            }
        )*
    };
}

literal_condition_from!(bool, f64, i32, u32, &str, String, ());

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_any_matches_undefined_element_when_key_exists() {
        let template = Condition::object([("a", any())]);
        assert!(template.matches(&Value::object([("a", Value::Undefined)])));
        assert!(!template.matches(&Value::object([("b", 1)])));
    }

    #[rstest]
    fn test_array_template_does_not_match_object() {
        let template = Condition::array([1]);
        let object = Value::object([("0", 1)]);
        assert!(!template.matches(&object));
        assert!(template.matches(&Value::array([1, 2])));
    }

    #[rstest]
    fn test_object_template_does_not_match_array() {
        let template = Condition::Object(BTreeMap::new());
        assert!(!template.matches(&Value::array([1])));
        assert!(template.matches(&Value::object([("x", 1)])));
    }

    #[rstest]
    fn test_predicate_inside_monad_is_not_invoked() {
        let positive = Function::predicate(|value| value.as_number().is_some_and(|n| n > 0.0));
        let condition = Condition::some(positive.clone());

        assert!(!condition.matches(&Value::some(5)));
        assert!(condition.matches(&Value::some(Value::Function(positive))));
    }

    #[rstest]
    fn test_predicate_inside_template_inside_monad_is_not_invoked() {
        let condition = Condition::ok(Condition::object([(
            "n",
            Condition::predicate(|_| true),
        )]));
        assert!(!condition.matches(&Value::ok(Value::object([("n", 1)]))));
    }

    #[rstest]
    fn test_opaque_does_not_invoke() {
        let always = Function::predicate(|_| true);
        assert!(!opaque(always.clone()).matches(&Value::from(1)));
        assert!(opaque(always.clone()).matches(&Value::Function(always)));
    }

    #[rstest]
    fn test_none_condition() {
        assert!(Condition::NONE.matches(&Value::NONE));
        assert!(!Condition::NONE.matches(&Value::some(Value::Undefined)));
        assert!(!Condition::NONE.matches(&Value::Undefined));
    }

    #[rstest]
    fn test_from_value_classifies_nested_shapes() {
        let condition = Condition::from(Value::object([("b", Value::object([("c", 5)]))]));
        assert!(matches!(condition, Condition::Object(_)));
        assert!(condition.matches(&Value::object([
            ("a", Value::from(50)),
            ("b", Value::object([("c", 5)])),
        ])));
    }
}
