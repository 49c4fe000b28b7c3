use std::collections::BTreeMap;
use std::fmt;

use super::Function;
use crate::monad::{Maybe, Outcome, Tagged, Variant};

/// A dynamically shaped runtime value.
///
/// This is the universe the matching engine inspects: scalars, error
/// values, arrays, string-keyed objects, function values, and the two monad
/// families with boxed payloads.
///
/// Equality is structural, except for functions, which compare by identity,
/// and numbers, which follow IEEE 754 (`NaN` never equals itself).
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// A missing value; also the argument passed to branches that take none.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// An error value carrying its message.
    Error(String),
    /// An ordered list of values.
    Array(Vec<Self>),
    /// A string-keyed map of values.
    Object(BTreeMap<String, Self>),
    /// A function value.
    Function(Function),
    /// A value of the Option family.
    Option(Maybe<Box<Self>>),
    /// A value of the Result family.
    Result(Outcome<Box<Self>, Box<Self>>),
}

impl Value {
    /// The shared `None` value.
    pub const NONE: Self = Self::Option(Maybe::None);

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` as `Some(value)`.
    pub fn some(value: impl Into<Self>) -> Self {
        Self::Option(Maybe::Some(Box::new(value.into())))
    }

    /// Wraps `value` as `Ok(value)`.
    pub fn ok(value: impl Into<Self>) -> Self {
        Self::Result(Outcome::Ok(Box::new(value.into())))
    }

    /// Wraps `error` as `Err(error)`.
    pub fn err(error: impl Into<Self>) -> Self {
        Self::Result(Outcome::Err(Box::new(error.into())))
    }

    /// Creates an error value.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Creates an object from key/value pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_match::value::Value;
    ///
    /// let point = Value::object([("x", 1), ("y", 2)]);
    /// assert_eq!(point.get("y"), Some(&Value::from(2)));
    /// assert_eq!(point.get("z"), None);
    /// ```
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Creates an array from values.
    pub fn array<V, I>(elements: I) -> Self
    where
        V: Into<Self>,
        I: IntoIterator<Item = V>,
    {
        Self::Array(elements.into_iter().map(Into::into).collect())
    }

    /// Creates a function value from a closure.
    pub fn function<F>(function: F) -> Self
    where
        F: Fn(&Self) -> Self + Send + Sync + 'static,
    {
        Self::Function(Function::new(function))
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `false` for `Undefined`, `Null`, `false`, `0`, `NaN` and the
    /// empty string, and `true` for everything else.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::String(text) => !text.is_empty(),
            Self::Error(_)
            | Self::Array(_)
            | Self::Object(_)
            | Self::Function(_)
            | Self::Option(_)
            | Self::Result(_) => true,
        }
    }

    /// Returns `true` if this value belongs to either monad family.
    #[inline]
    pub const fn is_monad(&self) -> bool {
        matches!(self, Self::Option(_) | Self::Result(_))
    }

    /// Returns the monad variant of this value, if it is one.
    pub fn variant(&self) -> Option<Variant> {
        match self {
            Self::Option(maybe) => Some(maybe.variant()),
            Self::Result(outcome) => Some(outcome.variant()),
            _ => None,
        }
    }

    /// Returns the payload of a `Some`, `Ok` or `Err` value.
    ///
    /// Returns `None` for the absent value and for non-monad values.
    pub fn payload(&self) -> Option<&Self> {
        match self {
            Self::Option(Maybe::Some(payload))
            | Self::Result(Outcome::Ok(payload) | Outcome::Err(payload)) => Some(payload),
            _ => None,
        }
    }

    /// Looks up `key` on an object value.
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Looks up `index` on an array value.
    pub fn at(&self, index: usize) -> Option<&Self> {
        match self {
            Self::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    /// Returns the number this value holds.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string this value holds.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the function this value holds.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns a short name for the shape of this value.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Error(_) => "error",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
            Self::Option(_) => "option",
            Self::Result(_) => "result",
        }
    }
}

impl Maybe<Value> {
    /// Classifies a raw value: `Some(value)` if it is truthy and not an
    /// error value, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_match::monad::Maybe;
    /// use monadic_match::value::Value;
    ///
    /// assert_eq!(Maybe::from_value(Value::from(3)), Maybe::Some(Value::from(3)));
    /// assert_eq!(Maybe::from_value(Value::from(0)), Maybe::None);
    /// assert_eq!(Maybe::from_value(Value::error("boom")), Maybe::None);
    /// ```
    pub fn from_value(value: Value) -> Self {
        if value.is_truthy() && !matches!(value, Value::Error(_)) {
            Self::Some(value)
        } else {
            Self::None
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(elements)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(entries: BTreeMap<String, Self>) -> Self {
        Self::Object(entries)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl<T: Into<Self>> From<Maybe<T>> for Value {
    fn from(maybe: Maybe<T>) -> Self {
        Self::Option(maybe.map(|value| Box::new(value.into())))
    }
}

impl<T: Into<Self>, E: Into<Self>> From<Outcome<T, E>> for Value {
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::Result(
            outcome
                .map(|value| Box::new(value.into()))
                .map_err(|error| Box::new(error.into())),
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::String(text) => formatter.write_str(text),
            Self::Error(message) => write!(formatter, "Error: {message}"),
            Self::Array(elements) => {
                formatter.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                formatter.write_str("]")
            }
            Self::Object(entries) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                formatter.write_str("}")
            }
            Self::Function(_) => formatter.write_str("[function]"),
            Self::Option(Maybe::Some(payload)) => write!(formatter, "Some({payload})"),
            Self::Option(Maybe::None) => formatter.write_str("None"),
            Self::Result(Outcome::Ok(payload)) => write!(formatter, "Ok({payload})"),
            Self::Result(Outcome::Err(payload)) => write!(formatter, "Err({payload})"),
        }
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Undefined, false)]
    #[case(Value::Null, false)]
    #[case(Value::Bool(false), false)]
    #[case(Value::Number(0.0), false)]
    #[case(Value::Number(f64::NAN), false)]
    #[case(Value::from(""), false)]
    #[case(Value::from("a"), true)]
    #[case(Value::from(-1), true)]
    #[case(Value::Array(vec![]), true)]
    #[case(Value::NONE, true)]
    #[case(Value::error("boom"), true)]
    fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn test_nan_is_not_equal_to_itself() {
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }

    #[rstest]
    fn test_payload_and_variant() {
        assert_eq!(Value::some(1).payload(), Some(&Value::from(1)));
        assert_eq!(Value::err("e").variant(), Some(Variant::Err));
        assert_eq!(Value::NONE.payload(), None);
        assert_eq!(Value::from(1).variant(), None);
    }

    #[rstest]
    fn test_display_nested_monads() {
        let value = Value::ok(Value::some(10));
        assert_eq!(value.to_string(), "Ok(Some(10))");
        assert_eq!(Value::array([1, 2]).to_string(), "[1, 2]");
    }

    #[rstest]
    fn test_from_maybe_boxes_payload() {
        let value = Value::from(Maybe::Some("x"));
        assert_eq!(value, Value::some("x"));
        assert_eq!(Value::from(Maybe::<i32>::None), Value::NONE);
    }
}
