//! Maybe type - a value that is either present or absent.
//!
//! `Maybe<T>` is the Option family of tagged containers: `Some(T)` carries a
//! payload, `None` carries nothing. Unlike `std::option::Option`, it
//! implements [`Tagged`] so the matching engine can dispatch on it, and its
//! wrong-tag accessors report an [`UnwrapError`].
//!
//! # Examples
//!
//! ```rust
//! use monadic_match::monad::Maybe;
//!
//! let present: Maybe<i32> = Maybe::Some(42);
//! let absent: Maybe<i32> = Maybe::None;
//!
//! assert_eq!(present.map(|x| x + 1), Maybe::Some(43));
//! assert_eq!(absent.unwrap_or(0), 0);
//!
//! // Conversion to the Result family
//! assert_eq!(absent.ok_or("missing").is_err(), true);
//! ```

use super::{Outcome, Tagged, UnwrapError, Variant};

/// A value that is either present (`Some`) or absent (`None`).
///
/// `None` is a unit variant: every `None` is the same immutable value and
/// owns nothing.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// An absent value.
    None,
}

impl<T> Maybe<T> {
    /// The shared absent value.
    pub const NONE: Self = Self::None;

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_match::monad::Maybe;
    ///
    /// assert!(Maybe::Some(1).is_some());
    /// assert!(!Maybe::<i32>::None.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is the `None` value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Some` and the payload satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_match::monad::Maybe;
    ///
    /// assert!(Maybe::Some(4).is_some_and(|x| x % 2 == 0));
    /// assert!(!Maybe::Some(3).is_some_and(|x| x % 2 == 0));
    /// assert!(!Maybe::<i32>::None.is_some_and(|_| true));
    /// ```
    #[inline]
    pub fn is_some_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Reference Conversion
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns an iterator over the present value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_match::monad::Maybe;
    ///
    /// assert_eq!(Maybe::Some("four").map(str::len), Maybe::Some(4));
    /// assert_eq!(Maybe::<&str>::None.map(str::len), Maybe::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_match::monad::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::Some(x / 2) } else { Maybe::None };
    /// assert_eq!(Maybe::Some(8).and_then(half).and_then(half), Maybe::Some(2));
    /// assert_eq!(Maybe::Some(6).and_then(half).and_then(half), Maybe::None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns `self` if present, otherwise the result of `function`.
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => function(),
        }
    }

    /// Keeps the present value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the present value, or an [`UnwrapError`] for `None`.
    ///
    /// # Errors
    ///
    /// Returns `UnwrapError { expected: Some, found: None }` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_match::monad::{Maybe, Variant};
    ///
    /// assert_eq!(Maybe::Some(3).try_unwrap(), Ok(3));
    /// let error = Maybe::<i32>::None.try_unwrap().unwrap_err();
    /// assert_eq!(error.found, Variant::None);
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError {
                expected: Variant::Some,
                found: Variant::None,
            }),
        }
    }

    /// Returns the present value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics with the [`UnwrapError`] message if this is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the present value, panicking with `message` if absent.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    /// Returns the present value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the present value or computes one.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into the Result family, using `error` for absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_match::monad::{Maybe, Outcome};
    ///
    /// assert_eq!(Maybe::Some(1).ok_or("none"), Outcome::Ok(1));
    /// assert_eq!(Maybe::<i32>::None.ok_or("none"), Outcome::Err("none"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    /// Converts into the Result family, computing the error lazily.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(function()),
        }
    }

    /// Converts into a standard library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the present value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Tagged for Maybe<T> {
    #[inline]
    fn variant(&self) -> Variant {
        match self {
            Self::Some(_) => Variant::Some,
            Self::None => Variant::None,
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_none_constant_is_none() {
        let none: Maybe<String> = Maybe::NONE;
        assert!(none.is_none());
        assert_eq!(none, Maybe::default());
    }

    #[rstest]
    #[should_panic(expected = "called unwrap expecting `Some` on a `None` value")]
    fn test_unwrap_on_none_panics() {
        let _ = Maybe::<i32>::None.unwrap();
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let maybe: Maybe<i32> = Some(42).into();
        assert_eq!(maybe, Maybe::Some(42));
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(42));
    }

    #[rstest]
    fn test_filter_drops_failing_payload() {
        assert_eq!(Maybe::Some(3).filter(|x| *x > 5), Maybe::None);
        assert_eq!(Maybe::Some(7).filter(|x| *x > 5), Maybe::Some(7));
    }
}
