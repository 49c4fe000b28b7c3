//! Outcome type - a computation that either succeeded or failed.
//!
//! `Outcome<T, E>` is the Result family of tagged containers. `Ok(T)` carries
//! the success value and `Err(E)` always carries an error payload.
//!
//! # Examples
//!
//! ```rust
//! use monadic_match::monad::{Maybe, Outcome};
//!
//! let parsed: Outcome<i32, String> = Outcome::Ok(21);
//! assert_eq!(parsed.map(|x| x * 2).ok(), Maybe::Some(42));
//!
//! let failed: Outcome<i32, String> = Outcome::Err("bad input".to_string());
//! assert_eq!(failed.err(), Maybe::Some("bad input".to_string()));
//! ```

use super::{Maybe, Tagged, UnwrapError, Variant};

/// A value that is either a success (`Ok`) or a failure (`Err`).
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E> {
    /// A successful value.
    Ok(T),
    /// A failure carrying its error.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    #[inline]
    pub fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    #[inline]
    pub fn is_err_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns an iterator over the success value, if any.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().ok().into_iter()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies a function to the error value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use monadic_match::monad::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(failed.map_err(str::len), Outcome::Err(4));
    /// ```
    #[inline]
    pub fn map_err<F2, O>(self, function: O) -> Outcome<T, F2>
    where
        O: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Chains a computation that may itself fail.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Recovers from a failure with another computation.
    #[inline]
    pub fn or_else<F2, O>(self, function: O) -> Outcome<T, F2>
    where
        O: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, or an [`UnwrapError`] for `Err`.
    ///
    /// # Errors
    ///
    /// Returns `UnwrapError { expected: Ok, found: Err }` on failure.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(UnwrapError {
                expected: Variant::Ok,
                found: Variant::Err,
            }),
        }
    }

    /// Returns the error value, or an [`UnwrapError`] for `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `UnwrapError { expected: Err, found: Ok }` on success.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError> {
        match self {
            Self::Ok(_) => Err(UnwrapError {
                expected: Variant::Err,
                found: Variant::Ok,
            }),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with the [`UnwrapError`] message if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the error value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics with the [`UnwrapError`] message if this is `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the success value, panicking with `message` on failure.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => panic!("{message}"),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into the Option family, discarding the error.
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Converts into the Option family, keeping only the error.
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    /// Converts into a standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(|_| T::default())
    }
}

impl<T, E> Tagged for Outcome<T, E> {
    #[inline]
    fn variant(&self) -> Variant {
        match self {
            Self::Ok(_) => Variant::Ok,
            Self::Err(_) => Variant::Err,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[should_panic(expected = "called unwrap expecting `Err` on a `Ok` value")]
    fn test_unwrap_err_on_ok_panics() {
        let _ = Outcome::<i32, String>::Ok(1).unwrap_err();
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let outcome: Outcome<i32, String> = Err("error".to_string()).into();
        assert!(outcome.is_err());
        let result: Result<i32, String> = outcome.into();
        assert_eq!(result, Err("error".to_string()));
    }

    #[rstest]
    fn test_or_else_recovers() {
        let failed: Outcome<i32, &str> = Outcome::Err("boom");
        let recovered: Outcome<i32, ()> = failed.or_else(|error| Outcome::Ok(error.len() as i32));
        assert_eq!(recovered, Outcome::Ok(4));
    }
}
