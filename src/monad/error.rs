//! Error raised when a monad payload is extracted under the wrong tag.

use super::Variant;

/// Represents an attempt to unwrap a monad value of the wrong variant.
///
/// This is a programming error, distinct from the domain failure an `Err`
/// value carries. The panicking accessors (`unwrap`, `unwrap_err`) panic
/// with this error's message; the `try_` accessors return it.
///
/// # Examples
///
/// ```rust
/// use monadic_match::monad::{UnwrapError, Variant};
///
/// let error = UnwrapError {
///     expected: Variant::Some,
///     found: Variant::None,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "called unwrap expecting `Some` on a `None` value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwrapError {
    /// The variant the caller assumed.
    pub expected: Variant,
    /// The variant the value actually has.
    pub found: Variant,
}

impl std::fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "called unwrap expecting `{}` on a `{}` value",
            self.expected, self.found
        )
    }
}

impl std::error::Error for UnwrapError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_error_display_result_family() {
        let error = UnwrapError {
            expected: Variant::Ok,
            found: Variant::Err,
        };
        assert_eq!(
            format!("{error}"),
            "called unwrap expecting `Ok` on a `Err` value"
        );
    }

    #[test]
    fn test_unwrap_error_source() {
        use std::error::Error;

        let error = UnwrapError {
            expected: Variant::Err,
            found: Variant::Ok,
        };
        assert!(error.source().is_none());
    }
}
