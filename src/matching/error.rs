//! Error types for the matching engine.

/// Represents a failure to select a branch.
///
/// Both kinds describe the pattern, not the value: an `Err` value that is
/// matched successfully is not a `MatchError`.
///
/// # Examples
///
/// ```rust
/// use monadic_match::matching::MatchError;
///
/// let error = MatchError::InvalidPattern {
///     reason: "mapped pattern applied to a number".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "invalid pattern: mapped pattern applied to a number"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// No branch matched and no default was available at any level.
    Exhausted,
    /// The pattern cannot be applied to the value, e.g. a mapped pattern
    /// for a value that is neither an Option nor a Result.
    InvalidPattern {
        /// Why the pattern was rejected.
        reason: String,
    },
}

impl MatchError {
    pub(crate) fn not_a_monad(kind: &str) -> Self {
        Self::InvalidPattern {
            reason: format!("mapped pattern applied to a {kind}"),
        }
    }

    /// Returns `true` for [`MatchError::Exhausted`].
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => formatter
                .write_str("match exhausted: no branch matched and no default was provided"),
            Self::InvalidPattern { reason } => write!(formatter, "invalid pattern: {reason}"),
        }
    }
}

impl std::error::Error for MatchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_display() {
        assert_eq!(
            format!("{}", MatchError::Exhausted),
            "match exhausted: no branch matched and no default was provided"
        );
    }

    #[test]
    fn test_not_a_monad_reason() {
        let error = MatchError::not_a_monad("string");
        assert!(!error.is_exhausted());
        assert_eq!(
            format!("{error}"),
            "invalid pattern: mapped pattern applied to a string"
        );
    }
}
