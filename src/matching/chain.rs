//! Chained patterns: ordered `(condition, result)` branches.
//!
//! The first branch whose condition matches wins. A chain may end with a
//! default producer that is invoked with the subject when nothing matched;
//! without one, an unmatched subject is [`MatchError::Exhausted`].
//!
//! # Examples
//!
//! ```rust
//! use monadic_match::matching::{Chain, Condition, match_on};
//! use monadic_match::value::Value;
//!
//! let pattern = Chain::new()
//!     .when(5, "five")
//!     .when(Condition::predicate(|v| v.as_number().is_some_and(|n| n < 10.0)), "<10")
//!     .otherwise(|_| "other");
//!
//! assert_eq!(match_on(5, &pattern), Ok("five"));
//! assert_eq!(match_on(7, &pattern), Ok("<10"));
//! assert_eq!(match_on(20, &pattern), Ok("other"));
//! ```

use std::fmt;

use tracing::{debug, trace};

use super::{Branch, Condition, MatchError};
use crate::value::Value;

/// An ordered list of branches with an optional trailing default.
pub struct Chain<R> {
    branches: Vec<(Condition, Branch<R>)>,
    default: Option<Branch<R>>,
}

impl<R> Chain<R> {
    /// Creates an empty chain.
    pub const fn new() -> Self {
        Self {
            branches: Vec::new(),
            default: None,
        }
    }

    /// Appends a branch with an explicit [`Branch`].
    #[must_use]
    pub fn branch(mut self, condition: impl Into<Condition>, branch: Branch<R>) -> Self {
        self.branches.push((condition.into(), branch));
        self
    }

    /// Appends a branch returning `result` when `condition` matches.
    #[must_use]
    pub fn when(self, condition: impl Into<Condition>, result: R) -> Self
    where
        R: Clone + Send + Sync + 'static,
    {
        self.branch(condition, Branch::value(result))
    }

    /// Appends a branch computing its result from the matched subject.
    #[must_use]
    pub fn when_with<F>(self, condition: impl Into<Condition>, function: F) -> Self
    where
        F: Fn(Value) -> R + Send + Sync + 'static,
    {
        self.branch(condition, Branch::compute(function))
    }

    /// Sets the default, invoked with the subject when no branch matched.
    #[must_use]
    pub fn otherwise<F>(mut self, function: F) -> Self
    where
        F: Fn(Value) -> R + Send + Sync + 'static,
    {
        self.default = Some(Branch::compute(function));
        self
    }

    /// Sets a literal default.
    #[must_use]
    pub fn otherwise_value(mut self, result: R) -> Self
    where
        R: Clone + Send + Sync + 'static,
    {
        self.default = Some(Branch::value(result));
        self
    }

    /// Returns the number of conditional branches.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Returns `true` if the chain has no conditional branches.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Returns `true` if the chain ends with its own default.
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Resolves the chain against `subject`.
    ///
    /// `inherited` is the default of an enclosing mapped pattern. It is used
    /// only when this chain has no default of its own and, like every mapped
    /// default, is invoked without the subject.
    pub(crate) fn resolve(
        &self,
        subject: &Value,
        inherited: Option<&Branch<R>>,
    ) -> Result<R, MatchError> {
        if let Some((index, (_, branch))) = self
            .branches
            .iter()
            .enumerate()
            .find(|(_, (condition, _))| condition.matches(subject))
        {
            trace!(index, kind = subject.kind(), "chain branch matched");
            return Ok(branch.produce(subject.clone()));
        }

        if let Some(default) = &self.default {
            trace!(kind = subject.kind(), "chain default taken");
            return Ok(default.produce(subject.clone()));
        }

        if let Some(default) = inherited {
            trace!(kind = subject.kind(), "chain fell back to enclosing default");
            return Ok(default.produce(Value::Undefined));
        }

        debug!(
            kind = subject.kind(),
            branches = self.branches.len(),
            "chain exhausted"
        );
        Err(MatchError::Exhausted)
    }
}

impl<R> Default for Chain<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Chain<R> {
    fn clone(&self) -> Self {
        Self {
            branches: self.branches.clone(),
            default: self.default.clone(),
        }
    }
}

impl<R> fmt::Debug for Chain<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Chain")
            .field("branches", &self.branches)
            .field("default", &self.default)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_first_match_wins() {
        let chain = Chain::new()
            .when(Condition::Any, "first")
            .when(Condition::Any, "second");
        assert_eq!(chain.resolve(&Value::from(1), None), Ok("first"));
    }

    #[rstest]
    fn test_exhausted_without_default() {
        let chain: Chain<&str> = Chain::new().when(1, "one");
        assert_eq!(
            chain.resolve(&Value::from(2), None),
            Err(MatchError::Exhausted)
        );
    }

    #[rstest]
    fn test_own_default_shadows_inherited() {
        let inherited = Branch::value("outer");
        let chain = Chain::new().when(1, "one").otherwise_value("inner");
        assert_eq!(chain.resolve(&Value::from(2), Some(&inherited)), Ok("inner"));
    }

    #[rstest]
    fn test_inherited_default_receives_no_subject() {
        let inherited = Branch::compute(|subject: Value| subject.kind());
        let chain = Chain::new().when(1, "one");
        assert_eq!(
            chain.resolve(&Value::from(2), Some(&inherited)),
            Ok("undefined")
        );
    }

    #[rstest]
    fn test_default_receives_subject() {
        let chain: Chain<String> = Chain::new().otherwise(|subject| format!("got {subject}"));
        assert_eq!(chain.resolve(&Value::from(20), None), Ok("got 20".to_string()));
    }
}
