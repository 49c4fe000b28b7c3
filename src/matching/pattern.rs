//! Entry points: [`match_on`] and [`compile`].

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::{Branch, Chain, MatchError, Mapped};
use crate::value::Value;

/// The shape of a pattern, decided once when it is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternShape {
    /// An ordered list of condition/result branches.
    Chained,
    /// Arms keyed by monad variant.
    Mapped,
}

/// Either kind of pattern.
pub enum Pattern<R> {
    /// A chained pattern.
    Chain(Chain<R>),
    /// A mapped pattern.
    Mapped(Mapped<R>),
}

impl<R> Pattern<R> {
    /// Returns the shape of this pattern.
    pub const fn shape(&self) -> PatternShape {
        match self {
            Self::Chain(_) => PatternShape::Chained,
            Self::Mapped(_) => PatternShape::Mapped,
        }
    }
}

impl<R> Clone for Pattern<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Chain(chain) => Self::Chain(chain.clone()),
            Self::Mapped(mapped) => Self::Mapped(mapped.clone()),
        }
    }
}

impl<R> fmt::Debug for Pattern<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain(chain) => fmt::Debug::fmt(chain, formatter),
            Self::Mapped(mapped) => fmt::Debug::fmt(mapped, formatter),
        }
    }
}

impl<R> From<Chain<R>> for Pattern<R> {
    fn from(chain: Chain<R>) -> Self {
        Self::Chain(chain)
    }
}

impl<R> From<Mapped<R>> for Pattern<R> {
    fn from(mapped: Mapped<R>) -> Self {
        Self::Mapped(mapped)
    }
}

/// A pattern that can select a branch for a subject.
///
/// Implemented by [`Chain`], [`Mapped`] and [`Pattern`], so any of them can
/// be passed to [`match_on`].
pub trait Resolve<R> {
    /// Resolves the pattern against `subject`.
    ///
    /// `fallback` is the default of an enclosing mapped pattern, used when
    /// this pattern has none of its own.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Exhausted`] when nothing matched and no default
    /// applies, and [`MatchError::InvalidPattern`] when a mapped pattern meets
    /// a value that is not a monad.
    fn resolve_with(
        &self,
        subject: &Value,
        fallback: Option<&Branch<R>>,
    ) -> Result<R, MatchError>;
}

impl<R> Resolve<R> for Chain<R> {
    fn resolve_with(
        &self,
        subject: &Value,
        fallback: Option<&Branch<R>>,
    ) -> Result<R, MatchError> {
        self.resolve(subject, fallback)
    }
}

impl<R> Resolve<R> for Mapped<R> {
    fn resolve_with(
        &self,
        subject: &Value,
        fallback: Option<&Branch<R>>,
    ) -> Result<R, MatchError> {
        self.resolve(subject, fallback)
    }
}

impl<R> Resolve<R> for Pattern<R> {
    fn resolve_with(
        &self,
        subject: &Value,
        fallback: Option<&Branch<R>>,
    ) -> Result<R, MatchError> {
        match self {
            Self::Chain(chain) => chain.resolve(subject, fallback),
            Self::Mapped(mapped) => mapped.resolve(subject, fallback),
        }
    }
}

/// Matches `value` against `pattern` and produces the selected result.
///
/// A [`Chain`] is resolved first-match; a [`Mapped`] pattern requires
/// `value` to be an Option or Result and dispatches on its variant.
///
/// # Errors
///
/// Returns [`MatchError::Exhausted`] if no branch matched and no default was
/// available, or [`MatchError::InvalidPattern`] if a mapped pattern was used
/// on a value that is not a monad.
///
/// # Examples
///
/// ```rust
/// use monadic_match::matching::{Mapped, match_on};
/// use monadic_match::value::Value;
///
/// let pattern = Mapped::new()
///     .some(|n| n.as_number().unwrap_or_default() + 1.0)
///     .none(|| 0.0);
///
/// assert_eq!(match_on(Value::some(10), &pattern), Ok(11.0));
/// assert_eq!(match_on(Value::NONE, &pattern), Ok(0.0));
/// assert!(match_on(10, &pattern).is_err());
/// ```
pub fn match_on<R, P>(value: impl Into<Value>, pattern: &P) -> Result<R, MatchError>
where
    P: Resolve<R> + ?Sized,
{
    pattern.resolve_with(&value.into(), None)
}

/// Classifies `pattern` once and returns a reusable [`Matcher`].
///
/// # Examples
///
/// ```rust
/// use monadic_match::matching::{Chain, Condition, PatternShape, compile};
///
/// let matcher = compile(
///     Chain::new()
///         .when(Condition::object([("a", 5)]), "a=5")
///         .otherwise(|_| "other"),
/// );
///
/// assert_eq!(matcher.shape(), PatternShape::Chained);
/// assert_eq!(matcher.run(5), Ok("other"));
/// ```
pub fn compile<R>(pattern: impl Into<Pattern<R>>) -> Matcher<R> {
    let pattern = pattern.into();
    let shape = pattern.shape();
    debug!(?shape, "compiled pattern");
    Matcher {
        pattern: Arc::new(pattern),
        shape,
    }
}

/// A compiled pattern, cheap to clone and safe to share between threads.
pub struct Matcher<R> {
    pattern: Arc<Pattern<R>>,
    shape: PatternShape,
}

impl<R> Matcher<R> {
    /// Matches `value` against the compiled pattern.
    ///
    /// # Errors
    ///
    /// Same as [`match_on`].
    pub fn run(&self, value: impl Into<Value>) -> Result<R, MatchError> {
        self.pattern.resolve_with(&value.into(), None)
    }

    /// Returns the shape recorded at compile time.
    pub const fn shape(&self) -> PatternShape {
        self.shape
    }

    /// Returns the compiled pattern.
    pub fn pattern(&self) -> &Pattern<R> {
        &self.pattern
    }

    /// Turns the matcher into a plain closure.
    pub fn into_fn(self) -> impl Fn(Value) -> Result<R, MatchError> {
        move |value| self.run(value)
    }
}

impl<R> Clone for Matcher<R> {
    fn clone(&self) -> Self {
        Self {
            pattern: Arc::clone(&self.pattern),
            shape: self.shape,
        }
    }
}

impl<R> fmt::Debug for Matcher<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Matcher")
            .field("shape", &self.shape)
            .field("pattern", &self.pattern)
            .finish()
    }
}

impl<R> Resolve<R> for Matcher<R> {
    fn resolve_with(
        &self,
        subject: &Value,
        fallback: Option<&Branch<R>>,
    ) -> Result<R, MatchError> {
        self.pattern.resolve_with(subject, fallback)
    }
}

static_assertions::assert_impl_all!(Matcher<String>: Send, Sync, Clone);
