//! Branch results.

use std::fmt;
use std::sync::Arc;

use super::{Chain, Mapped};
use crate::value::Value;

type Producer<R> = dyn Fn(Value) -> R + Send + Sync;

/// The result side of a branch.
///
/// A branch either hands back a literal (cloned each time it is selected) or
/// computes its result from the matched subject. A literal that happens to be
/// a function value is returned as-is, never invoked.
///
/// # Examples
///
/// ```rust
/// use monadic_match::matching::Branch;
/// use monadic_match::value::Value;
///
/// let literal: Branch<&str> = Branch::value("five");
/// assert_eq!(literal.produce(Value::from(5)), "five");
///
/// let computed = Branch::compute(|subject: Value| subject.to_string());
/// assert_eq!(computed.produce(Value::from(5)), "5");
/// ```
pub struct Branch<R> {
    producer: Arc<Producer<R>>,
    computed: bool,
}

impl<R> Branch<R> {
    /// Creates a branch returning a clone of `value`.
    pub fn value(value: R) -> Self
    where
        R: Clone + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(move |_| value.clone()),
            computed: false,
        }
    }

    /// Creates a branch computing its result from the subject.
    pub fn compute<F>(function: F) -> Self
    where
        F: Fn(Value) -> R + Send + Sync + 'static,
    {
        Self {
            producer: Arc::new(function),
            computed: true,
        }
    }

    /// Creates a branch computing its result without looking at the subject.
    pub fn lazy<F>(function: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        Self::compute(move |_| function())
    }

    /// Produces the branch result for `subject`.
    #[inline]
    pub fn produce(&self, subject: Value) -> R {
        (self.producer)(subject)
    }

    /// Returns `true` if this branch computes its result.
    #[inline]
    pub const fn is_computed(&self) -> bool {
        self.computed
    }
}

impl<R> Clone for Branch<R> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
            computed: self.computed,
        }
    }
}

impl<R> fmt::Debug for Branch<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.computed { "Compute" } else { "Literal" };
        formatter.debug_tuple("Branch").field(&kind).finish()
    }
}

/// One arm of a mapped pattern.
///
/// Besides a plain branch, an arm may hold a nested mapped pattern or a
/// nested chain; both are applied to the unwrapped payload.
pub enum Arm<R> {
    /// A branch invoked with the payload.
    Branch(Branch<R>),
    /// A mapped pattern applied to the payload.
    Mapped(Box<Mapped<R>>),
    /// A chain applied to the payload.
    Chain(Chain<R>),
}

impl<R> Clone for Arm<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Branch(branch) => Self::Branch(branch.clone()),
            Self::Mapped(mapped) => Self::Mapped(mapped.clone()),
            Self::Chain(chain) => Self::Chain(chain.clone()),
        }
    }
}

impl<R> fmt::Debug for Arm<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch(branch) => formatter.debug_tuple("Branch").field(branch).finish(),
            Self::Mapped(mapped) => formatter.debug_tuple("Mapped").field(mapped).finish(),
            Self::Chain(chain) => formatter.debug_tuple("Chain").field(chain).finish(),
        }
    }
}

impl<R> From<Branch<R>> for Arm<R> {
    fn from(branch: Branch<R>) -> Self {
        Self::Branch(branch)
    }
}

impl<R> From<Mapped<R>> for Arm<R> {
    fn from(mapped: Mapped<R>) -> Self {
        Self::Mapped(Box::new(mapped))
    }
}

impl<R> From<Chain<R>> for Arm<R> {
    fn from(chain: Chain<R>) -> Self {
        Self::Chain(chain)
    }
}
