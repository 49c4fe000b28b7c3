//! Mapped patterns: arms keyed by monad variant.
//!
//! A mapped pattern only applies to `Some`/`None`/`Ok`/`Err` values. The arm
//! for the value's variant is selected by exact lookup; nested arms recurse
//! into the unwrapped payload.
//!
//! # Default inheritance
//!
//! The `_` default is hierarchical. A nested pattern that defines no
//! default of its own falls back to the nearest enclosing one, never the
//! other way round:
//!
//! ```rust
//! use monadic_match::matching::{Mapped, match_on};
//! use monadic_match::monad::Variant;
//! use monadic_match::value::Value;
//!
//! let pattern = Mapped::new()
//!     .on(
//!         Variant::Ok,
//!         Mapped::new().some(|n| format!("found {n}")),
//!     )
//!     .otherwise(|| "nothing".to_string());
//!
//! assert_eq!(match_on(Value::ok(Value::some(10)), &pattern).unwrap(), "found 10");
//! assert_eq!(match_on(Value::ok(Value::NONE), &pattern).unwrap(), "nothing");
//! assert_eq!(match_on(Value::err("x"), &pattern).unwrap(), "nothing");
//! ```

use std::fmt;

use tracing::{debug, trace};

use super::{Arm, Branch, MatchError};
use crate::monad::Variant;
use crate::value::Value;

/// A pattern keyed by monad variant, with an optional default.
pub struct Mapped<R> {
    some: Option<Arm<R>>,
    none: Option<Arm<R>>,
    ok: Option<Arm<R>>,
    err: Option<Arm<R>>,
    default: Option<Branch<R>>,
}

impl<R> Mapped<R> {
    /// Creates a mapped pattern with no arms.
    pub const fn new() -> Self {
        Self {
            some: None,
            none: None,
            ok: None,
            err: None,
            default: None,
        }
    }

    /// Sets the arm for `variant`, replacing any previous one.
    #[must_use]
    pub fn on(mut self, variant: Variant, arm: impl Into<Arm<R>>) -> Self {
        *self.slot_mut(variant) = Some(arm.into());
        self
    }

    /// Sets the `Some` arm, invoked with the payload.
    #[must_use]
    pub fn some<F>(self, function: F) -> Self
    where
        F: Fn(Value) -> R + Send + Sync + 'static,
    {
        self.on(Variant::Some, Branch::compute(function))
    }

    /// Sets the `None` arm, invoked with no argument.
    #[must_use]
    pub fn none<F>(self, function: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        self.on(Variant::None, Branch::lazy(function))
    }

    /// Sets the `Ok` arm, invoked with the payload.
    #[must_use]
    pub fn ok<F>(self, function: F) -> Self
    where
        F: Fn(Value) -> R + Send + Sync + 'static,
    {
        self.on(Variant::Ok, Branch::compute(function))
    }

    /// Sets the `Err` arm, invoked with the error payload.
    #[must_use]
    pub fn err<F>(self, function: F) -> Self
    where
        F: Fn(Value) -> R + Send + Sync + 'static,
    {
        self.on(Variant::Err, Branch::compute(function))
    }

    /// Sets the `_` default, invoked with no argument.
    #[must_use]
    pub fn otherwise<F>(mut self, function: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
    {
        self.default = Some(Branch::lazy(function));
        self
    }

    /// Sets a literal `_` default.
    #[must_use]
    pub fn otherwise_value(mut self, result: R) -> Self
    where
        R: Clone + Send + Sync + 'static,
    {
        self.default = Some(Branch::value(result));
        self
    }

    /// Returns the arm registered for `variant`.
    pub const fn arm(&self, variant: Variant) -> Option<&Arm<R>> {
        match variant {
            Variant::Some => self.some.as_ref(),
            Variant::None => self.none.as_ref(),
            Variant::Ok => self.ok.as_ref(),
            Variant::Err => self.err.as_ref(),
        }
    }

    /// Returns `true` if this level defines its own `_` default.
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    const fn slot_mut(&mut self, variant: Variant) -> &mut Option<Arm<R>> {
        match variant {
            Variant::Some => &mut self.some,
            Variant::None => &mut self.none,
            Variant::Ok => &mut self.ok,
            Variant::Err => &mut self.err,
        }
    }

    /// Resolves the pattern against `subject`, which must be a monad value.
    pub(crate) fn resolve(
        &self,
        subject: &Value,
        inherited: Option<&Branch<R>>,
    ) -> Result<R, MatchError> {
        let Some(variant) = subject.variant() else {
            debug!(kind = subject.kind(), "mapped pattern rejected non-monad subject");
            return Err(MatchError::not_a_monad(subject.kind()));
        };
        let fallback = self.default.as_ref().or(inherited);
        let payload = subject.payload().cloned().unwrap_or_default();

        match self.arm(variant) {
            Some(Arm::Branch(branch)) => {
                trace!(%variant, "mapped arm selected");
                Ok(branch.produce(payload))
            }
            Some(Arm::Mapped(nested)) => {
                trace!(%variant, "descending into nested mapped pattern");
                nested.resolve(&payload, fallback)
            }
            Some(Arm::Chain(chain)) => {
                trace!(%variant, "descending into nested chain");
                chain.resolve(&payload, fallback)
            }
            None => match fallback {
                Some(default) => {
                    trace!(%variant, "mapped default taken");
                    Ok(default.produce(Value::Undefined))
                }
                None => {
                    debug!(%variant, "mapped pattern exhausted");
                    Err(MatchError::Exhausted)
                }
            },
        }
    }
}

impl<R> Default for Mapped<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Mapped<R> {
    fn clone(&self) -> Self {
        Self {
            some: self.some.clone(),
            none: self.none.clone(),
            ok: self.ok.clone(),
            err: self.err.clone(),
            default: self.default.clone(),
        }
    }
}

impl<R> fmt::Debug for Mapped<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Mapped")
            .field("Some", &self.some)
            .field("None", &self.none)
            .field("Ok", &self.ok)
            .field("Err", &self.err)
            .field("_", &self.default)
            .finish()
    }
}
