//! Runtime pattern matching over dynamic values.
//!
//! This module provides the matching engine:
//!
//! - [`Condition`]: a declared condition, classified once into a closed set of
//!   kinds and evaluated by [`evaluate`]
//! - [`Chain`]: ordered `(condition, result)` branches, first match wins
//! - [`Mapped`]: arms keyed by `Some`/`None`/`Ok`/`Err` with hierarchical
//!   `_` defaults
//! - [`match_on`] and [`compile`]: the entry points
//!
//! # Examples
//!
//! ## Chained patterns
//!
//! ```rust
//! use monadic_match::matching::{Chain, Condition, match_on};
//! use monadic_match::value::Value;
//!
//! let pattern = Chain::new()
//!     .when(Condition::object([("a", 5)]), "a=5")
//!     .when(Condition::object([("b", Condition::object([("c", 5)]))]), "c=5")
//!     .otherwise(|_| "other");
//!
//! let subject = Value::object([
//!     ("a", Value::from(50)),
//!     ("b", Value::object([("c", 5)])),
//! ]);
//! assert_eq!(match_on(subject, &pattern), Ok("c=5"));
//! ```
//!
//! ## Mapped patterns
//!
//! ```rust
//! use monadic_match::matching::{Mapped, match_on};
//! use monadic_match::value::Value;
//!
//! let describe = Mapped::new()
//!     .ok(|value| format!("loaded {value}"))
//!     .err(|error| format!("failed: {error}"));
//!
//! assert_eq!(match_on(Value::ok(3), &describe).unwrap(), "loaded 3");
//! assert_eq!(match_on(Value::err("timeout"), &describe).unwrap(), "failed: timeout");
//! ```
//!
//! ## Functions as values
//!
//! A bare function in a condition is a predicate. Wrap it with [`opaque`] to
//! compare it by identity instead:
//!
//! ```rust
//! use monadic_match::matching::{Chain, opaque, match_on};
//! use monadic_match::value::{Function, Value};
//!
//! let handler = Function::new(|_| Value::Null);
//! let pattern = Chain::new()
//!     .when(opaque(handler.clone()), "registered handler")
//!     .otherwise_value("unknown");
//!
//! assert_eq!(match_on(handler, &pattern), Ok("registered handler"));
//! assert_eq!(match_on(Value::function(|_| Value::Null), &pattern), Ok("unknown"));
//! ```

mod branch;
mod chain;
mod chain_macro;
mod condition;
mod error;
mod mapped;
mod pattern;

pub use branch::{Arm, Branch};
pub use chain::Chain;
pub use condition::{Condition, any, default_marker, evaluate, opaque};
pub use error::MatchError;
pub use mapped::Mapped;
pub use pattern::{Matcher, Pattern, PatternShape, Resolve, compile, match_on};
