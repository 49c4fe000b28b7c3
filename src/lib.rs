//! # monadic-match
//!
//! Immutable Option/Result-style monads and a runtime pattern-matching
//! engine that dispatches on the shape of dynamic values.
//!
//! ## Overview
//!
//! - **Monads**: [`Maybe`](monad::Maybe) (`Some`/`None`) and
//!   [`Outcome`](monad::Outcome) (`Ok`/`Err`), tagged at construction
//! - **Values**: [`Value`](value::Value), the dynamic value universe the
//!   engine inspects, including boxed monads and identity-compared functions
//! - **Matching**: chained patterns (ordered condition/result branches) and
//!   mapped patterns (arms keyed by variant with inherited defaults)
//!
//! ## Feature Flags
//!
//! - `matching`: the matching engine (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe` and `Outcome`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use monadic_match::prelude::*;
//!
//! let pattern = Mapped::new()
//!     .on(Variant::Ok, Mapped::new().some(|n| format!("found {n}")))
//!     .otherwise(|| "nothing".to_string());
//!
//! assert_eq!(match_on(Value::ok(Value::some(10)), &pattern).unwrap(), "found 10");
//! assert_eq!(match_on(Value::ok(Value::NONE), &pattern).unwrap(), "nothing");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use monadic_match::prelude::*;
/// ```
pub mod prelude {
    pub use crate::monad::*;
    pub use crate::value::*;

    #[cfg(feature = "matching")]
    pub use crate::matching::*;
}

pub mod monad;
pub mod value;

#[cfg(feature = "matching")]
pub mod matching;
