//! Tagged monadic containers.
//!
//! This module provides the two immutable, two-variant containers the
//! matching engine understands natively:
//!
//! - [`Maybe`]: a value that is present (`Some`) or absent (`None`)
//! - [`Outcome`]: a computation that succeeded (`Ok`) or failed (`Err`)
//!
//! Both implement [`Tagged`], which exposes the [`Variant`] they were
//! constructed with. Extracting a payload under the wrong variant reports an
//! [`UnwrapError`].
//!
//! # Examples
//!
//! ```rust
//! use monadic_match::monad::{Maybe, Outcome, Tagged, Variant};
//!
//! let found: Maybe<&str> = Maybe::Some("config.toml");
//! assert_eq!(found.variant(), Variant::Some);
//!
//! let loaded: Outcome<&str, i32> = found.ok_or(404);
//! assert_eq!(loaded.variant(), Variant::Ok);
//! assert_eq!(loaded.ok(), Maybe::Some("config.toml"));
//! ```

mod error;
mod maybe;
mod outcome;
mod variant;

pub use error::UnwrapError;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use variant::{Family, Tagged, Variant};
