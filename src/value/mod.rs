//! Dynamic runtime values.
//!
//! The matching engine dispatches on the shape of arbitrary values. This
//! module defines that value universe:
//!
//! - [`Value`]: scalars, error values, arrays, objects, function values and
//!   boxed [`Maybe`](crate::monad::Maybe) / [`Outcome`](crate::monad::Outcome)
//!   values
//! - [`Function`]: a shared callable compared by identity
//!
//! # Examples
//!
//! ```rust
//! use monadic_match::value::Value;
//!
//! let response = Value::ok(Value::object([("status", 200)]));
//! assert!(response.is_monad());
//! assert_eq!(
//!     response.payload().and_then(|body| body.get("status")),
//!     Some(&Value::from(200))
//! );
//! ```

mod dynamic;
mod function;

pub use dynamic::Value;
pub use function::Function;
