//! The `chain!` macro for declaring chained patterns.

/// Builds a [`Chain`](crate::matching::Chain) from `condition => result;`
/// branches.
///
/// # Syntax
///
/// - `condition => expr;` - a literal result, cloned when selected
/// - `condition => fn closure;` - a result computed from the subject
/// - `_ => expr;` - a literal default
/// - `_ => fn closure;` - a default computed from the subject
///
/// The default, if any, must come last.
///
/// # Examples
///
/// ```
/// use monadic_match::chain;
/// use monadic_match::matching::{Condition, match_on};
///
/// let pattern = chain! {
///     5 => "five";
///     Condition::predicate(|v| v.as_number().is_some_and(|n| n < 10.0)) => "<10";
///     _ => fn |_| "other";
/// };
///
/// assert_eq!(match_on(5, &pattern), Ok("five"));
/// assert_eq!(match_on(7, &pattern), Ok("<10"));
/// assert_eq!(match_on(20, &pattern), Ok("other"));
/// ```
///
/// ## Computed results
///
/// ```
/// use monadic_match::chain;
/// use monadic_match::matching::{Condition, match_on};
/// use monadic_match::value::Value;
///
/// let pattern = chain! {
///     Condition::object([("id", Condition::Any)]) => fn |user: Value| format!("user {}", user.get("id").unwrap());
///     _ => "anonymous".to_string();
/// };
///
/// assert_eq!(match_on(Value::object([("id", 7)]), &pattern).unwrap(), "user 7");
/// assert_eq!(match_on(Value::Null, &pattern).unwrap(), "anonymous");
/// ```
#[macro_export]
macro_rules! chain {
    (@accumulate $chain:expr;) => {
        $chain
    };

    (@accumulate $chain:expr; _ => fn $default:expr $(;)?) => {
        $chain.otherwise($default)
    };

    (@accumulate $chain:expr; _ => $default:expr $(;)?) => {
        $chain.otherwise_value($default)
    };

    (@accumulate $chain:expr; $condition:expr => fn $function:expr; $($rest:tt)*) => {
        $crate::chain!(@accumulate $chain.when_with($condition, $function); $($rest)*)
    };

    (@accumulate $chain:expr; $condition:expr => $result:expr; $($rest:tt)*) => {
        $crate::chain!(@accumulate $chain.when($condition, $result); $($rest)*)
    };

    ($($body:tt)*) => {
        $crate::chain!(@accumulate $crate::matching::Chain::new(); $($body)*)
    };
}
