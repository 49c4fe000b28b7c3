#![cfg(feature = "matching")]
//! Tests for the `chain!` macro.

use monadic_match::chain;
use monadic_match::matching::{Condition, MatchError, any, match_on};
use monadic_match::value::Value;
use rstest::rstest;

#[rstest]
fn literal_branches_and_computed_default() {
    let pattern = chain! {
        5 => "five";
        Condition::predicate(|v| v.as_number().is_some_and(|n| n < 10.0)) => "<10";
        _ => fn |_| "other";
    };

    assert_eq!(match_on(5, &pattern), Ok("five"));
    assert_eq!(match_on(7, &pattern), Ok("<10"));
    assert_eq!(match_on(20, &pattern), Ok("other"));
}

#[rstest]
fn computed_branches_receive_subject() {
    let pattern = chain! {
        Condition::object([("name", any())]) => fn |person: Value| format!("hi {}", person.get("name").map_or_else(String::new, ToString::to_string));
        _ => String::from("who?");
    };

    assert_eq!(
        match_on(Value::object([("name", "ada")]), &pattern),
        Ok("hi ada".to_string())
    );
    assert_eq!(match_on(3, &pattern), Ok("who?".to_string()));
}

#[rstest]
fn without_default_exhausts() {
    let pattern = chain! {
        1 => 'a';
        2 => 'b';
    };

    assert_eq!(match_on(2, &pattern), Ok('b'));
    assert_eq!(match_on(3, &pattern), Err(MatchError::Exhausted));
    assert!(!pattern.has_default());
    assert_eq!(pattern.len(), 2);
}
