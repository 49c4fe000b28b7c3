#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! These tests verify that the tagged containers serialize and deserialize
//! with their variant names.

use monadic_match::monad::{Maybe, Outcome};
use rstest::rstest;

#[rstest]
fn test_maybe_json_roundtrip() {
    let present: Maybe<i32> = Maybe::Some(42);
    let absent: Maybe<i32> = Maybe::None;

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    assert_eq!(present_json, r#"{"Some":42}"#);
    assert_eq!(absent_json, r#""None""#);
    assert_eq!(serde_json::from_str::<Maybe<i32>>(&present_json).unwrap(), present);
    assert_eq!(serde_json::from_str::<Maybe<i32>>(&absent_json).unwrap(), absent);
}

#[rstest]
fn test_outcome_json_roundtrip() {
    let success: Outcome<i32, String> = Outcome::Ok(1);
    let failure: Outcome<i32, String> = Outcome::Err("bad".to_string());

    let success_json = serde_json::to_string(&success).unwrap();
    let failure_json = serde_json::to_string(&failure).unwrap();

    assert_eq!(failure_json, r#"{"Err":"bad"}"#);
    assert_eq!(
        serde_json::from_str::<Outcome<i32, String>>(&success_json).unwrap(),
        success
    );
    assert_eq!(
        serde_json::from_str::<Outcome<i32, String>>(&failure_json).unwrap(),
        failure
    );
}
