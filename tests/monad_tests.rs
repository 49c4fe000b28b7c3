//! Unit tests for the `Maybe` and `Outcome` tagged containers.
//!
//! - Construction fixes the variant tag
//! - Wrong-tag extraction reports `UnwrapError`
//! - Conversions between the Option and Result families preserve payloads

use monadic_match::monad::{Family, Maybe, Outcome, Tagged, UnwrapError, Variant};
use rstest::rstest;

// =============================================================================
// Tags
// =============================================================================

#[rstest]
fn maybe_tags() {
    let present: Maybe<i32> = Maybe::Some(1);
    let absent: Maybe<i32> = Maybe::None;

    assert_eq!(present.variant(), Variant::Some);
    assert!(present.tag());
    assert_eq!(absent.variant(), Variant::None);
    assert!(!absent.tag());
    assert_eq!(absent.family(), Family::Option);
}

#[rstest]
fn outcome_tags() {
    let success: Outcome<i32, String> = Outcome::Ok(1);
    let failure: Outcome<i32, String> = Outcome::Err("e".to_string());

    assert!(success.is_ok() && success.tag());
    assert!(failure.is_err() && !failure.tag());
    assert_eq!(failure.family(), Family::Result);
}

#[rstest]
fn none_is_a_single_value() {
    assert_eq!(Maybe::<String>::NONE, Maybe::None);
    assert_eq!(Maybe::<String>::NONE, Maybe::default());
}

// =============================================================================
// Unwrap Contract
// =============================================================================

#[rstest]
#[case(Maybe::Some(3), Ok(3))]
#[case(Maybe::None, Err(UnwrapError { expected: Variant::Some, found: Variant::None }))]
fn maybe_try_unwrap(#[case] maybe: Maybe<i32>, #[case] expected: Result<i32, UnwrapError>) {
    assert_eq!(maybe.try_unwrap(), expected);
}

#[rstest]
fn outcome_try_unwrap_both_sides() {
    let success: Outcome<i32, &str> = Outcome::Ok(1);
    let failure: Outcome<i32, &str> = Outcome::Err("bad");

    assert_eq!(success.try_unwrap(), Ok(1));
    assert_eq!(
        success.try_unwrap_err(),
        Err(UnwrapError {
            expected: Variant::Err,
            found: Variant::Ok
        })
    );
    assert_eq!(failure.try_unwrap_err(), Ok("bad"));
}

#[rstest]
#[should_panic(expected = "called unwrap expecting `Ok` on a `Err` value")]
fn outcome_unwrap_on_err_panics() {
    let failure: Outcome<i32, &str> = Outcome::Err("bad");
    let _ = failure.unwrap();
}

#[rstest]
#[should_panic(expected = "config missing")]
fn maybe_expect_uses_message() {
    let _ = Maybe::<i32>::None.expect("config missing");
}

#[rstest]
fn defaulting_accessors_never_panic() {
    assert_eq!(Maybe::<i32>::None.unwrap_or(7), 7);
    assert_eq!(Maybe::<i32>::None.unwrap_or_default(), 0);
    assert_eq!(Outcome::<i32, &str>::Err("e").unwrap_or_else(|e| e.len() as i32), 1);
    assert_eq!(Outcome::<String, ()>::Err(()).unwrap_or_default(), String::new());
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn absence_becomes_failure_with_supplied_error() {
    assert_eq!(Maybe::<i32>::None.ok_or("missing"), Outcome::Err("missing"));
    assert_eq!(Maybe::Some(2).ok_or_else(|| "missing"), Outcome::Ok(2));
}

#[rstest]
fn failure_becomes_absence() {
    assert_eq!(Outcome::<i32, &str>::Err("e").ok(), Maybe::None);
    assert_eq!(Outcome::<i32, &str>::Err("e").err(), Maybe::Some("e"));
    assert_eq!(Outcome::<i32, &str>::Ok(1).err(), Maybe::None);
}

#[rstest]
fn round_trip_through_result_family() {
    let value = Maybe::Some("x");
    assert_eq!(value.ok_or("e").ok(), value);
}

#[rstest]
fn std_conversions() {
    let maybe: Maybe<i32> = None.into();
    assert!(maybe.is_none());
    let outcome: Outcome<i32, String> = Ok(4).into();
    assert_eq!(outcome.into_result(), Ok(4));
    assert_eq!(Maybe::Some(1).into_option(), Some(1));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn and_then_short_circuits() {
    let parse = |text: &str| -> Outcome<i32, String> {
        text.parse::<i32>()
            .map_err(|error| error.to_string())
            .into()
    };

    assert_eq!(Outcome::Ok("12").and_then(parse), Outcome::Ok(12));
    assert!(Outcome::Ok("twelve").and_then(parse).is_err());
    assert_eq!(
        Outcome::<&str, String>::Err("earlier".to_string()).and_then(parse),
        Outcome::Err("earlier".to_string())
    );
}

#[rstest]
fn iteration_yields_payload_once() {
    assert_eq!(Maybe::Some(5).into_iter().collect::<Vec<_>>(), vec![5]);
    assert_eq!(Maybe::<i32>::None.iter().count(), 0);
    assert_eq!(Outcome::<i32, ()>::Ok(1).iter().count(), 1);
    assert_eq!(Outcome::<i32, ()>::Err(()).into_iter().count(), 0);
}

#[rstest]
fn predicates_on_payload() {
    assert!(Maybe::Some(2).is_some_and(|n| n == 2));
    assert!(Outcome::<i32, &str>::Ok(2).is_ok_and(|n| n > 1));
    assert!(Outcome::<i32, &str>::Err("x").is_err_and(|e| e == "x"));
}
