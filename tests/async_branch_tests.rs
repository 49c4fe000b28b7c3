#![cfg(feature = "matching")]
//! Tests for branches that return pending computations.
//!
//! The engine returns whatever a branch produces without awaiting it, so
//! every branch of a pattern produces the same future type.

use std::future::Future;
use std::pin::Pin;

use monadic_match::matching::{Chain, Mapped, match_on};
use monadic_match::value::Value;

type Pending = Pin<Box<dyn Future<Output = String> + Send>>;

fn lookup() -> Mapped<Pending> {
    Mapped::new()
        .ok(|user| -> Pending {
            Box::pin(async move {
                tokio::task::yield_now().await;
                format!("hello {user}")
            })
        })
        .otherwise(|| -> Pending { Box::pin(async { "anonymous".to_string() }) })
}

#[tokio::test]
async fn mapped_branch_future_is_returned_unawaited() {
    let pending = match_on(Value::ok("ada"), &lookup()).unwrap();
    assert_eq!(pending.await, "hello ada");
}

#[tokio::test]
async fn default_branch_future_is_returned_unawaited() {
    let pending = match_on(Value::err("expired"), &lookup()).unwrap();
    assert_eq!(pending.await, "anonymous");
}

#[tokio::test]
async fn chain_branch_futures() {
    let pattern: Chain<Pending> = Chain::new()
        .when_with(1, |_| -> Pending { Box::pin(async { "one".to_string() }) })
        .otherwise(|value| -> Pending { Box::pin(async move { format!("other {value}") }) });

    assert_eq!(match_on(1, &pattern).unwrap().await, "one");
    assert_eq!(match_on(2, &pattern).unwrap().await, "other 2");
}
