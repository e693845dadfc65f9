//! Tests for the lifting, functor and error-channel combinators.

use crate::deferred::prelude::*;
use crate::func::{compose, identity};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
struct AppError(String);

// Basic constructor tests
#[tokio::test]
async fn test_pure_returns_value() {
    assert_eq!(pure::<_, String>(3).settle().await, Ok(3));
}

#[tokio::test]
async fn test_reject_returns_error() {
    assert_eq!(
        reject::<i32, _>("error".to_string()).settle().await,
        Err("error".to_string())
    );
}

#[tokio::test]
async fn test_from_result_both_ways() {
    assert_eq!(from_result::<_, String>(Ok(1)).settle().await, Ok(1));
    assert_eq!(from_result::<i32, _>(Err("e")).settle().await, Err("e"));
}

#[tokio::test]
async fn test_from_async_is_lazy() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let deferred = from_async(move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok::<_, String>(7)
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(deferred.settle().await, Ok(7));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// Map tests
#[tokio::test]
async fn test_map_transforms_value() {
    let deferred = pure::<_, String>(1).map(|x| x * 3);
    assert_eq!(deferred.settle().await, Ok(3));
}

#[tokio::test]
async fn test_map_on_failure_doesnt_execute() {
    let deferred = reject::<i32, _>("error".to_string())
        .map(|_: i32| -> i32 { panic!("map must not run on failure") });
    assert_eq!(deferred.settle().await, Err("error".to_string()));
}

#[tokio::test]
async fn test_map_identity() {
    assert_eq!(
        pure::<_, String>(5).map(identity).settle().await,
        pure::<_, String>(5).settle().await
    );
    assert_eq!(
        reject::<i32, _>("x").map(identity).settle().await,
        reject::<i32, _>("x").settle().await
    );
}

#[tokio::test]
async fn test_map_composition() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 10;

    let composed = pure::<_, String>(4).map(compose(f, g)).settle().await;
    let chained = pure::<_, String>(4).map(f).map(g).settle().await;
    assert_eq!(composed, chained);
    assert_eq!(composed, Ok(50));
}

#[tokio::test]
async fn test_try_map_failure_becomes_rejection() {
    let deferred = pure::<_, AppError>(0).try_map(|x: i32| {
        if x == 0 {
            Err(AppError("division by zero".into()))
        } else {
            Ok(100 / x)
        }
    });
    assert_eq!(
        deferred.settle().await,
        Err(AppError("division by zero".into()))
    );
}

// Applicative laws
#[tokio::test]
async fn test_lift_identity() {
    assert_eq!(
        lift1(identity, pure::<_, String>(9)).settle().await,
        pure::<_, String>(9).settle().await
    );
}

#[tokio::test]
async fn test_lift_homomorphism() {
    let f = |x: i32| x * x;
    assert_eq!(
        lift1(f, pure::<_, String>(7)).settle().await,
        pure::<_, String>(f(7)).settle().await
    );
}

// AndThen / Flatten tests
#[tokio::test]
async fn test_and_then_chains() {
    let deferred = pure::<_, String>(21).and_then(|x| pure(x * 2));
    assert_eq!(deferred.settle().await, Ok(42));
}

#[tokio::test]
async fn test_and_then_propagates_error() {
    let deferred = reject::<i32, _>("error".to_string())
        .and_then(|_| -> Pure<i32, String> { panic!("must not run") });
    assert_eq!(deferred.settle().await, Err("error".to_string()));
}

#[tokio::test]
async fn test_flatten_inner_failure() {
    let deferred = pure::<_, String>(reject::<i32, String>("inner".into())).flatten();
    assert_eq!(deferred.settle().await, Err("inner".to_string()));
}

// MapErr tests
#[tokio::test]
async fn test_map_err_transforms_error() {
    let deferred = reject::<i32, _>("error").map_err(|e: &str| format!("wrapped: {}", e));
    assert_eq!(deferred.settle().await, Err("wrapped: error".to_string()));
}

#[tokio::test]
async fn test_map_err_preserves_success() {
    let deferred = pure::<_, &str>(42).map_err(|e| format!("wrapped: {}", e));
    assert_eq!(deferred.settle().await, Ok(42));
}

// Recover tests
#[tokio::test]
async fn test_recover_from_failure() {
    let deferred = reject::<i32, _>("error".to_string()).recover(|_| pure::<_, String>(42));
    assert_eq!(deferred.settle().await, Ok(42));
}

#[tokio::test]
async fn test_recover_not_called_on_success() {
    let deferred = pure::<_, String>(5)
        .recover(|_| -> Pure<i32, String> { panic!("handler should not be called") });
    assert_eq!(deferred.settle().await, Ok(5));
}

#[tokio::test]
async fn test_recover_can_refail() {
    let deferred = reject::<i32, _>(404).recover(|code| reject::<i32, _>(AppError(format!("{}", code))));
    assert_eq!(deferred.settle().await, Err(AppError("404".into())));
}

#[tokio::test]
async fn test_recover_with_async_handler() {
    let deferred = reject::<i32, _>("cache miss".to_string()).recover(|_| {
        from_async(|| async {
            tokio::task::yield_now().await;
            Ok::<_, String>(11)
        })
    });
    assert_eq!(deferred.settle().await, Ok(11));
}

#[tokio::test]
async fn test_recover_with_result() {
    let recovered = reject::<i32, _>("e").recover_with(|_| Ok::<_, String>(1));
    assert_eq!(recovered.settle().await, Ok(1));

    let transformed =
        reject::<i32, _>("e").recover_with(|e| Err::<i32, _>(AppError(e.to_uppercase())));
    assert_eq!(transformed.settle().await, Err(AppError("E".into())));
}

// Bimap tests
#[tokio::test]
async fn test_bimap_success_side() {
    let deferred = pure::<_, i32>(2).bimap(|x| Ok(x * 10), |_| pure::<i32, String>(0));
    assert_eq!(deferred.settle().await, Ok(20));
}

#[tokio::test]
async fn test_bimap_success_handler_failure() {
    let deferred = pure::<_, i32>(2).bimap(
        |_| Err("rejected by success handler".to_string()),
        |_| pure::<i32, String>(0),
    );
    assert_eq!(
        deferred.settle().await,
        Err("rejected by success handler".to_string())
    );
}

#[tokio::test]
async fn test_bimap_failure_side_recovers() {
    let deferred = reject::<i32, _>(7).bimap(|x| Ok(x * 10), |e| pure::<i32, String>(-e));
    assert_eq!(deferred.settle().await, Ok(-7));
}

#[tokio::test]
async fn test_bimap_failure_side_rethrows_transformed() {
    let deferred = reject::<i32, _>(7).bimap(
        |x| Ok(x * 10),
        |e| reject::<i32, _>(AppError(format!("code {}", e))),
    );
    assert_eq!(deferred.settle().await, Err(AppError("code 7".into())));
}

#[tokio::test]
async fn test_bimap_runs_exactly_one_side() {
    let successes = Arc::new(AtomicUsize::new(0));
    let failures = Arc::new(AtomicUsize::new(0));
    let (s, f) = (successes.clone(), failures.clone());

    let deferred = pure::<_, String>(1).bimap(
        move |x| {
            s.fetch_add(1, Ordering::SeqCst);
            Ok(x)
        },
        move |_| {
            f.fetch_add(1, Ordering::SeqCst);
            pure::<i32, String>(0)
        },
    );

    assert_eq!(deferred.settle().await, Ok(1));
    assert_eq!(successes.load(Ordering::SeqCst), 1);
    assert_eq!(failures.load(Ordering::SeqCst), 0);
}

// to_deferred tests
#[tokio::test]
async fn test_to_deferred() {
    let positive = to_deferred(|x: &i32| *x > 0, |_| AppError("not positive".into()));

    assert_eq!(positive(10).settle().await, Ok(10));
    assert_eq!(
        positive(-10).settle().await,
        Err(AppError("not positive".into()))
    );
}

#[tokio::test]
async fn test_to_deferred_error_sees_value() {
    let short = to_deferred(|s: &String| s.len() < 4, |s| format!("'{}' is too long", s));
    assert_eq!(
        short("abcdef".to_string()).settle().await,
        Err("'abcdef' is too long".to_string())
    );
}

// void tests
#[tokio::test]
async fn test_void() {
    assert_eq!(pure::<_, String>(42).void().settle().await, Ok(()));
    assert_eq!(void(reject::<i32, _>("e")).settle().await, Err("e"));
}

// shared tests
#[tokio::test]
async fn test_shared_runs_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let token = from_async(move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok::<_, String>("token".to_string())
    })
    .shared();

    let both = lift2(
        |a: String, b: String| format!("{a}+{b}"),
        token.clone(),
        token,
    );

    assert_eq!(both.settle().await, Ok("token+token".to_string()));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_shared_failure_seen_by_every_clone() {
    let failed = reject::<i32, _>("down".to_string()).shared();
    assert_eq!(failed.clone().settle().await, Err("down".to_string()));
    assert_eq!(failed.settle().await, Err("down".to_string()));
}

// Validation pipeline
fn not_empty(field: &'static str) -> impl Fn(Option<String>) -> FromResult<String, String> {
    move |value| from_result(value.ok_or_else(|| format!("Field {} cannot be empty", field)))
}

#[derive(Debug, PartialEq)]
struct Query {
    email: String,
    password: String,
}

#[tokio::test]
async fn test_validation_resolves() {
    let query = lift2(
        |email, password| Query { email, password },
        not_empty("email")(Some("a@b.c".to_string())),
        not_empty("password")(Some("ppp".to_string())),
    );
    assert_eq!(
        query.settle().await,
        Ok(Query {
            email: "a@b.c".to_string(),
            password: "ppp".to_string()
        })
    );
}

#[tokio::test]
async fn test_validation_fails_on_missing_field() {
    let query = lift2(
        |email, password| Query { email, password },
        not_empty("email")(Some("a@b.c".to_string())),
        not_empty("password")(None),
    );
    assert_eq!(
        query.settle().await,
        Err("Field password cannot be empty".to_string())
    );
}
