//! Testing utilities for code built on deferreds.
//!
//! This module provides assertion macros that settle a deferred and check its
//! outcome, plus a blocking helper for synchronous tests and property tests.
//!
//! # Examples
//!
//! ## Assertion Macros
//!
//! ```rust
//! use settle::prelude::*;
//! use settle::{assert_rejects, assert_resolves};
//!
//! # tokio_test::block_on(async {
//! assert_resolves!(pure::<_, String>(42), 42);
//! assert_rejects!(reject::<i32, _>("boom"), "boom");
//!
//! // Single-argument forms evaluate to the settled payload
//! let value = assert_resolves!(pure::<_, String>(1).map(|x| x + 1));
//! assert_eq!(value, 2);
//! # });
//! ```
//!
//! ## Blocking
//!
//! ```rust
//! use settle::prelude::*;
//! use settle::testing::settle_blocking;
//!
//! let total = fold(vec![1, 2, 3], 0, |acc, x| pure::<_, String>(acc + x));
//! assert_eq!(settle_blocking(total), Ok(6));
//! ```

use crate::deferred::Deferred;

/// Settle a deferred on the current thread, blocking until it completes.
///
/// Uses `futures::executor::block_on`, so the deferred must not depend on a
/// tokio runtime (timers from the `async` feature need one).
pub fn settle_blocking<D: Deferred>(deferred: D) -> Result<D::Output, D::Error> {
    futures::executor::block_on(deferred.settle())
}

/// Assert that a deferred resolves.
///
/// With one argument, evaluates to the resolved value. With two, also
/// asserts the value equals the expected one. Panics on rejection.
///
/// Must be used inside an async context.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
/// use settle::assert_resolves;
///
/// # tokio_test::block_on(async {
/// assert_resolves!(lift2(|a: i32, b: i32| a * b, pure::<_, String>(6), pure(7)), 42);
/// # });
/// ```
#[macro_export]
macro_rules! assert_resolves {
    ($deferred:expr) => {
        match $crate::deferred::Deferred::settle($deferred).await {
            Ok(value) => value,
            Err(e) => {
                panic!("Expected resolution, got rejection: {:?}", e);
            }
        }
    };
    ($deferred:expr, $expected:expr) => {
        match $crate::deferred::Deferred::settle($deferred).await {
            Ok(value) => assert_eq!(value, $expected),
            Err(e) => {
                panic!(
                    "Expected resolution with {:?}, got rejection: {:?}",
                    $expected, e
                );
            }
        }
    };
}

/// Assert that a deferred rejects.
///
/// With one argument, evaluates to the failure payload. With two, also
/// asserts the payload equals the expected one. Panics on resolution.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
/// use settle::assert_rejects;
///
/// # tokio_test::block_on(async {
/// let both = lift2(|a: i32, b: i32| a + b, reject::<i32, _>("a"), reject("b"));
/// assert_rejects!(both, "a");
/// # });
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($deferred:expr) => {
        match $crate::deferred::Deferred::settle($deferred).await {
            Err(e) => e,
            Ok(value) => {
                panic!("Expected rejection, got resolution: {:?}", value);
            }
        }
    };
    ($deferred:expr, $expected:expr) => {
        match $crate::deferred::Deferred::settle($deferred).await {
            Err(e) => assert_eq!(e, $expected),
            Ok(value) => {
                panic!(
                    "Expected rejection with {:?}, got resolution: {:?}",
                    $expected, value
                );
            }
        }
    };
}
