//! Constructor functions for creating deferreds.
//!
//! These functions provide ergonomic ways to create deferreds without
//! directly constructing the combinator types.

use std::future::Future;

use crate::deferred::combinators::{FromAsync, FromFuture, FromResult, Pure, Reject, Void};
use crate::deferred::trait_def::Deferred;

/// Create a deferred that has already succeeded with the given value.
///
/// Zero-cost: no heap allocation.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = pure::<_, String>(42);
/// assert_eq!(deferred.settle().await, Ok(42));
/// # });
/// ```
pub fn pure<T, E>(value: T) -> Pure<T, E>
where
    T: Send,
    E: Send,
{
    Pure::new(value)
}

/// Create a deferred that has already failed with the given error.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = reject::<i32, _>("error".to_string());
/// assert_eq!(deferred.settle().await, Err("error".to_string()));
/// # });
/// ```
pub fn reject<T, E>(error: E) -> Reject<T, E>
where
    T: Send,
    E: Send,
{
    Reject::new(error)
}

/// Create a deferred from an already-known `Result`.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = from_result::<_, String>(Ok(42));
/// assert_eq!(deferred.settle().await, Ok(42));
/// # });
/// ```
pub fn from_result<T, E>(result: Result<T, E>) -> FromResult<T, E>
where
    T: Send,
    E: Send,
{
    FromResult::new(result)
}

/// View a future that resolves to a `Result` as a deferred.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = from_future(async { Ok::<_, String>(42) });
/// assert_eq!(deferred.settle().await, Ok(42));
/// # });
/// ```
pub fn from_future<T, E, Fut>(future: Fut) -> FromFuture<Fut>
where
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
{
    FromFuture::new(future)
}

/// Create a deferred from an async function that is only called when the
/// deferred is settled.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = from_async(|| async { Ok::<_, String>(42) });
/// assert_eq!(deferred.settle().await, Ok(42));
/// # });
/// ```
pub fn from_async<T, E, F, Fut>(f: F) -> FromAsync<F>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
{
    FromAsync::new(f)
}

/// Turn a synchronous predicate into a validating deferred constructor.
///
/// The returned function resolves with its argument when `predicate` holds
/// and fails with `to_error(value)` otherwise. Use it as a building block
/// for validation pipelines.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let positive = to_deferred(|x: &i32| *x > 0, |_| "not positive".to_string());
///
/// assert_eq!(positive(10).settle().await, Ok(10));
/// assert_eq!(positive(-10).settle().await, Err("not positive".to_string()));
/// # });
/// ```
pub fn to_deferred<A, E, P, M>(predicate: P, to_error: M) -> impl Fn(A) -> FromResult<A, E>
where
    P: Fn(&A) -> bool,
    M: Fn(A) -> E,
{
    move |value| {
        if predicate(&value) {
            FromResult::new(Ok(value))
        } else {
            FromResult::new(Err(to_error(value)))
        }
    }
}

/// Discard the success value of a deferred, keeping only "done".
///
/// Failure propagates unchanged.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// assert_eq!(void(pure::<_, String>(42)).settle().await, Ok(()));
/// # });
/// ```
pub fn void<D: Deferred>(deferred: D) -> Void<D> {
    Void { inner: deferred }
}

/// Create a deferred that succeeds with `value` after `delay`.
///
/// Requires a tokio runtime with the time driver enabled.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = delayed::<_, String>("token abc", Duration::from_millis(5));
/// assert_eq!(deferred.settle().await, Ok("token abc"));
/// # });
/// ```
#[cfg(feature = "async")]
pub fn delayed<T, E>(
    value: T,
    delay: std::time::Duration,
) -> FromFuture<impl Future<Output = Result<T, E>> + Send>
where
    T: Send,
    E: Send,
{
    FromFuture::new(async move {
        tokio::time::sleep(delay).await;
        Ok(value)
    })
}

/// Create a deferred that fails with `error` after `delay`.
///
/// Requires a tokio runtime with the time driver enabled.
#[cfg(feature = "async")]
pub fn delayed_reject<T, E>(
    error: E,
    delay: std::time::Duration,
) -> FromFuture<impl Future<Output = Result<T, E>> + Send>
where
    T: Send,
    E: Send,
{
    FromFuture::new(async move {
        tokio::time::sleep(delay).await;
        Err(error)
    })
}
