//! Adapters from plain futures into the Deferred world.

use std::future::Future;

use crate::deferred::trait_def::Deferred;

/// A future resolving to a `Result`, viewed as a Deferred.
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
pub struct FromFuture<Fut> {
    future: Fut,
}

impl<Fut> std::fmt::Debug for FromFuture<Fut> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFuture")
            .field("future", &"<future>")
            .finish()
    }
}

impl<Fut> FromFuture<Fut> {
    /// Wrap a future.
    pub fn new(future: Fut) -> Self {
        FromFuture { future }
    }
}

impl<Fut, T, E> Deferred for FromFuture<Fut>
where
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    fn settle(self) -> impl Future<Output = Result<T, E>> + Send {
        self.future
    }
}

/// A deferred whose future is only created when it is settled.
///
/// Use this for operations that should not be constructed until a
/// combinator decides to drive them.
pub struct FromAsync<F> {
    f: F,
}

impl<F> std::fmt::Debug for FromAsync<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromAsync")
            .field("f", &"<function>")
            .finish()
    }
}

impl<F> FromAsync<F> {
    /// Wrap a future factory.
    pub fn new(f: F) -> Self {
        FromAsync { f }
    }
}

impl<F, Fut, T, E> Deferred for FromAsync<F>
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = Result<T, E>> + Send,
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn settle(self) -> Result<T, E> {
        (self.f)().await
    }
}
