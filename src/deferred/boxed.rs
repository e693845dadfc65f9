//! BoxedDeferred - type-erased deferred for opt-in boxing.
//!
//! Use `BoxedDeferred` when you need to:
//! - Store different deferred types in a collection
//! - Return different deferreds from match arms
//! - Build the stage list of a [`pipe`](crate::deferred::pipe)

use std::future::Future;
use std::pin::Pin;

use crate::deferred::trait_def::Deferred;

/// A boxed future that is Send.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A type-erased deferred.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferreds: Vec<BoxedDeferred<i32, String>> = vec![
///     pure(1).boxed(),
///     pure(2).map(|x| x * 2).boxed(),
/// ];
///
/// assert_eq!(sequence(deferreds).settle().await, Ok(vec![1, 4]));
/// # });
/// ```
pub struct BoxedDeferred<T, E> {
    future: BoxFuture<'static, Result<T, E>>,
}

impl<T, E> std::fmt::Debug for BoxedDeferred<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedDeferred")
            .field("future", &"<future>")
            .finish()
    }
}

impl<T, E> BoxedDeferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Erase the type of any deferred.
    pub fn new<D>(deferred: D) -> Self
    where
        D: Deferred<Output = T, Error = E> + 'static,
    {
        BoxedDeferred {
            future: Box::pin(deferred.settle()),
        }
    }
}

impl<T, E> Deferred for BoxedDeferred<T, E>
where
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    fn settle(self) -> impl Future<Output = Result<T, E>> + Send {
        self.future
    }
}
