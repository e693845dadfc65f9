//! Shared combinator - a deferred whose outcome can be observed many times.

use std::future::Future;

use futures::FutureExt;

use crate::deferred::boxed::BoxFuture;
use crate::deferred::trait_def::Deferred;

/// A cloneable deferred.
///
/// Every clone settles to the same outcome, and the underlying operation
/// runs once no matter how many clones are settled.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let token = pure::<_, String>("token abc".to_string()).shared();
///
/// let header = token.clone().map(|t| format!("Bearer {}", t));
/// let length = token.map(|t| t.len());
///
/// assert_eq!(
///     lift2(|h, l| (h, l), header, length).settle().await,
///     Ok(("Bearer token abc".to_string(), 9))
/// );
/// # });
/// ```
pub struct Shared<T, E> {
    inner: futures::future::Shared<BoxFuture<'static, Result<T, E>>>,
}

impl<T, E> Clone for Shared<T, E>
where
    T: Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Shared {
            inner: self.inner.clone(),
        }
    }
}

impl<T, E> std::fmt::Debug for Shared<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shared")
            .field("inner", &"<shared future>")
            .finish()
    }
}

impl<T, E> Shared<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Share the outcome of a deferred.
    pub fn new<D>(deferred: D) -> Self
    where
        D: Deferred<Output = T, Error = E> + 'static,
    {
        let future: BoxFuture<'static, Result<T, E>> = Box::pin(deferred.settle());
        Shared {
            inner: future.shared(),
        }
    }
}

impl<T, E> Deferred for Shared<T, E>
where
    T: Clone + Send + Sync,
    E: Clone + Send + Sync,
{
    type Output = T;
    type Error = E;

    fn settle(self) -> impl Future<Output = Result<T, E>> + Send {
        self.inner
    }
}
