//! Sequence combinator - joins a list of deferreds in parallel.

use futures::future::join_all;

use crate::deferred::trait_def::Deferred;

/// Sequence combinator - settles every deferred concurrently and collects
/// the values in input order.
///
/// Every element is awaited to settlement even when another has already
/// failed. The result fails with the failure of the lowest-indexed
/// failing element.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let all = sequence(vec![pure::<_, String>(1), pure(2), pure(3)]);
/// assert_eq!(all.settle().await, Ok(vec![1, 2, 3]));
///
/// let failed = sequence(vec![reject::<i32, _>(1), reject(2)]);
/// assert_eq!(failed.settle().await, Err(1));
/// # });
/// ```
#[derive(Debug)]
pub struct Sequence<D> {
    pub(crate) items: Vec<D>,
}

impl<D: Deferred> Deferred for Sequence<D> {
    type Output = Vec<D::Output>;
    type Error = D::Error;

    async fn settle(self) -> Result<Self::Output, Self::Error> {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.items.len(), "joining deferreds");

        let settled = join_all(self.items.into_iter().map(Deferred::settle)).await;

        // `collect` stops at the first `Err` in index order.
        settled.into_iter().collect()
    }
}
