//! Filter combinators - keep the values a predicate accepts.

use futures::future::join_all;

use crate::deferred::trait_def::Deferred;

/// Filter combinator - tests plain values with an asynchronous predicate.
///
/// All predicate deferreds are settled concurrently. Values whose predicate
/// succeeded with `true` are kept in their original relative order. A
/// failing predicate fails the whole filter with the lowest-indexed
/// failure.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let kept = filter(vec![1, 4, 6, 7], |x: &i32| pure::<_, String>(*x > 3));
/// assert_eq!(kept.settle().await, Ok(vec![4, 6, 7]));
/// # });
/// ```
pub struct Filter<A, P> {
    pub(crate) items: Vec<A>,
    pub(crate) predicate: P,
}

impl<A, P> std::fmt::Debug for Filter<A, P>
where
    A: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("items", &self.items)
            .field("predicate", &"<predicate>")
            .finish()
    }
}

impl<A, P, D> Deferred for Filter<A, P>
where
    A: Send,
    P: FnMut(&A) -> D + Send,
    D: Deferred<Output = bool>,
{
    type Output = Vec<A>;
    type Error = D::Error;

    async fn settle(self) -> Result<Vec<A>, D::Error> {
        let Filter {
            items,
            mut predicate,
        } = self;

        let checks: Vec<D> = items.iter().map(&mut predicate).collect();
        let verdicts = join_all(checks.into_iter().map(Deferred::settle)).await;

        let mut kept = Vec::with_capacity(items.len());
        for (item, verdict) in items.into_iter().zip(verdicts) {
            if verdict? {
                kept.push(item);
            }
        }
        Ok(kept)
    }
}

/// FilterSettled combinator - joins deferred values, then tests each
/// settled value with a synchronous predicate.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let inputs = vec![pure::<_, String>(1), pure(4), pure(6), pure(7)];
/// let kept = filter_settled(inputs, |x: &i32| *x > 3);
/// assert_eq!(kept.settle().await, Ok(vec![4, 6, 7]));
/// # });
/// ```
pub struct FilterSettled<D, P> {
    pub(crate) items: Vec<D>,
    pub(crate) predicate: P,
}

impl<D, P> std::fmt::Debug for FilterSettled<D, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterSettled")
            .field("items", &self.items.len())
            .field("predicate", &"<predicate>")
            .finish()
    }
}

impl<D, P> Deferred for FilterSettled<D, P>
where
    D: Deferred,
    P: FnMut(&D::Output) -> bool + Send,
{
    type Output = Vec<D::Output>;
    type Error = D::Error;

    async fn settle(self) -> Result<Self::Output, Self::Error> {
        let FilterSettled {
            items,
            mut predicate,
        } = self;

        let settled = join_all(items.into_iter().map(Deferred::settle)).await;
        let values = settled.into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(values.into_iter().filter(|value| predicate(value)).collect())
    }
}
