//! Fold combinator - sequential left fold with a deferred step.

use crate::deferred::trait_def::Deferred;

/// Fold combinator - reduces a list one element at a time.
///
/// The step for element `i + 1` is not created until the step for element
/// `i` has succeeded. The first failing step stops the fold and becomes
/// the failure of the result. An empty list resolves to the initial
/// accumulator.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let total = fold(vec![2, 3, 4], 1, |acc, x| pure::<_, String>(acc + x));
/// assert_eq!(total.settle().await, Ok(10));
/// # });
/// ```
pub struct Fold<I, B, F> {
    pub(crate) items: I,
    pub(crate) init: B,
    pub(crate) f: F,
}

impl<I, B, F> std::fmt::Debug for Fold<I, B, F>
where
    B: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fold")
            .field("items", &"<items>")
            .field("init", &self.init)
            .field("f", &"<function>")
            .finish()
    }
}

impl<I, B, F, D> Deferred for Fold<I, B, F>
where
    I: IntoIterator + Send,
    I::IntoIter: Send,
    I::Item: Send,
    B: Send,
    F: FnMut(B, I::Item) -> D + Send,
    D: Deferred<Output = B>,
{
    type Output = B;
    type Error = D::Error;

    async fn settle(self) -> Result<B, D::Error> {
        let Fold {
            items,
            mut init,
            mut f,
        } = self;

        for (step, item) in items.into_iter().enumerate() {
            init = match f(init, item).settle().await {
                Ok(next) => next,
                Err(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(step, "fold step failed, stopping");
                    #[cfg(not(feature = "tracing"))]
                    let _ = step;
                    return Err(error);
                }
            };
        }

        Ok(init)
    }
}
