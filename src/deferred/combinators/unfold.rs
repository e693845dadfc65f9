//! Generator combinators - sequential loops driven by deferred steps.

use crate::deferred::trait_def::Deferred;

/// Unfold combinator - threads an accumulator through repeated steps.
///
/// Each step receives the current accumulator and state and settles to
/// the next accumulator plus either `Some(next_state)` to continue or
/// `None` to stop. Steps run strictly one after another and the number of
/// steps is not bounded in advance. A failing step fails the result.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let collected = unfold(Vec::new(), 1, |mut acc: Vec<i32>, n| {
///     if n > 5 {
///         return pure::<_, String>((acc, None));
///     }
///     acc.push(n);
///     pure((acc, Some(n + 1)))
/// });
/// assert_eq!(collected.settle().await, Ok(vec![1, 2, 3, 4, 5]));
/// # });
/// ```
pub struct Unfold<B, S, F> {
    pub(crate) acc: B,
    pub(crate) state: S,
    pub(crate) f: F,
}

impl<B, S, F> std::fmt::Debug for Unfold<B, S, F>
where
    B: std::fmt::Debug,
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unfold")
            .field("acc", &self.acc)
            .field("state", &self.state)
            .field("f", &"<function>")
            .finish()
    }
}

impl<B, S, F, D> Deferred for Unfold<B, S, F>
where
    B: Send,
    S: Send,
    F: FnMut(B, S) -> D + Send,
    D: Deferred<Output = (B, Option<S>)>,
{
    type Output = B;
    type Error = D::Error;

    async fn settle(self) -> Result<B, D::Error> {
        let Unfold { mut acc, state, mut f } = self;
        let mut next = Some(state);

        #[cfg(feature = "tracing")]
        let mut steps = 0_usize;

        while let Some(state) = next {
            (acc, next) = f(acc, state).settle().await?;

            #[cfg(feature = "tracing")]
            {
                steps += 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(steps, "unfold finished");

        Ok(acc)
    }
}

/// CollectWhile combinator - builds a list from repeated deferred steps.
///
/// Each step receives the current state and settles to
/// `Some((value, next_state))` to emit `value` and continue, or `None` to
/// stop. Emitted values are returned in emission order, and no step runs
/// after the one that produced `None`.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let countdown = collect_while(3, |n: u32| {
///     pure::<_, String>(if n == 0 { None } else { Some((n, n - 1)) })
/// });
/// assert_eq!(countdown.settle().await, Ok(vec![3, 2, 1]));
/// # });
/// ```
pub struct CollectWhile<S, F> {
    pub(crate) seed: S,
    pub(crate) f: F,
}

impl<S, F> std::fmt::Debug for CollectWhile<S, F>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectWhile")
            .field("seed", &self.seed)
            .field("f", &"<function>")
            .finish()
    }
}

impl<S, F, D, T> Deferred for CollectWhile<S, F>
where
    S: Send,
    T: Send,
    F: FnMut(S) -> D + Send,
    D: Deferred<Output = Option<(T, S)>>,
{
    type Output = Vec<T>;
    type Error = D::Error;

    async fn settle(self) -> Result<Vec<T>, D::Error> {
        let CollectWhile { seed, mut f } = self;
        let mut emitted = Vec::new();
        let mut state = seed;

        while let Some((value, next)) = f(state).settle().await? {
            emitted.push(value);
            state = next;
        }

        Ok(emitted)
    }
}
