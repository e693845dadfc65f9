//! Pipe combinator - left-to-right composition of deferred-returning stages.

use crate::deferred::boxed::BoxedDeferred;
use crate::deferred::trait_def::Deferred;

/// One stage of a [`Pipe`]: a boxed function from a value to a boxed
/// deferred of the same type.
pub type Stage<T, E> = Box<dyn FnOnce(T) -> BoxedDeferred<T, E> + Send>;

/// Pipe combinator - feeds the seed through each stage in order.
///
/// Stage `i + 1` only runs after stage `i` succeeded; a failure skips
/// every remaining stage. With no stages the seed is returned.
///
/// For stages whose types differ, chain them with
/// [`pipe!`](crate::pipe!) instead.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let triple = || stage(|x: i32| pure::<_, String>(x * 3));
/// let result = pipe(1, vec![triple(), triple()]);
/// assert_eq!(result.settle().await, Ok(9));
/// # });
/// ```
pub struct Pipe<T, E> {
    pub(crate) seed: T,
    pub(crate) stages: Vec<Stage<T, E>>,
}

impl<T, E> std::fmt::Debug for Pipe<T, E>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipe")
            .field("seed", &self.seed)
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl<T, E> Deferred for Pipe<T, E>
where
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn settle(self) -> Result<T, E> {
        let mut value = self.seed;
        for stage in self.stages {
            value = stage(value).settle().await?;
        }
        Ok(value)
    }
}
