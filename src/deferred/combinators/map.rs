//! Map combinators - transform the success value of a deferred.

use crate::deferred::trait_def::Deferred;

/// Map combinator - transforms the success value.
///
/// If the inner deferred fails, the failure passes through and the
/// function is never called.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = pure::<_, String>(21).map(|x| x * 2);
/// assert_eq!(deferred.settle().await, Ok(42));
/// # });
/// ```
pub struct Map<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Map<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &"<deferred>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, U> Deferred for Map<Inner, F>
where
    Inner: Deferred,
    F: FnOnce(Inner::Output) -> U + Send,
    U: Send,
{
    type Output = U;
    type Error = Inner::Error;

    async fn settle(self) -> Result<U, Self::Error> {
        let value = self.inner.settle().await?;
        Ok((self.f)(value))
    }
}

/// TryMap combinator - transforms the success value with a fallible function.
///
/// An `Err` returned by the function becomes the failure of the result.
pub struct TryMap<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for TryMap<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryMap")
            .field("inner", &"<deferred>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, U> Deferred for TryMap<Inner, F>
where
    Inner: Deferred,
    F: FnOnce(Inner::Output) -> Result<U, Inner::Error> + Send,
    U: Send,
{
    type Output = U;
    type Error = Inner::Error;

    async fn settle(self) -> Result<U, Self::Error> {
        let value = self.inner.settle().await?;
        (self.f)(value)
    }
}
