//! Chaining combinators - sequence a dependent deferred after another.

use crate::deferred::trait_def::Deferred;

/// AndThen combinator - chains a dependent deferred.
///
/// The next deferred is only created once the inner one has succeeded.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = pure::<_, String>(21).and_then(|x| pure(x * 2));
/// assert_eq!(deferred.settle().await, Ok(42));
/// # });
/// ```
pub struct AndThen<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for AndThen<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AndThen")
            .field("inner", &"<deferred>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, D2> Deferred for AndThen<Inner, F>
where
    Inner: Deferred,
    D2: Deferred<Error = Inner::Error>,
    F: FnOnce(Inner::Output) -> D2 + Send,
{
    type Output = D2::Output;
    type Error = Inner::Error;

    async fn settle(self) -> Result<Self::Output, Self::Error> {
        let value = self.inner.settle().await?;
        (self.f)(value).settle().await
    }
}

/// Flatten combinator - settles a deferred whose success value is itself
/// a deferred.
///
/// Produced by lifting a function that returns a deferred.
#[derive(Debug)]
pub struct Flatten<Inner> {
    pub(crate) inner: Inner,
}

impl<Inner> Deferred for Flatten<Inner>
where
    Inner: Deferred,
    Inner::Output: Deferred<Error = Inner::Error>,
{
    type Output = <Inner::Output as Deferred>::Output;
    type Error = Inner::Error;

    async fn settle(self) -> Result<Self::Output, Self::Error> {
        self.inner.settle().await?.settle().await
    }
}
