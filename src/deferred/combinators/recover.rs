//! Recovery combinators - turn a failure back into a success.

use crate::deferred::trait_def::Deferred;

/// Recover combinator - handles a failure with a new deferred.
///
/// If the inner deferred succeeds, the value passes through unchanged and
/// the handler is never called. If it fails, the handler receives the
/// failure and its deferred decides the outcome, so it may also re-fail
/// with a different error.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = reject::<i32, _>("timeout").recover(|_| pure::<_, String>(0));
/// assert_eq!(deferred.settle().await, Ok(0));
/// # });
/// ```
pub struct Recover<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for Recover<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recover")
            .field("inner", &"<deferred>")
            .field("f", &"<handler>")
            .finish()
    }
}

impl<Inner, F, D2> Deferred for Recover<Inner, F>
where
    Inner: Deferred,
    D2: Deferred<Output = Inner::Output>,
    F: FnOnce(Inner::Error) -> D2 + Send,
{
    type Output = Inner::Output;
    type Error = D2::Error;

    async fn settle(self) -> Result<Self::Output, Self::Error> {
        match self.inner.settle().await {
            Ok(value) => Ok(value),
            Err(error) => (self.f)(error).settle().await,
        }
    }
}

/// RecoverWith combinator - handles a failure with a synchronous `Result`.
pub struct RecoverWith<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for RecoverWith<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecoverWith")
            .field("inner", &"<deferred>")
            .field("f", &"<handler>")
            .finish()
    }
}

impl<Inner, F, E2> Deferred for RecoverWith<Inner, F>
where
    Inner: Deferred,
    F: FnOnce(Inner::Error) -> Result<Inner::Output, E2> + Send,
    E2: Send,
{
    type Output = Inner::Output;
    type Error = E2;

    async fn settle(self) -> Result<Self::Output, E2> {
        match self.inner.settle().await {
            Ok(value) => Ok(value),
            Err(error) => (self.f)(error),
        }
    }
}
