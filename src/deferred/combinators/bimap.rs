//! Bimap combinator - routes each outcome through its own handler.

use crate::deferred::trait_def::Deferred;

/// Bimap combinator - applies exactly one of two handlers.
///
/// Success goes through `on_success`, which may fail by returning `Err`.
/// Failure goes through `on_failure`, whose deferred may recover or
/// re-fail with a transformed error.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = reject::<i32, _>(404).bimap(
///     |x| Ok(x.to_string()),
///     |code| reject::<String, _>(format!("status {}", code)),
/// );
/// assert_eq!(deferred.settle().await, Err("status 404".to_string()));
/// # });
/// ```
pub struct Bimap<Inner, S, F> {
    pub(crate) inner: Inner,
    pub(crate) on_success: S,
    pub(crate) on_failure: F,
}

impl<Inner, S, F> std::fmt::Debug for Bimap<Inner, S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bimap")
            .field("inner", &"<deferred>")
            .field("on_success", &"<function>")
            .field("on_failure", &"<handler>")
            .finish()
    }
}

impl<Inner, S, F, U, D2> Deferred for Bimap<Inner, S, F>
where
    Inner: Deferred,
    S: FnOnce(Inner::Output) -> Result<U, D2::Error> + Send,
    F: FnOnce(Inner::Error) -> D2 + Send,
    D2: Deferred<Output = U>,
    U: Send,
{
    type Output = U;
    type Error = D2::Error;

    async fn settle(self) -> Result<U, Self::Error> {
        match self.inner.settle().await {
            Ok(value) => (self.on_success)(value),
            Err(error) => (self.on_failure)(error).settle().await,
        }
    }
}
