//! MapErr combinator - transforms the failure value of a deferred.

use crate::deferred::trait_def::Deferred;

/// MapErr combinator - transforms the failure value.
///
/// Success passes through untouched and the function is never called.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = reject::<i32, _>("error").map_err(|e| format!("wrapped: {}", e));
/// assert_eq!(deferred.settle().await, Err("wrapped: error".to_string()));
/// # });
/// ```
pub struct MapErr<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for MapErr<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapErr")
            .field("inner", &"<deferred>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F, E2> Deferred for MapErr<Inner, F>
where
    Inner: Deferred,
    F: FnOnce(Inner::Error) -> E2 + Send,
    E2: Send,
{
    type Output = Inner::Output;
    type Error = E2;

    async fn settle(self) -> Result<Self::Output, E2> {
        self.inner.settle().await.map_err(self.f)
    }
}
