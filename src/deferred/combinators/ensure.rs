//! Ensure combinator for validating the success value of a deferred.

use crate::deferred::trait_def::Deferred;

/// Validates the deferred's success value with a predicate.
///
/// If the predicate returns true, the value passes through.
/// If the predicate returns false, the deferred fails with the provided error.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = pure::<_, String>(25)
///     .ensure(|age| *age >= 18, "Must be 18 or older".to_string());
///
/// assert_eq!(deferred.settle().await, Ok(25));
/// # });
/// ```
pub struct Ensure<Inner, P, E2> {
    pub(crate) inner: Inner,
    pub(crate) predicate: P,
    pub(crate) error: E2,
}

impl<Inner, P, E2> std::fmt::Debug for Ensure<Inner, P, E2> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ensure")
            .field("inner", &"<deferred>")
            .field("predicate", &"<function>")
            .field("error", &"<error>")
            .finish()
    }
}

impl<Inner, P, E2> Deferred for Ensure<Inner, P, E2>
where
    Inner: Deferred,
    P: FnOnce(&Inner::Output) -> bool + Send,
    E2: Into<Inner::Error> + Send,
{
    type Output = Inner::Output;
    type Error = Inner::Error;

    async fn settle(self) -> Result<Self::Output, Self::Error> {
        let value = self.inner.settle().await?;
        if (self.predicate)(&value) {
            Ok(value)
        } else {
            Err(self.error.into())
        }
    }
}
