//! Reject deferred - represents an already-failed computation.

use std::marker::PhantomData;

use crate::deferred::trait_def::Deferred;

/// A failure value wrapped as an already-failed Deferred.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = reject::<i32, _>("error".to_string());
/// assert_eq!(deferred.settle().await, Err("error".to_string()));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Reject<T, E> {
    error: E,
    _phantom: PhantomData<fn() -> T>,
}

impl<T, E> Reject<T, E> {
    /// Create a new Reject deferred from an error.
    pub fn new(error: E) -> Self {
        Reject {
            error,
            _phantom: PhantomData,
        }
    }
}

impl<T, E> Deferred for Reject<T, E>
where
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn settle(self) -> Result<T, E> {
        Err(self.error)
    }
}
