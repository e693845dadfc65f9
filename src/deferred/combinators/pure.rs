//! Pure deferred - wraps a value as an already-successful deferred.

use std::marker::PhantomData;

use crate::deferred::trait_def::Deferred;

/// A value wrapped as an already-successful Deferred.
///
/// This is zero-cost - no heap allocation occurs. The `Pure` struct
/// stores only the value itself plus phantom data for the error type.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = pure::<_, String>(42);
/// assert_eq!(deferred.settle().await, Ok(42));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Pure<T, E> {
    value: T,
    _phantom: PhantomData<fn() -> E>,
}

impl<T, E> Pure<T, E> {
    /// Create a new Pure deferred from a value.
    pub fn new(value: T) -> Self {
        Pure {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<T, E> Deferred for Pure<T, E>
where
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn settle(self) -> Result<T, E> {
        Ok(self.value)
    }
}
