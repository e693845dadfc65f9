//! FromResult deferred - lifts a settled `Result` into a Deferred.

use crate::deferred::trait_def::Deferred;

/// A `Result` wrapped as an already-settled Deferred.
#[derive(Debug, Clone)]
pub struct FromResult<T, E> {
    result: Result<T, E>,
}

impl<T, E> FromResult<T, E> {
    /// Create a new FromResult deferred.
    pub fn new(result: Result<T, E>) -> Self {
        FromResult { result }
    }
}

impl<T, E> Deferred for FromResult<T, E>
where
    T: Send,
    E: Send,
{
    type Output = T;
    type Error = E;

    async fn settle(self) -> Result<T, E> {
        self.result
    }
}
