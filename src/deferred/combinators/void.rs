//! Void combinator - discards a success value.

use crate::deferred::trait_def::Deferred;

/// Turns a successful value into an opaque "done" signal.
///
/// Failure propagates unchanged.
#[derive(Debug)]
pub struct Void<Inner> {
    pub(crate) inner: Inner,
}

impl<Inner: Deferred> Deferred for Void<Inner> {
    type Output = ();
    type Error = Inner::Error;

    async fn settle(self) -> Result<(), Self::Error> {
        self.inner.settle().await.map(|_| ())
    }
}
