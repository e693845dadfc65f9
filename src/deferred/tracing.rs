//! Tracing support for deferreds.
//!
//! This module provides the `Instrument` combinator and `instrument` method
//! for settling deferreds inside tracing spans. Feature-gated behind
//! `#[cfg(feature = "tracing")]`.

use crate::deferred::trait_def::Deferred;

/// A deferred settled inside a tracing span.
///
/// Created by [`DeferredTracingExt::instrument`].
#[derive(Debug)]
pub struct Instrument<D> {
    pub(crate) inner: D,
    pub(crate) span: tracing::Span,
}

impl<D> Deferred for Instrument<D>
where
    D: Deferred,
{
    type Output = D::Output;
    type Error = D::Error;

    async fn settle(self) -> Result<Self::Output, Self::Error> {
        use tracing::Instrument as _;
        self.inner.settle().instrument(self.span).await
    }
}

/// Extension trait for adding tracing instrumentation to deferreds.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait DeferredTracingExt: Deferred {
    /// Settle this deferred inside `span`.
    ///
    /// The span is entered each time the deferred is polled and exited when
    /// it yields, following the standard `tracing::Instrument` pattern.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use settle::prelude::*;
    /// use tracing::info_span;
    ///
    /// let photos = traverse(users, |user| fetch_photo(&token, user))
    ///     .instrument(info_span!("fetch_photos", count = users_len));
    /// ```
    fn instrument(self, span: tracing::Span) -> Instrument<Self> {
        Instrument { inner: self, span }
    }
}

impl<D: Deferred> DeferredTracingExt for D {}
