//! Extension trait providing combinator methods for all Deferreds.
//!
//! The `DeferredExt` trait is automatically implemented for all types
//! that implement `Deferred`. It provides the functor and error-channel
//! combinators (`map`, `map_err`, `recover`, `bimap`, ...) plus `boxed`
//! and `shared`.

use crate::deferred::boxed::BoxedDeferred;
use crate::deferred::combinators::{
    AndThen, Bimap, CatchPanic, Ensure, Flatten, Map, MapErr, Panicked, Recover, RecoverWith,
    Shared, TryMap, Void,
};
use crate::deferred::trait_def::Deferred;

/// Extension trait providing combinator methods for all Deferreds.
///
/// This trait is automatically implemented for all types that implement
/// `Deferred`. You don't need to implement this trait yourself.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = pure::<_, String>(21)
///     .map(|x| x * 2)
///     .and_then(|x| pure(x + 1))
///     .map_err(|e| format!("Error: {}", e));
///
/// assert_eq!(deferred.settle().await, Ok(43));
/// # });
/// ```
pub trait DeferredExt: Deferred {
    /// Transform the success value.
    ///
    /// The function is never called when this deferred fails.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        F: FnOnce(Self::Output) -> U + Send,
        U: Send,
    {
        Map { inner: self, f }
    }

    /// Transform the success value with a function that may fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use settle::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let parsed = pure::<_, String>("12x")
    ///     .try_map(|s| s.parse::<i32>().map_err(|e| e.to_string()));
    /// assert!(parsed.settle().await.is_err());
    /// # });
    /// ```
    fn try_map<U, F>(self, f: F) -> TryMap<Self, F>
    where
        F: FnOnce(Self::Output) -> Result<U, Self::Error> + Send,
        U: Send,
    {
        TryMap { inner: self, f }
    }

    /// Chain a dependent deferred.
    ///
    /// If this deferred succeeds, apply the function to produce the next one.
    /// If this deferred fails, propagate the failure.
    ///
    /// # Note on Error Types
    ///
    /// The chained deferred must have the same error type. Use `map_err`
    /// to convert error types before chaining:
    ///
    /// ```rust,ignore
    /// fetch_user(id)                            // Error = DbError
    ///     .map_err(AppError::from)              // Error = AppError
    ///     .and_then(|user| send_email(user))    // Error = AppError
    /// ```
    fn and_then<D2, F>(self, f: F) -> AndThen<Self, F>
    where
        D2: Deferred<Error = Self::Error>,
        F: FnOnce(Self::Output) -> D2 + Send,
    {
        AndThen { inner: self, f }
    }

    /// Settle the deferred this deferred resolves to.
    fn flatten(self) -> Flatten<Self>
    where
        Self::Output: Deferred<Error = Self::Error>,
    {
        Flatten { inner: self }
    }

    /// Transform the failure value.
    ///
    /// Success passes through untouched.
    fn map_err<E2, F>(self, f: F) -> MapErr<Self, F>
    where
        F: FnOnce(Self::Error) -> E2 + Send,
        E2: Send,
    {
        MapErr { inner: self, f }
    }

    /// Recover from a failure.
    ///
    /// If this deferred fails, the handler's deferred decides the outcome;
    /// return [`pure`](crate::deferred::pure) for a plain value. If this
    /// deferred succeeds, the value passes through unchanged.
    fn recover<D2, F>(self, f: F) -> Recover<Self, F>
    where
        D2: Deferred<Output = Self::Output>,
        F: FnOnce(Self::Error) -> D2 + Send,
    {
        Recover { inner: self, f }
    }

    /// Recover from a failure with a synchronous handler.
    ///
    /// # Example
    ///
    /// ```rust
    /// use settle::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let deferred = reject::<i32, _>("missing").recover_with(|_| Ok::<_, String>(0));
    /// assert_eq!(deferred.settle().await, Ok(0));
    /// # });
    /// ```
    fn recover_with<E2, F>(self, f: F) -> RecoverWith<Self, F>
    where
        F: FnOnce(Self::Error) -> Result<Self::Output, E2> + Send,
        E2: Send,
    {
        RecoverWith { inner: self, f }
    }

    /// Handle both outcomes: exactly one of the two handlers runs.
    ///
    /// `on_success` may fail by returning `Err`; `on_failure` may recover or
    /// re-fail through the deferred it returns.
    fn bimap<U, S, F, D2>(self, on_success: S, on_failure: F) -> Bimap<Self, S, F>
    where
        S: FnOnce(Self::Output) -> Result<U, D2::Error> + Send,
        F: FnOnce(Self::Error) -> D2 + Send,
        D2: Deferred<Output = U>,
        U: Send,
    {
        Bimap {
            inner: self,
            on_success,
            on_failure,
        }
    }

    /// Fail with `error` unless the success value satisfies `predicate`.
    fn ensure<P, E2>(self, predicate: P, error: E2) -> Ensure<Self, P, E2>
    where
        P: FnOnce(&Self::Output) -> bool + Send,
        E2: Into<Self::Error> + Send,
    {
        Ensure {
            inner: self,
            predicate,
            error,
        }
    }

    /// Discard the success value.
    fn void(self) -> Void<Self> {
        Void { inner: self }
    }

    /// Convert a panic raised while settling into a failure.
    ///
    /// Covers panics in this deferred and in every handler it runs.
    fn catch_panic<F>(self, f: F) -> CatchPanic<Self, F>
    where
        F: FnOnce(Panicked) -> Self::Error + Send,
    {
        CatchPanic { inner: self, f }
    }

    /// Make the outcome observable from several places.
    ///
    /// The returned deferred is `Clone`; the operation runs once.
    fn shared(self) -> Shared<Self::Output, Self::Error>
    where
        Self: 'static,
        Self::Output: Clone + Sync + 'static,
        Self::Error: Clone + Sync + 'static,
    {
        Shared::new(self)
    }

    /// Erase the type of this deferred.
    fn boxed(self) -> BoxedDeferred<Self::Output, Self::Error>
    where
        Self: 'static,
        Self::Output: 'static,
        Self::Error: 'static,
    {
        BoxedDeferred::new(self)
    }
}

impl<D: Deferred> DeferredExt for D {}
