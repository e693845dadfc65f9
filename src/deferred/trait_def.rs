//! Deferred trait definition - the core abstraction of the crate.
//!
//! This module defines the `Deferred` trait, which represents an
//! asynchronous computation that:
//! - Settles exactly once
//! - Produces a value of type `Output` on success
//! - Produces a value of type `Error` on failure
//!
//! # Design Philosophy
//!
//! This trait follows the same pattern as `Future` and `Iterator`:
//! - Combinators return concrete types (zero-cost abstractions)
//! - Use `.boxed()` when you need type erasure
//!
//! # Single Settlement
//!
//! `settle` consumes `self`. Once a deferred has been driven to an outcome
//! it no longer exists, so it can never be observed in a second state.
//! Use [`DeferredExt::shared`](crate::deferred::DeferredExt::shared) when the
//! same outcome must be observed from several places.

use std::future::Future;

/// An asynchronous value that settles exactly once to success or failure.
///
/// Every combinator in this crate implements `Deferred`, so combinators
/// nest freely and the result of any composition is itself a `Deferred`.
///
/// # Type Parameters
///
/// * `Output` - The success type (must be `Send`)
/// * `Error` - The failure payload (must be `Send`); any type may be used
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = pure::<_, String>(21).map(|x| x * 2);
/// assert_eq!(deferred.settle().await, Ok(42));
/// # });
/// ```
pub trait Deferred: Sized + Send {
    /// The success type produced by this deferred.
    type Output: Send;

    /// The failure payload that may be produced.
    type Error: Send;

    /// Drive this deferred to its single outcome.
    ///
    /// The returned future resolves to `Ok(output)` on success or
    /// `Err(error)` on failure.
    fn settle(self) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}
