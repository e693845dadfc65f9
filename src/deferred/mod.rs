//! Deferred values and the combinators that compose them.
//!
//! A deferred is an asynchronous value that settles exactly once, either
//! to a success value or to a failure payload. This module provides:
//!
//! - the [`Deferred`] trait and its [`DeferredExt`] methods
//! - constructors lifting plain values, results and futures
//! - parallel combinators ([`lift`], [`sequence`], [`traverse`], [`filter`])
//! - sequential combinators ([`fold`], [`unfold`], [`collect_while`], [`pipe`])
//!
//! # Zero-Cost by Default
//!
//! ```rust
//! use settle::prelude::*;
//!
//! # tokio_test::block_on(async {
//! // No heap allocation - every combinator is a concrete type
//! let deferred = pure::<_, String>(42)
//!     .map(|x| x + 1)              // Map<Pure<...>, ...>
//!     .and_then(|x| pure(x * 2))   // AndThen<Map<...>, ...>
//!     .map(|x| x.to_string());     // Map<AndThen<...>, ...>
//!
//! assert_eq!(deferred.settle().await, Ok("86".to_string()));
//! # });
//! ```
//!
//! # When to Use Boxing
//!
//! Boxing is needed when a list must hold deferreds built from different
//! combinators, when match arms return different deferred types, and for
//! the stages of a [`pipe`].
//!
//! ```rust
//! use settle::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let deferreds: Vec<BoxedDeferred<i32, String>> = vec![
//!     pure(1).boxed(),
//!     pure(2).map(|x| x * 2).boxed(),
//! ];
//! assert_eq!(sequence(deferreds).settle().await, Ok(vec![1, 4]));
//! # });
//! ```
//!
//! # Failure Ordering
//!
//! Parallel combinators await every input. When more than one fails, the
//! failure of the lowest-indexed input is reported, regardless of which
//! settled first.

pub mod boxed;
pub mod combinators;
pub mod constructors;
pub mod ext;
pub mod parallel;
pub mod prelude;
pub mod sequential;
#[cfg(feature = "tracing")]
pub mod tracing;
mod trait_def;

// Re-export core trait
pub use trait_def::Deferred;

// Re-export extension trait
pub use ext::DeferredExt;

// Re-export boxed types
pub use boxed::{BoxFuture, BoxedDeferred};

// Re-export all combinator types
pub use combinators::{
    AndThen, Bimap, CatchPanic, CollectWhile, Ensure, Filter, FilterSettled, Flatten, Fold,
    FromAsync, FromFuture, FromResult, Join, Lift, Map, MapErr, Panicked, Pipe, Pure, Recover,
    RecoverWith, Reject, Sequence, Shared, Stage, TryMap, Unfold, Void,
};

// Re-export constructors
pub use constructors::{from_async, from_future, from_result, pure, reject, to_deferred, void};

#[cfg(feature = "async")]
pub use constructors::{delayed, delayed_reject};

// Re-export parallel functions
pub use parallel::{
    filter, filter_settled, first, lift, lift1, lift2, lift3, lift4, lift5, second, sequence,
    traverse, First, Second,
};

// Re-export sequential functions
pub use sequential::{collect_while, fold, pipe, stage, unfold};

// Re-export tracing (when tracing feature is enabled)
#[cfg(feature = "tracing")]
pub use self::tracing::{DeferredTracingExt, Instrument};

#[cfg(test)]
mod tests;
