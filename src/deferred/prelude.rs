//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! from the deferred module, allowing users to get started with a single
//! `use` statement.
//!
//! ```rust
//! use settle::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let deferred = lift2(|a: i32, b: i32| a + b, pure::<_, String>(20), pure(22))
//!     .map(|x| x.to_string());
//!
//! assert_eq!(deferred.settle().await, Ok("42".to_string()));
//! # });
//! ```
//!
//! # What's Included
//!
//! - **Core traits**: [`Deferred`], [`DeferredExt`]
//! - **Constructors**: [`pure`], [`reject`], [`from_result`], [`from_future`], ...
//! - **Parallel combinators**: [`lift`], [`sequence`], [`traverse`], [`filter`], ...
//! - **Sequential combinators**: [`fold`], [`unfold`], [`collect_while`], [`pipe`]
//! - **Combinator types**: [`Map`], [`Lift`], [`Sequence`], etc. (for type signatures)
//! - **Boxing utilities**: [`BoxedDeferred`]

// Traits
pub use crate::deferred::combinators::Join;
pub use crate::deferred::ext::DeferredExt;
pub use crate::deferred::trait_def::Deferred;

// Boxed Deferred
pub use crate::deferred::boxed::{BoxFuture, BoxedDeferred};

// Combinator Types (for advanced use, usually `impl Deferred` suffices)
pub use crate::deferred::combinators::{
    AndThen, Bimap, CatchPanic, CollectWhile, Ensure, Filter, FilterSettled, Flatten, Fold,
    FromAsync, FromFuture, FromResult, Lift, Map, MapErr, Panicked, Pipe, Pure, Recover,
    RecoverWith, Reject, Sequence, Shared, Stage, TryMap, Unfold, Void,
};

// Constructors
pub use crate::deferred::constructors::{
    from_async, from_future, from_result, pure, reject, to_deferred, void,
};

#[cfg(feature = "async")]
pub use crate::deferred::constructors::{delayed, delayed_reject};

// Parallel
pub use crate::deferred::parallel::{
    filter, filter_settled, first, lift, lift1, lift2, lift3, lift4, lift5, second, sequence,
    traverse, First, Second,
};

// Sequential
pub use crate::deferred::sequential::{collect_while, fold, pipe, stage, unfold};

// Tracing (when tracing feature is enabled)
#[cfg(feature = "tracing")]
pub use crate::deferred::tracing::{DeferredTracingExt, Instrument};
