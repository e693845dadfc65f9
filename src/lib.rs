//! # Settle
//!
//! A combinator algebra over deferred values.
//!
//! A *deferred* is an asynchronous computation that settles exactly once,
//! either resolving to a value or rejecting with a failure payload. This
//! crate lets ordinary synchronous functions operate on deferreds without
//! the caller writing any sequencing code by hand:
//!
//! - **Lifting**: apply an N-ary function to N deferreds settled
//!   concurrently ([`lift`](deferred::lift), [`lift2`](deferred::lift2), ...)
//! - **Collections**: [`sequence`](deferred::sequence),
//!   [`traverse`](deferred::traverse) and [`filter`](deferred::filter) run
//!   every element concurrently and keep input order
//! - **Sequential loops**: [`fold`](deferred::fold),
//!   [`unfold`](deferred::unfold), [`collect_while`](deferred::collect_while)
//!   and [`pipe`](deferred::pipe) run one step at a time with no stack growth
//! - **Error channel**: [`map_err`](DeferredExt::map_err),
//!   [`recover`](DeferredExt::recover) and [`bimap`](DeferredExt::bimap)
//!
//! When several concurrent inputs fail, the failure of the lowest-indexed
//! input wins, whatever the timing.
//!
//! ## Quick Example
//!
//! ```rust
//! use settle::prelude::*;
//!
//! #[derive(Debug, PartialEq)]
//! struct Login {
//!     email: String,
//!     password: String,
//! }
//!
//! let not_empty = to_deferred(|s: &String| !s.is_empty(), |_| "field is empty".to_string());
//!
//! # tokio_test::block_on(async {
//! let login = lift2(
//!     |email, password| Login { email, password },
//!     not_empty("ada@example.com".to_string()),
//!     not_empty("hunter2".to_string()),
//! );
//!
//! assert_eq!(
//!     login.settle().await,
//!     Ok(Login {
//!         email: "ada@example.com".to_string(),
//!         password: "hunter2".to_string(),
//!     })
//! );
//! # });
//! ```
//!
//! ## Features
//!
//! - `async`: timer-backed constructors [`delayed`](deferred::delayed) and
//!   [`delayed_reject`](deferred::delayed_reject) (pulls in `tokio`)
//! - `tracing`: span instrumentation and debug events from the sequential
//!   combinators (pulls in `tracing`)

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod deferred;
pub mod func;
pub mod testing;

// Re-exports
pub use deferred::{BoxedDeferred, Deferred, DeferredExt, Panicked};
pub use func::Apply;

#[cfg(feature = "tracing")]
pub use deferred::DeferredTracingExt;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::deferred::prelude::*;
    pub use crate::func::{compose, identity, keep_first, keep_second, Apply};
}
