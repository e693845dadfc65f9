//! Zero-cost combinator types for deferred composition.
//!
//! This module contains the concrete types returned by the constructors
//! and by the methods on `DeferredExt`. None of them allocate unless the
//! combinator needs a list (`Sequence`, `Filter`, ...) or is explicitly
//! shared.
//!
//! Most users won't need to name these types directly; they are usually
//! returned behind `impl Deferred<...>`.

mod and_then;
mod bimap;
mod catch_panic;
mod ensure;
mod filter;
mod fold;
mod from_future;
mod from_result;
mod lift;
mod map;
mod map_err;
mod pipe;
mod pure;
mod recover;
mod reject;
mod sequence;
mod shared;
mod unfold;
mod void;

pub use and_then::{AndThen, Flatten};
pub use bimap::Bimap;
pub use catch_panic::{CatchPanic, Panicked};
pub use ensure::Ensure;
pub use filter::{Filter, FilterSettled};
pub use fold::Fold;
pub use from_future::{FromAsync, FromFuture};
pub use from_result::FromResult;
pub use lift::{Join, Lift};
pub use map::{Map, TryMap};
pub use map_err::MapErr;
pub use pipe::{Pipe, Stage};
pub use pure::Pure;
pub use recover::{Recover, RecoverWith};
pub use reject::Reject;
pub use sequence::Sequence;
pub use shared::Shared;
pub use unfold::{CollectWhile, Unfold};
pub use void::Void;
