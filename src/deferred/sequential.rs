//! Sequential combinators: folding, generating and piping.
//!
//! Every combinator here runs exactly one step at a time: the next step
//! is only created after the previous one has succeeded, and the first
//! failure stops the whole computation.
//!
//! Steps are driven by a loop over `.await`, so long sequences do not
//! grow the call stack.

use crate::deferred::boxed::BoxedDeferred;
use crate::deferred::combinators::{CollectWhile, Fold, Pipe, Stage, Unfold};
use crate::deferred::ext::DeferredExt;
use crate::deferred::trait_def::Deferred;

/// Left fold over `items` with a deferred step.
///
/// `f(acc, item)` is called for each item in order, each call only after
/// the previous step succeeded. An empty list resolves to `init`.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let sum = |acc: i32, x: i32| pure::<_, String>(acc + x);
///
/// assert_eq!(fold(vec![2, 3, 4], 1, sum).settle().await, Ok(10));
/// assert_eq!(fold(Vec::new(), 1, sum).settle().await, Ok(1));
/// # });
/// ```
pub fn fold<I, B, F, D>(items: I, init: B, f: F) -> Fold<I, B, F>
where
    I: IntoIterator + Send,
    I::IntoIter: Send,
    I::Item: Send,
    B: Send,
    F: FnMut(B, I::Item) -> D + Send,
    D: Deferred<Output = B>,
{
    Fold { items, init, f }
}

/// Generate an accumulated value from repeated deferred steps.
///
/// `f(acc, state)` settles to `(next_acc, Some(next_state))` to continue or
/// `(final_acc, None)` to stop.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let step = |mut acc: Vec<i32>, n: i32| {
///     if n > 5 {
///         return pure::<_, String>((acc, None));
///     }
///     acc.push(n);
///     pure((acc, Some(n + 1)))
/// };
///
/// assert_eq!(unfold(Vec::new(), 10, step).settle().await, Ok(vec![]));
/// # });
/// ```
pub fn unfold<B, S, F, D>(acc: B, state: S, f: F) -> Unfold<B, S, F>
where
    B: Send,
    S: Send,
    F: FnMut(B, S) -> D + Send,
    D: Deferred<Output = (B, Option<S>)>,
{
    Unfold { acc, state, f }
}

/// Build a list from repeated deferred steps.
///
/// `f(state)` settles to `Some((value, next_state))` to emit `value` and
/// continue, or `None` to finish with everything emitted so far.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let pages = collect_while(1, |page: u32| {
///     pure::<_, String>((page <= 3).then(|| (format!("page {}", page), page + 1)))
/// });
/// assert_eq!(
///     pages.settle().await,
///     Ok(vec!["page 1".to_string(), "page 2".to_string(), "page 3".to_string()])
/// );
/// # });
/// ```
pub fn collect_while<S, F, D, T>(seed: S, f: F) -> CollectWhile<S, F>
where
    S: Send,
    T: Send,
    F: FnMut(S) -> D + Send,
    D: Deferred<Output = Option<(T, S)>>,
{
    CollectWhile { seed, f }
}

/// Feed `seed` through `stages` from left to right.
///
/// See [`stage`] for building the stage list, and [`pipe!`](crate::pipe!)
/// for stages of differing types.
pub fn pipe<T, E>(seed: T, stages: Vec<Stage<T, E>>) -> Pipe<T, E>
where
    T: Send,
    E: Send,
{
    Pipe { seed, stages }
}

/// Box a deferred-returning function as a [`Stage`] of a [`pipe`].
pub fn stage<T, E, F, D>(f: F) -> Stage<T, E>
where
    F: FnOnce(T) -> D + Send + 'static,
    D: Deferred<Output = T, Error = E> + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    Box::new(move |value| -> BoxedDeferred<T, E> { f(value).boxed() })
}

/// Compose deferred-returning functions left to right.
///
/// `pipe!(seed => f, g, h)` lifts `seed` with [`pure`](crate::deferred::pure)
/// and chains each function with `and_then`. Unlike [`pipe`], each stage
/// may change the value type.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let parse = |s: &str| from_result(s.parse::<i32>().map_err(|e| e.to_string()));
/// let double = |n: i32| pure(n * 2);
/// let describe = |n: i32| pure(format!("got {}", n));
///
/// let result = settle::pipe!("21" => parse, double, describe);
/// assert_eq!(result.settle().await, Ok("got 42".to_string()));
/// # });
/// ```
#[macro_export]
macro_rules! pipe {
    ($seed:expr => $($stage:expr),+ $(,)?) => {
        $crate::__pipe_chain!($crate::deferred::pure($seed); $($stage),+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __pipe_chain {
    ($acc:expr; $stage:expr $(, $rest:expr)*) => {
        $crate::__pipe_chain!($crate::deferred::DeferredExt::and_then($acc, $stage); $($rest),*)
    };
    ($acc:expr;) => {
        $acc
    };
}
