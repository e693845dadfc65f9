//! Parallel combinators: lifting and joining.
//!
//! Every combinator here drives all of its inputs concurrently on the
//! current task and waits for all of them to settle:
//! - `lift`, `lift1`..`lift5` - apply a plain function to N deferreds
//! - `first`, `second` - keep one side of a pair after both succeed
//! - `sequence` - join a list, preserving input order
//! - `traverse` - map a list to deferreds, then `sequence`
//! - `filter`, `filter_settled` - join, then keep matching values
//!
//! Output order always follows input order. When several inputs fail, the
//! failure of the lowest-indexed input wins.

use crate::deferred::combinators::{Filter, FilterSettled, Join, Lift, Sequence};
use crate::deferred::trait_def::Deferred;
use crate::func::{keep_first, keep_second, Apply};

/// Apply a plain function to the values of a tuple of deferreds.
///
/// `args` is a tuple of one to five deferreds sharing an error type. They
/// are settled concurrently; when all succeed, `f` is called with their
/// values in position order.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let add = |a: i32, b: i32| a + b;
///
/// let ok = lift(add, (pure::<i32, i32>(1), pure::<i32, i32>(2)));
/// assert_eq!(ok.settle().await, Ok(3));
///
/// let both_failed = lift(add, (reject::<i32, i32>(1), reject::<i32, i32>(2)));
/// assert_eq!(both_failed.settle().await, Err(1));
/// # });
/// ```
pub fn lift<Args, F>(f: F, args: Args) -> Lift<Args, F>
where
    Args: Join,
    F: Apply<Args::Output> + Send,
    F::Output: Send,
{
    Lift { args, f }
}

/// Apply a unary function to a deferred.
pub fn lift1<F, D1, R>(f: F, d1: D1) -> Lift<(D1,), F>
where
    D1: Deferred,
    F: FnOnce(D1::Output) -> R + Send,
    R: Send,
{
    lift(f, (d1,))
}

/// Apply a binary function to two deferreds settled concurrently.
pub fn lift2<F, D1, D2, R>(f: F, d1: D1, d2: D2) -> Lift<(D1, D2), F>
where
    D1: Deferred,
    D2: Deferred<Error = D1::Error>,
    F: FnOnce(D1::Output, D2::Output) -> R + Send,
    R: Send,
{
    lift(f, (d1, d2))
}

/// Apply a ternary function to three deferreds settled concurrently.
pub fn lift3<F, D1, D2, D3, R>(f: F, d1: D1, d2: D2, d3: D3) -> Lift<(D1, D2, D3), F>
where
    D1: Deferred,
    D2: Deferred<Error = D1::Error>,
    D3: Deferred<Error = D1::Error>,
    F: FnOnce(D1::Output, D2::Output, D3::Output) -> R + Send,
    R: Send,
{
    lift(f, (d1, d2, d3))
}

/// Apply a four-argument function to four deferreds settled concurrently.
pub fn lift4<F, D1, D2, D3, D4, R>(
    f: F,
    d1: D1,
    d2: D2,
    d3: D3,
    d4: D4,
) -> Lift<(D1, D2, D3, D4), F>
where
    D1: Deferred,
    D2: Deferred<Error = D1::Error>,
    D3: Deferred<Error = D1::Error>,
    D4: Deferred<Error = D1::Error>,
    F: FnOnce(D1::Output, D2::Output, D3::Output, D4::Output) -> R + Send,
    R: Send,
{
    lift(f, (d1, d2, d3, d4))
}

/// Apply a five-argument function to five deferreds settled concurrently.
pub fn lift5<F, D1, D2, D3, D4, D5, R>(
    f: F,
    d1: D1,
    d2: D2,
    d3: D3,
    d4: D4,
    d5: D5,
) -> Lift<(D1, D2, D3, D4, D5), F>
where
    D1: Deferred,
    D2: Deferred<Error = D1::Error>,
    D3: Deferred<Error = D1::Error>,
    D4: Deferred<Error = D1::Error>,
    D5: Deferred<Error = D1::Error>,
    F: FnOnce(D1::Output, D2::Output, D3::Output, D4::Output, D5::Output) -> R + Send,
    R: Send,
{
    lift(f, (d1, d2, d3, d4, d5))
}

/// Deferred returned by [`first`].
pub type First<A, B> = Lift<
    (A, B),
    fn(<A as Deferred>::Output, <B as Deferred>::Output) -> <A as Deferred>::Output,
>;

/// Deferred returned by [`second`].
pub type Second<A, B> = Lift<
    (A, B),
    fn(<A as Deferred>::Output, <B as Deferred>::Output) -> <B as Deferred>::Output,
>;

/// Settle both deferreds, then keep the value of `a`.
///
/// This is not a race: both sides are always awaited, and a failure of
/// either side fails the result (`a`'s failure wins when both fail).
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// assert_eq!(first(pure::<_, i32>(1), pure(2)).settle().await, Ok(1));
/// assert_eq!(first(pure(1), reject::<i32, _>(2)).settle().await, Err(2));
/// # });
/// ```
pub fn first<A, B>(a: A, b: B) -> First<A, B>
where
    A: Deferred,
    B: Deferred<Error = A::Error>,
{
    lift(keep_first as fn(A::Output, B::Output) -> A::Output, (a, b))
}

/// Settle both deferreds, then keep the value of `b`.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// assert_eq!(second(pure::<_, i32>(1), pure(2)).settle().await, Ok(2));
/// assert_eq!(second(reject::<i32, _>(1), reject::<i32, _>(2)).settle().await, Err(1));
/// # });
/// ```
pub fn second<A, B>(a: A, b: B) -> Second<A, B>
where
    A: Deferred,
    B: Deferred<Error = A::Error>,
{
    lift(keep_second as fn(A::Output, B::Output) -> B::Output, (a, b))
}

/// Join a list of deferreds, preserving input order.
///
/// An empty list resolves to an empty vector.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let empty: Vec<Pure<i32, String>> = vec![];
/// assert_eq!(sequence(empty).settle().await, Ok(vec![]));
/// # });
/// ```
pub fn sequence<D, I>(deferreds: I) -> Sequence<D>
where
    I: IntoIterator<Item = D>,
    D: Deferred,
{
    Sequence {
        items: deferreds.into_iter().collect(),
    }
}

/// Map every item to a deferred, then join them.
///
/// `f` is applied to every item up front, producing independent deferreds
/// that are settled concurrently. This is a parallel traversal; use
/// [`fold`](crate::deferred::fold) to process items one at a time.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let tripled = traverse(vec![1, 2, 3], |x| pure::<_, String>(x * 3));
/// assert_eq!(tripled.settle().await, Ok(vec![3, 6, 9]));
/// # });
/// ```
pub fn traverse<A, D, F, I>(items: I, f: F) -> Sequence<D>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> D,
    D: Deferred,
{
    sequence(items.into_iter().map(f))
}

/// Keep the items for which an asynchronous predicate succeeds with `true`.
///
/// Every predicate runs concurrently. Kept items stay in input order.
pub fn filter<A, P, D, I>(items: I, predicate: P) -> Filter<A, P>
where
    I: IntoIterator<Item = A>,
    A: Send,
    P: FnMut(&A) -> D + Send,
    D: Deferred<Output = bool>,
{
    Filter {
        items: items.into_iter().collect(),
        predicate,
    }
}

/// Join a list of deferreds, then keep the values a synchronous predicate
/// accepts.
pub fn filter_settled<D, P, I>(deferreds: I, predicate: P) -> FilterSettled<D, P>
where
    I: IntoIterator<Item = D>,
    D: Deferred,
    P: FnMut(&D::Output) -> bool + Send,
{
    FilterSettled {
        items: deferreds.into_iter().collect(),
        predicate,
    }
}
