//! Small pure helpers used to build the deferred combinators.
//!
//! Nothing in this module is asynchronous. These are the plain-function
//! building blocks that the lifting layer raises into the deferred world:
//! [`first`](crate::deferred::first) is `lift(keep_first)` and
//! [`second`](crate::deferred::second) is `lift(keep_second)`.
//!
//! # Example
//!
//! ```rust
//! use settle::func::{compose, keep_first, keep_second, Apply};
//!
//! assert_eq!(keep_first(1, "ignored"), 1);
//! assert_eq!(keep_second("ignored", 2), 2);
//!
//! let inc_then_double = compose(|x: i32| x + 1, |x: i32| x * 2);
//! assert_eq!(inc_then_double(3), 8);
//!
//! let add = |a: i32, b: i32| a + b;
//! assert_eq!(add.apply((1, 2)), 3);
//! ```

/// Returns its argument unchanged.
pub fn identity<A>(a: A) -> A {
    a
}

/// Returns the first of two arguments.
pub fn keep_first<A, B>(a: A, _b: B) -> A {
    a
}

/// Returns the second of two arguments.
pub fn keep_second<A, B>(_a: A, b: B) -> B {
    b
}

/// Left-to-right composition: `compose(f, g)(x) == g(f(x))`.
pub fn compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Calls an N-ary function with a tuple of N arguments.
///
/// Implemented for every `FnOnce` of arity 1 through 5. This is what lets
/// [`lift`](crate::deferred::lift) accept any function whose parameter list
/// matches the tuple of values produced by joining its deferred arguments.
pub trait Apply<Args> {
    /// The function's return type.
    type Output;

    /// Spread `args` into positional parameters and call the function.
    fn apply(self, args: Args) -> Self::Output;
}

macro_rules! impl_apply {
    ($($A:ident $a:ident),+) => {
        impl<Func, R, $($A),+> Apply<($($A,)+)> for Func
        where
            Func: FnOnce($($A),+) -> R,
        {
            type Output = R;

            fn apply(self, ($($a,)+): ($($A,)+)) -> R {
                self($($a),+)
            }
        }
    };
}

impl_apply!(A1 a1);
impl_apply!(A1 a1, A2 a2);
impl_apply!(A1 a1, A2 a2, A3 a3);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_apply!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(identity(5), 5);
        assert_eq!(identity("x"), "x");
    }

    #[test]
    fn test_keep_first_and_second() {
        assert_eq!(keep_first(1, 2), 1);
        assert_eq!(keep_second(1, 2), 2);
    }

    #[test]
    fn test_compose_runs_left_to_right() {
        let f = compose(|s: &str| s.len(), |n: usize| n * 10);
        assert_eq!(f("abc"), 30);
    }

    #[test]
    fn test_apply_each_arity() {
        assert_eq!((|a: i32| a + 1).apply((1,)), 2);
        assert_eq!((|a: i32, b: i32| a - b).apply((5, 3)), 2);
        assert_eq!((|a: i32, b: i32, c: i32| a * b * c).apply((2, 3, 4)), 24);
        assert_eq!(
            (|a: &str, b: &str, c: &str, d: &str| format!("{a}{b}{c}{d}")).apply(("w", "x", "y", "z")),
            "wxyz"
        );
        assert_eq!(
            (|a: u8, b: u8, c: u8, d: u8, e: u8| [a, b, c, d, e]).apply((1, 2, 3, 4, 5)),
            [1, 2, 3, 4, 5]
        );
    }
}
