//! Lift combinator - applies a plain N-ary function to N deferred values.

use std::future::Future;

use crate::deferred::trait_def::Deferred;
use crate::func::Apply;

/// A tuple of deferreds that can be settled concurrently.
///
/// Implemented for tuples of 1 through 5 deferreds sharing one error type.
/// All members are driven together and every member is awaited to
/// settlement. If any failed, the failure of the lowest-indexed failing
/// member is returned, independent of the order in which they settled.
pub trait Join: Send {
    /// Tuple of the members' success values.
    type Output: Send;

    /// The shared failure type.
    type Error: Send;

    /// Settle every member concurrently.
    fn join(self) -> impl Future<Output = Result<Self::Output, Self::Error>> + Send;
}

macro_rules! impl_join {
    ($H:ident $hd:ident $h:ident $(, $D:ident $dd:ident $d:ident)*) => {
        impl<$H, $($D),*> Join for ($H, $($D,)*)
        where
            $H: Deferred,
            $($D: Deferred<Error = <$H as Deferred>::Error>,)*
        {
            type Output = (<$H as Deferred>::Output, $(<$D as Deferred>::Output,)*);
            type Error = <$H as Deferred>::Error;

            async fn join(self) -> Result<Self::Output, Self::Error> {
                let ($hd, $($dd,)*) = self;
                let ($h, $($d,)*) = futures::join!($hd.settle(), $($dd.settle()),*);
                // Tuple fields are evaluated left to right, so `?` reports
                // the lowest-indexed failure.
                Ok(($h?, $($d?,)*))
            }
        }
    };
}

impl_join!(D1 d1 r1);
impl_join!(D1 d1 r1, D2 d2 r2);
impl_join!(D1 d1 r1, D2 d2 r2, D3 d3 r3);
impl_join!(D1 d1 r1, D2 d2 r2, D3 d3 r3, D4 d4 r4);
impl_join!(D1 d1 r1, D2 d2 r2, D3 d3 r3, D4 d4 r4, D5 d5 r5);

/// Lift combinator - waits for all arguments, then applies the function.
///
/// The function is only called when every argument succeeded.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let sum = lift(|a: i32, b: i32| a + b, (pure::<_, String>(1), pure(2)));
/// assert_eq!(sum.settle().await, Ok(3));
/// # });
/// ```
pub struct Lift<Args, F> {
    pub(crate) args: Args,
    pub(crate) f: F,
}

impl<Args, F> std::fmt::Debug for Lift<Args, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lift")
            .field("args", &"<deferreds>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Args, F> Deferred for Lift<Args, F>
where
    Args: Join,
    F: Apply<Args::Output> + Send,
    F::Output: Send,
{
    type Output = F::Output;
    type Error = Args::Error;

    async fn settle(self) -> Result<Self::Output, Self::Error> {
        let values = self.args.join().await?;
        Ok(self.f.apply(values))
    }
}
