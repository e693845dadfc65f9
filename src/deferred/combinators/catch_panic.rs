//! CatchPanic combinator - converts a panic while settling into a failure.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::deferred::trait_def::Deferred;

/// A panic captured while settling a deferred.
///
/// Carries the panic message when the payload was a string, which covers
/// `panic!` with a literal or a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// Create a Panicked value with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Panicked {
            message: message.into(),
        }
    }

    /// Extract the message from a panic payload.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "<non-string panic payload>".to_string(),
            },
        };
        Panicked { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Panicked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "handler panicked: {}", self.message)
    }
}

impl std::error::Error for Panicked {}

/// CatchPanic combinator - a panic raised by the inner deferred or any
/// handler it runs becomes a failure of this deferred.
///
/// # Example
///
/// ```rust
/// use settle::prelude::*;
///
/// # tokio_test::block_on(async {
/// let deferred = pure::<i32, String>(0)
///     .map(|x: i32| -> i32 {
///         if x == 0 {
///             panic!("division by zero");
///         }
///         100 / x
///     })
///     .catch_panic(|p| p.message().to_string());
///
/// assert_eq!(deferred.settle().await, Err("division by zero".to_string()));
/// # });
/// ```
pub struct CatchPanic<Inner, F> {
    pub(crate) inner: Inner,
    pub(crate) f: F,
}

impl<Inner, F> std::fmt::Debug for CatchPanic<Inner, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatchPanic")
            .field("inner", &"<deferred>")
            .field("f", &"<function>")
            .finish()
    }
}

impl<Inner, F> Deferred for CatchPanic<Inner, F>
where
    Inner: Deferred,
    F: FnOnce(Panicked) -> Inner::Error + Send,
{
    type Output = Inner::Output;
    type Error = Inner::Error;

    async fn settle(self) -> Result<Self::Output, Self::Error> {
        match AssertUnwindSafe(self.inner.settle()).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => {
                let panicked = Panicked::from_payload(payload);
                #[cfg(feature = "tracing")]
                tracing::warn!("deferred panicked while settling: {}", panicked.message());
                Err((self.f)(panicked))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deferred::constructors::{pure, reject};
    use crate::deferred::DeferredExt;

    #[test]
    fn test_payload_message_from_str() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(Panicked::from_payload(payload).message(), "boom");
    }

    #[test]
    fn test_payload_message_from_string() {
        let payload: Box<dyn Any + Send> = Box::new(format!("boom {}", 7));
        assert_eq!(Panicked::from_payload(payload).message(), "boom 7");
    }

    #[test]
    fn test_payload_of_other_type() {
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(
            Panicked::from_payload(payload).message(),
            "<non-string panic payload>"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Panicked::new("oops").to_string(), "handler panicked: oops");
    }

    #[tokio::test]
    async fn test_catch_panic_in_map_handler() {
        let deferred = pure::<i32, Panicked>(1)
            .map(|_| -> i32 { panic!("bad handler") })
            .catch_panic(|p| p);
        assert_eq!(deferred.settle().await, Err(Panicked::new("bad handler")));
    }

    #[tokio::test]
    async fn test_catch_panic_in_recover_handler() {
        let deferred = reject::<i32, String>("first".to_string())
            .recover(|_| -> crate::deferred::Pure<i32, String> { panic!("recovery failed") })
            .catch_panic(|p| p.to_string());
        assert_eq!(
            deferred.settle().await,
            Err("handler panicked: recovery failed".to_string())
        );
    }

    #[tokio::test]
    async fn test_catch_panic_passes_outcomes_through() {
        let ok = pure::<_, String>(3).catch_panic(|p| p.to_string());
        assert_eq!(ok.settle().await, Ok(3));

        let err = reject::<i32, _>("plain".to_string()).catch_panic(|p| p.to_string());
        assert_eq!(err.settle().await, Err("plain".to_string()));
    }
}
