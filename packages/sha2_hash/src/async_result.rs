//! Future returned by every digest call

use crate::{HashError, HashResult, Result};
use futures::future::{self, BoxFuture};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Pending digest, resolving to the digest bytes or the error that stopped it
///
/// Nothing runs until the result is polled, and dropping it cancels the digest.
/// It can be driven by any executor; a tokio runtime is only used when present.
#[must_use = "a digest result does nothing unless awaited"]
pub struct AsyncHashResult {
    inner: BoxFuture<'static, Result<HashResult>>,
}

impl AsyncHashResult {
    pub(crate) fn new<F>(digest: F) -> Self
    where
        F: Future<Output = Result<HashResult>> + Send + 'static,
    {
        Self {
            inner: Box::pin(digest),
        }
    }

    /// A result that is already complete
    pub fn ready(result: Result<HashResult>) -> Self {
        Self::new(future::ready(result))
    }

    /// A result that has already failed
    pub fn error(error: HashError) -> Self {
        Self::ready(Err(error))
    }
}

impl Future for AsyncHashResult {
    type Output = Result<HashResult>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}
