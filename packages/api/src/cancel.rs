use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag tying a fetch to the lifetime of the view that started it.
///
/// The view cancels the token when it is dropped; a response that settles
/// afterwards goes through [`CancelToken::settle`] and is discarded.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// `Some(value)` while the token is live, `None` once it was cancelled.
    pub fn settle<T>(&self, value: T) -> Option<T> {
        if self.is_cancelled() {
            tracing::debug!("discarding response for a dropped view");
            None
        } else {
            Some(value)
        }
    }

    /// Await `fut` and settle its output.
    pub async fn run<F: std::future::Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }
        let output = fut.await;
        self.settle(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_response_after_cancel_is_discarded() {
        let token = CancelToken::new();
        let view = token.clone();
        assert_eq!(token.run(async { 1 }).await, Some(1));

        let late = token.run(async {
            // the view goes away while the request is in flight
            view.cancel();
            2
        });
        assert_eq!(late.await, None);
        assert!(token.is_cancelled());
        assert_eq!(token.settle("x"), None);
    }
}
