//! Context provides cooperative cancellation for a pipeline run, bound to whoever started it.

use std::{future::Future, sync::Arc};

use tokio::sync::watch;

#[derive(Clone, Debug)]
pub struct Context {
    inner: Arc<watch::Sender<bool>>,
}

impl Context {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Context {
            inner: Arc::new(tx),
        }
    }

    /// Cancel the context. Every clone observes it.
    pub fn cancel(&self) {
        self.inner.send_replace(true);
    }

    /// Returns true iff the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.inner.borrow()
    }

    /// Wait until the context is cancelled.
    pub async fn cancelled(&self) {
        let mut rx = self.inner.subscribe();
        // The sender lives as long as `self`, so this only returns once cancelled.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }

    /// Drive `future` to completion unless the context is cancelled first.
    ///
    /// Returns `None` without polling `future` if the context is already cancelled.
    pub async fn guard<F: Future>(&self, future: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            output = future => Some(output),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
