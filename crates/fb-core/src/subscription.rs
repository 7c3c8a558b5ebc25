//! Scoped subscription handle.
//!
//! A [`FeedSubscription`] owns the receiving end of a feed listener together
//! with the release hook that detaches it from the source. Release runs exactly
//! once: on [`FeedSubscription::unsubscribe`] or when the handle is dropped.

use tokio::sync::mpsc;

type ReleaseHook = Box<dyn FnOnce() + Send>;

pub struct FeedSubscription<T> {
    rx: mpsc::UnboundedReceiver<T>,
    release: Option<ReleaseHook>,
}

impl<T> FeedSubscription<T> {
    pub fn new(rx: mpsc::UnboundedReceiver<T>, release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            rx,
            release: Some(Box::new(release)),
        }
    }

    /// Subscription with nothing to release on the source side.
    pub fn detached(rx: mpsc::UnboundedReceiver<T>) -> Self {
        Self { rx, release: None }
    }

    /// Next notification, or `None` once the source has gone away.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Result<T, mpsc::error::TryRecvError> {
        self.rx.try_recv()
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Detach from the source now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
            #[cfg(feature = "tracing")]
            tracing::debug!("feed subscription released");
        }
        self.rx.close();
    }
}

impl<T> Drop for FeedSubscription<T> {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl<T> std::fmt::Debug for FeedSubscription<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}
