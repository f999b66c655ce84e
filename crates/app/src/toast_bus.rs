//! In-process toast bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use rfpanel_domain::error::PanelError;
use rfpanel_domain::toast::Toast;

use crate::ports::ToastSink;

/// In-process toast fan-out using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the toast is simply dropped).
pub struct ToastBus {
    sender: broadcast::Sender<Toast>,
}

impl ToastBus {
    /// Create a new toast bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to toasts on this bus.
    ///
    /// Returns a receiver that will get all toasts published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.sender.subscribe()
    }
}

impl ToastSink for ToastBus {
    fn push(&self, toast: Toast) -> impl Future<Output = Result<(), PanelError>> + Send {
        // broadcast::send fails only when there are zero receivers,
        // which is fine — we simply ignore the error.
        let _ = self.sender.send(toast);
        async { Ok(()) }
    }
}
