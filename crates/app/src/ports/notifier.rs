//! Notifier port — delivery of transient user-facing toasts.

use std::future::Future;

use rfpanel_domain::error::PanelError;
use rfpanel_domain::toast::Toast;

/// Delivers toasts to whatever presentation layer is attached.
///
/// Publishing must succeed even when nobody is listening; a toast with no
/// audience is simply dropped.
pub trait ToastSink {
    /// Publish one toast to all current subscribers.
    fn push(&self, toast: Toast) -> impl Future<Output = Result<(), PanelError>> + Send;
}

impl<T: ToastSink + Send + Sync> ToastSink for std::sync::Arc<T> {
    fn push(&self, toast: Toast) -> impl Future<Output = Result<(), PanelError>> + Send {
        (**self).push(toast)
    }
}
