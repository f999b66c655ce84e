//! Shared application state for axum handlers.

use std::sync::Arc;

use rfpanel_app::ports::{ControllerClient, ToastSink};
use rfpanel_app::services::panel_service::PanelService;
use rfpanel_app::toast_bus::ToastBus;

/// Application state shared across all axum handlers.
///
/// Generic over the controller client and toast sink to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<C, N> {
    /// Event handling over the immutable panel.
    pub service: Arc<PanelService<C, N>>,
    /// Broadcast bus the SSE endpoint subscribes to.
    pub toasts: Arc<ToastBus>,
}

impl<C, N> Clone for AppState<C, N> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            toasts: Arc::clone(&self.toasts),
        }
    }
}

impl<C, N> AppState<C, N>
where
    C: ControllerClient + Send + Sync + 'static,
    N: ToastSink + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(service: PanelService<C, N>, toasts: Arc<ToastBus>) -> Self {
        Self {
            service: Arc::new(service),
            toasts,
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service needs to be shared with background tasks
    /// before constructing the HTTP state.
    pub fn from_arcs(service: Arc<PanelService<C, N>>, toasts: Arc<ToastBus>) -> Self {
        Self { service, toasts }
    }
}
