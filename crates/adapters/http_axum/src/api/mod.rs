//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod controls;
pub mod panel;
pub mod toasts;
pub mod view;

use axum::Router;
use axum::routing::{get, post};

use rfpanel_app::ports::{ControllerClient, ToastSink};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<C, N>() -> Router<AppState<C, N>>
where
    C: ControllerClient + Send + Sync + 'static,
    N: ToastSink + Send + Sync + 'static,
{
    Router::new()
        .route("/panel", get(panel::get::<C, N>))
        .route("/controls/{id}/press", post(controls::press::<C, N>))
        .route("/controls/{id}/input", post(controls::input::<C, N>))
        .route("/controls/{id}/commit", post(controls::commit::<C, N>))
        .route("/toasts/stream", get(toasts::stream::<C, N>))
}
