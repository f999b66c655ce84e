//! Server-Sent Events (SSE) stream of toasts.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use rfpanel_app::ports::{ControllerClient, ToastSink};

use crate::state::AppState;

/// `GET /api/toasts/stream` — SSE stream of user-facing toasts.
///
/// Subscribes to the toast bus broadcast channel and sends JSON-encoded
/// toasts as SSE `data:` frames. The stream continues until the client
/// disconnects or the bus is closed. Lagged subscribers skip the toasts
/// they missed; toasts are transient by definition.
pub async fn stream<C, N>(
    State(state): State<AppState<C, N>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>
where
    C: ControllerClient + Send + Sync + 'static,
    N: ToastSink + Send + Sync + 'static,
{
    let rx = state.toasts.subscribe();
    let toast_stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(toast) => match serde_json::to_string(&toast) {
            Ok(json) => Some(Ok(Event::default().data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize toast to JSON for SSE stream");
                None
            }
        },
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(
                skipped = n,
                "SSE subscriber lagged, some toasts were dropped"
            );
            None
        }
    });

    Sse::new(toast_stream).keep_alive(KeepAlive::default())
}
