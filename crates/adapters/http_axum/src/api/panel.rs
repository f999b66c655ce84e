//! JSON handler for the panel snapshot.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use rfpanel_app::ports::{ControllerClient, ToastSink};

use crate::api::view::PanelView;
use crate::state::AppState;

/// Possible responses from the panel endpoint.
pub enum GetResponse {
    Ok(Json<PanelView>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/panel` — snapshot of the whole synthesized panel.
pub async fn get<C, N>(State(state): State<AppState<C, N>>) -> GetResponse
where
    C: ControllerClient + Send + Sync + 'static,
    N: ToastSink + Send + Sync + 'static,
{
    GetResponse::Ok(Json(PanelView::from(state.service.panel())))
}
