//! JSON handlers for control events.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use rfpanel_app::ports::{ControllerClient, ToastSink};
use rfpanel_app::services::panel_service::EventOutcome;
use rfpanel_app::translate::ControlEvent;
use rfpanel_domain::id::ControlId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for the input and commit endpoints.
#[derive(Deserialize)]
pub struct ValueRequest {
    pub value: i64,
}

/// Possible responses from the event endpoints.
pub enum EventResponse {
    Ok(Json<EventOutcome>),
}

impl IntoResponse for EventResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/controls/{id}/press` — activate a button.
pub async fn press<C, N>(
    State(state): State<AppState<C, N>>,
    Path(id): Path<ControlId>,
) -> Result<EventResponse, ApiError>
where
    C: ControllerClient + Send + Sync + 'static,
    N: ToastSink + Send + Sync + 'static,
{
    let outcome = state
        .service
        .handle_event(ControlEvent::ButtonPressed { control: id })
        .await?;
    Ok(EventResponse::Ok(Json(outcome)))
}

/// `POST /api/controls/{id}/input` — live, uncommitted input on either half
/// of an analog pair. Mirrors locally; never reaches the station.
pub async fn input<C, N>(
    State(state): State<AppState<C, N>>,
    Path(id): Path<ControlId>,
    Json(req): Json<ValueRequest>,
) -> Result<EventResponse, ApiError>
where
    C: ControllerClient + Send + Sync + 'static,
    N: ToastSink + Send + Sync + 'static,
{
    let outcome = state
        .service
        .handle_event(ControlEvent::SliderInput {
            control: id,
            value: req.value,
        })
        .await?;
    Ok(EventResponse::Ok(Json(outcome)))
}

/// `POST /api/controls/{id}/commit` — a committed pair value (slider
/// released, or the numeric field confirmed).
pub async fn commit<C, N>(
    State(state): State<AppState<C, N>>,
    Path(id): Path<ControlId>,
    Json(req): Json<ValueRequest>,
) -> Result<EventResponse, ApiError>
where
    C: ControllerClient + Send + Sync + 'static,
    N: ToastSink + Send + Sync + 'static,
{
    let outcome = state
        .service
        .handle_event(ControlEvent::SliderCommit {
            control: id,
            value: req.value,
        })
        .await?;
    Ok(EventResponse::Ok(Json(outcome)))
}
