//! End-to-end smoke tests for the full rfpaneld stack.
//!
//! Each test builds the complete application (real panel synthesized from a
//! schema document, real service, real axum router) over a recording fake
//! controller, and exercises the HTTP layer via `tower::ServiceExt::oneshot`
//! — no TCP port is bound and no station is contacted.

use std::future::Future;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use rfpanel_adapter_http_axum::router;
use rfpanel_adapter_http_axum::state::AppState;
use rfpanel_app::ports::ControllerClient;
use rfpanel_app::services::panel_service::PanelService;
use rfpanel_app::toast_bus::ToastBus;
use rfpanel_domain::command::CommandRequest;
use rfpanel_domain::error::PanelError;
use rfpanel_domain::panel::Panel;
use rfpanel_domain::schema::Schema;

/// Fake station that records every delivered command.
#[derive(Default)]
struct RecordingController {
    sent: Mutex<Vec<CommandRequest>>,
}

impl ControllerClient for RecordingController {
    fn send(
        &self,
        command: &CommandRequest,
    ) -> impl Future<Output = Result<String, PanelError>> + Send {
        let mut sent = self.sent.lock().unwrap();
        sent.push(command.clone());
        let reply = format!("{} is now {}", command.device, command.value);
        async move { Ok(reply) }
    }

    fn info(&self) -> impl Future<Output = Result<String, PanelError>> + Send {
        async { Ok("RF Station up 42 minutes".to_string()) }
    }

    fn restart(&self) -> impl Future<Output = Result<(), PanelError>> + Send {
        async { Ok(()) }
    }
}

const SCHEMA: &str = r#"[
    {"room": "Hallway", "device": "lampA", "type": "digital"},
    {"room": "Bedroom", "device": "dimmer", "type": "analog", "min": 0, "max": 100},
    {"room": "Living room", "device": "tvRemote", "type": "remote",
     "buttons": {"Power": 1, "Mute": 2}},
    {"room": "All", "device": "groups", "type": "groups", "devices": [
        {"name": "Evening",
         "on": [["lampA", "digital", "On"], ["dimmer", "analog", 75]],
         "off": [["lampA", "digital", "Off"], ["dimmer", "analog", 0]]}
    ]}
]"#;

/// Build a fully-wired router over a recording controller.
fn app() -> (axum::Router, Arc<RecordingController>) {
    let schema: Schema = SCHEMA.parse().expect("test schema should parse");
    let controller = Arc::new(RecordingController::default());
    let toasts = Arc::new(ToastBus::new(256));

    let service = PanelService::new(
        Panel::from_schema(&schema),
        Arc::clone(&controller),
        Arc::clone(&toasts),
    );
    let state = AppState::new(service, toasts);

    (router::build(state), controller)
}

async fn get_json(app: &axum::Router, uri: &str) -> serde_json::Value {
    let resp = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post(app: &axum::Router, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Find a button id in the panel snapshot by owning set and label.
fn button_id(panel: &serde_json::Value, device: &str, label: &str) -> String {
    panel["sections"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|section| section["sets"].as_array().unwrap())
        .find(|set| set["device"] == device)
        .and_then(|set| {
            set["buttons"]
                .as_array()
                .unwrap()
                .iter()
                .find(|b| b["label"] == label)
        })
        .and_then(|b| b["id"].as_str())
        .unwrap()
        .to_string()
}

fn set_view<'a>(panel: &'a serde_json::Value, device: &str) -> &'a serde_json::Value {
    panel["sections"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|section| section["sets"].as_array().unwrap())
        .find(|set| set["device"] == device)
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _) = app();

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Panel snapshot
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_the_synthesized_panel() {
    let (app, _) = app();

    let panel = get_json(&app, "/api/panel").await;

    let titles: Vec<&str> = panel["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Hallway", "Bedroom", "Living room", "Groups"]);

    let extras: Vec<&str> = panel["extras"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["label"].as_str().unwrap())
        .collect();
    assert_eq!(extras, ["Restart", "Get info"]);

    let dimmer = set_view(&panel, "dimmer");
    assert_eq!(dimmer["pair"]["value"], 50);
    assert_eq!(dimmer["pair"]["percent"], true);

    let remote = set_view(&panel, "tvRemote");
    assert_eq!(remote["remote"]["visibility"], "hidden");
    assert_eq!(remote["remote"]["toggle"]["label"], "Show remote");
}

// ---------------------------------------------------------------------------
// Button presses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_deliver_a_digital_press_to_the_station() {
    let (app, controller) = app();
    let panel = get_json(&app, "/api/panel").await;
    let id = button_id(&panel, "lampA", "On");

    let (status, outcome) = post(&app, &format!("/api/controls/{id}/press"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["outcome"], "dispatched");
    assert_eq!(outcome["attempted"], 1);
    assert_eq!(outcome["failed"], 0);
    assert_eq!(
        controller.sent.lock().unwrap().as_slice(),
        [CommandRequest::new("lampA", "On")]
    );
}

#[tokio::test]
async fn should_fan_out_a_group_press_to_every_member() {
    let (app, controller) = app();
    let panel = get_json(&app, "/api/panel").await;
    let id = button_id(&panel, "Evening", "On");

    let (status, outcome) = post(&app, &format!("/api/controls/{id}/press"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["attempted"], 2);
    let sent = controller.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], CommandRequest::new("lampA", "On"));
    assert_eq!(sent[1], CommandRequest::new("dimmer", "On"));
}

// ---------------------------------------------------------------------------
// Analog pair: live input vs commit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_mirror_live_input_without_contacting_the_station() {
    let (app, controller) = app();
    let panel = get_json(&app, "/api/panel").await;
    let field_id = set_view(&panel, "dimmer")["pair"]["field_id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, outcome) = post(
        &app,
        &format!("/api/controls/{field_id}/input"),
        Some(serde_json::json!({"value": 73})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["outcome"], "mirrored");
    assert_eq!(outcome["value"], 73);
    assert!(controller.sent.lock().unwrap().is_empty());

    // The snapshot now shows the mirrored value on the whole pair.
    let panel = get_json(&app, "/api/panel").await;
    assert_eq!(set_view(&panel, "dimmer")["pair"]["value"], 73);
}

#[tokio::test]
async fn should_send_one_command_per_commit() {
    let (app, controller) = app();
    let panel = get_json(&app, "/api/panel").await;
    let slider_id = set_view(&panel, "dimmer")["pair"]["slider_id"]
        .as_str()
        .unwrap()
        .to_string();

    for value in [10, 20, 30, 40, 50] {
        let (status, outcome) = post(
            &app,
            &format!("/api/controls/{slider_id}/commit"),
            Some(serde_json::json!({"value": value})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["outcome"], "dispatched");
    }

    // Flooding: five commits, five independent deliveries, none merged.
    let sent = controller.sent.lock().unwrap();
    let values: Vec<String> = sent.iter().map(|c| c.value.to_string()).collect();
    assert_eq!(values, ["10", "20", "30", "40", "50"]);
}

// ---------------------------------------------------------------------------
// Remote toggle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_toggle_the_remote_sub_panel_round_trip() {
    let (app, controller) = app();
    let panel = get_json(&app, "/api/panel").await;
    let toggle_id = set_view(&panel, "tvRemote")["remote"]["toggle"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let (_, outcome) = post(&app, &format!("/api/controls/{toggle_id}/press"), None).await;
    assert_eq!(outcome["outcome"], "toggled");
    assert_eq!(outcome["visibility"], "shown");
    assert_eq!(outcome["label"], "Hide remote");

    let (_, outcome) = post(&app, &format!("/api/controls/{toggle_id}/press"), None).await;
    assert_eq!(outcome["visibility"], "hidden");
    assert_eq!(outcome["label"], "Show remote");

    assert!(controller.sent.lock().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Reserved extras
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_query_info_through_the_reserved_extra() {
    let (app, _) = app();
    let panel = get_json(&app, "/api/panel").await;
    let id = panel["extras"][1]["id"].as_str().unwrap().to_string();

    let (status, outcome) = post(&app, &format!("/api/controls/{id}/press"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["outcome"], "info_requested");
}

#[tokio::test]
async fn should_request_a_restart_through_the_reserved_extra() {
    let (app, _) = app();
    let panel = get_json(&app, "/api/panel").await;
    let id = panel["extras"][0]["id"].as_str().unwrap().to_string();

    let (_, outcome) = post(&app, &format!("/api/controls/{id}/press"), None).await;

    assert_eq!(outcome["outcome"], "restart_requested");
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_for_an_unknown_control_id() {
    let (app, _) = app();
    let unknown = rfpanel_domain::id::ControlId::new();

    let (status, body) = post(&app, &format!("/api/controls/{unknown}/press"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("no control"));
}

#[tokio::test]
async fn should_reject_a_malformed_control_id() {
    let (app, _) = app();

    // The path rejection comes from axum itself, so only the status matters.
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/controls/not-a-uuid/press")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
