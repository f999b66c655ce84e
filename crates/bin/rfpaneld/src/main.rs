//! # rfpaneld — rfpanel daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Construct the RF-station client and schema source (adapters)
//! - Fetch the device schema **once** and synthesize the panel; a load
//!   failure is fatal — the error is logged verbatim and the process exits
//!   non-zero instead of serving a partial panel
//! - Construct the panel service, injecting adapters via port traits
//! - Build the axum router and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context as _;

use rfpanel_adapter_http_axum::state::AppState;
use rfpanel_adapter_station_reqwest::{HttpSchemaSource, StationClient};
use rfpanel_app::services::panel_loader;
use rfpanel_app::services::panel_service::PanelService;
use rfpanel_app::toast_bus::ToastBus;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    // Adapters
    let station = StationClient::new(&config.station.base_url)
        .context("failed to construct the station client")?;
    let schema_source =
        HttpSchemaSource::new(&config.schema.url).context("failed to construct the schema source")?;

    // Toast bus
    let toasts = Arc::new(ToastBus::new(256));

    // One-shot schema load; fatal on failure, no partial panel.
    let panel = match panel_loader::load(&schema_source, &toasts).await {
        Ok(panel) => panel,
        Err(err) => {
            tracing::error!(error = %err, "schema load failed, giving up");
            return Err(err).context("failed to load the device schema");
        }
    };

    // Service + HTTP
    let service = PanelService::new(panel, station, Arc::clone(&toasts));
    let state = AppState::new(service, toasts);
    let app = rfpanel_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "rfpaneld listening");

    axum::serve(listener, app)
        .await
        .context("server terminated")?;

    Ok(())
}
