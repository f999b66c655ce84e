//! # rfpanel-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ControllerClient` — commands, status queries, and restarts against the RF station
//!   - `SchemaSource` — one-shot retrieval of the device schema
//!   - `ToastSink` — delivery of user-facing notifications
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PanelService` — handle presentation events end to end
//!   - `panel_loader` — fetch the schema once and synthesize the panel
//! - Translate presentation events into controller commands (`translate`)
//! - Provide **in-process infrastructure** (toast bus) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* transport or IO works
//!
//! ## Dependency rule
//! Depends on `rfpanel-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod toast_bus;
pub mod translate;
