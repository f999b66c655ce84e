//! # rfpanel-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** over the synthesized panel
//!   (`/api/panel`, `/api/controls/{id}/…`)
//! - Stream **toasts** to connected clients over SSE (`/api/toasts/stream`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `rfpanel-app` (for port traits and services) and
//! `rfpanel-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
