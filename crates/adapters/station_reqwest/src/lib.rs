//! # rfpanel-adapter-station-reqwest
//!
//! HTTP client adapter for the RF station, built on
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the **`ControllerClient` port**: deliver device commands to
//!   the station's control endpoint, query its status endpoint, and request
//!   restarts
//! - Implement the **`SchemaSource` port**: fetch the device schema document
//!   exactly once at startup
//! - Preserve the station's wire contract (GET-style control requests with
//!   `callback` parameters, optional JSONP reply envelope)
//!
//! ## Dependency rule
//! Depends on `rfpanel-app` (for the port traits) and `rfpanel-domain` (for
//! commands, schema, and error types). Never leaks reqwest types upward.

pub mod client;
pub mod schema;

pub use client::StationClient;
pub use schema::HttpSchemaSource;
