//! # rfpanel-domain
//!
//! Pure domain model for the rfpanel control-panel engine.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Schema** (device descriptors and their closed set of kinds)
//! - Define **Widgets** (buttons, slider/numeric pairs, remote sub-panels)
//! - Define the **Panel** (room sections, reserved extras, control lookup)
//! - Define **Commands** (the wire-level unit sent to the RF station)
//! - Define **Toasts** (transient user-facing notifications)
//! - Contain all invariant enforcement and widget-synthesis logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod command;
pub mod panel;
pub mod schema;
pub mod toast;
pub mod widget;
