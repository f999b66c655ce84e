//! Common error types used across the workspace.

use crate::id::ControlId;

/// Top-level error for the panel engine.
///
/// Each failure class is a typed sub-error converted via `#[from]`; layers
/// above decide which classes are fatal and which are recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("Schema load error")]
    SchemaLoad(#[from] SchemaLoadError),

    #[error("Schema type error")]
    SchemaType(#[from] SchemaTypeError),

    #[error("Transport error")]
    Transport(#[from] TransportError),

    #[error("Unknown control")]
    UnknownControl(#[from] UnknownControlError),
}

/// Fatal failure to retrieve or structurally parse the device schema.
///
/// Any of these aborts panel construction; there is no partial panel to
/// show when the schema itself cannot be trusted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaLoadError {
    /// The schema endpoint could not be reached or answered with an error.
    #[error("failed to fetch schema from {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The response body is not valid JSON.
    #[error("schema is not valid JSON: {reason}")]
    Json { reason: String },

    /// The schema root must be an array of device descriptors.
    #[error("schema root is not an array of device descriptors")]
    NotAnArray,

    /// An entry with a recognized type has a malformed payload.
    #[error("device {device:?} is malformed: {reason}")]
    Descriptor { device: String, reason: String },

    /// Numeric bounds are inverted.
    #[error("device {device:?} has inverted bounds: min {min} is greater than max {max}")]
    Bounds { device: String, min: i64, max: i64 },
}

/// A descriptor whose `type` is not in the recognized set.
///
/// Rejection is per descriptor: the offending entry produces no widgets
/// while the rest of the panel still builds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Found device without specified type: {device}")]
pub struct SchemaTypeError {
    /// Device id of the offending schema entry.
    pub device: String,
}

/// A command or query that failed to reach the controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request to {endpoint} failed: {reason}")]
pub struct TransportError {
    pub endpoint: String,
    pub reason: String,
}

/// An event referenced a control id the panel never synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no control with id {control}")]
pub struct UnknownControlError {
    pub control: ControlId,
}
