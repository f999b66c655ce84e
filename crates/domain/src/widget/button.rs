//! Buttons — the simplest synthesized control.

use crate::id::ControlId;
use crate::schema::CommandTriple;

/// A single push-button control.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub id: ControlId,
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    #[must_use]
    pub fn new(label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            id: ControlId::new(),
            label: label.into(),
            action,
        }
    }
}

/// What activating a button means to the command translator.
///
/// The action is decided once at synthesis time, so translation never has
/// to re-derive intent from labels or device types.
#[derive(Debug, Clone, PartialEq)]
pub enum ButtonAction {
    /// Send the button's own label as the command value.
    Switch,
    /// Send a fixed numeric level.
    SetLevel { value: i64 },
    /// Expand the stored triples into one command per member device.
    Fanout { triples: Vec<CommandTriple> },
    /// Show or hide the owning remote sub-panel; never produces a command.
    ToggleRemote,
    /// Query the controller's status endpoint.
    Info,
    /// Ask the controller to restart itself.
    Restart,
}
