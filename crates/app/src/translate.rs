//! Event-to-command translation.
//!
//! Maps one committed presentation event to what it means: a local state
//! change, a controller query, or one or more wire commands. Translation is
//! pure — no IO and no mutation happen here; [`PanelService`] applies the
//! returned [`Translation`].
//!
//! [`PanelService`]: crate::services::panel_service::PanelService

use rfpanel_domain::command::CommandRequest;
use rfpanel_domain::error::{PanelError, UnknownControlError};
use rfpanel_domain::id::ControlId;
use rfpanel_domain::panel::Panel;
use rfpanel_domain::widget::ButtonAction;

/// A presentation event scoped to one synthesized control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A button was activated.
    ButtonPressed { control: ControlId },
    /// Live, uncommitted input on either half of an analog pair.
    SliderInput { control: ControlId, value: i64 },
    /// A committed value from either half of an analog pair (slider
    /// released, or the numeric field confirmed).
    SliderCommit { control: ControlId, value: i64 },
}

/// What one event resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Translation {
    /// Copy the value into the owning pair; strictly local, never a command.
    Mirror { control: ControlId, value: i64 },
    /// Flip the visibility of the remote sub-panel owning `control`;
    /// never a command.
    ToggleRemote { control: ControlId },
    /// Store the committed value in the owning pair, then send the command.
    Commit {
        control: ControlId,
        value: i64,
        command: CommandRequest,
    },
    /// Send these commands, one independent delivery attempt each.
    Commands(Vec<CommandRequest>),
    /// Query the controller's status endpoint.
    Info,
    /// Ask the controller to restart.
    Restart,
}

/// Resolve one event against the panel.
///
/// Buttons carry their meaning in their [`ButtonAction`], decided once at
/// synthesis time, so nothing here re-derives intent from labels or device
/// types. The plain switch case (digital, proove, remote keys) sends the
/// button's own label as the command value.
///
/// # Errors
///
/// Returns [`PanelError::UnknownControl`] when the event references an id
/// the panel never synthesized.
pub fn translate(panel: &Panel, event: &ControlEvent) -> Result<Translation, PanelError> {
    match event {
        ControlEvent::SliderInput { control, value } => {
            if panel.find_pair(*control).is_none() {
                return Err(UnknownControlError { control: *control }.into());
            }
            Ok(Translation::Mirror {
                control: *control,
                value: *value,
            })
        }
        ControlEvent::SliderCommit { control, value } => {
            let (set, _) = panel
                .find_pair(*control)
                .ok_or(UnknownControlError { control: *control })?;
            Ok(Translation::Commit {
                control: *control,
                value: *value,
                command: CommandRequest::new(set.device.clone(), *value),
            })
        }
        ControlEvent::ButtonPressed { control } => translate_press(panel, *control),
    }
}

fn translate_press(panel: &Panel, control: ControlId) -> Result<Translation, PanelError> {
    let found = panel
        .find_button(control)
        .ok_or(UnknownControlError { control })?;

    match (&found.button.action, found.set) {
        (ButtonAction::ToggleRemote, _) => Ok(Translation::ToggleRemote { control }),
        (ButtonAction::Info, _) => Ok(Translation::Info),
        (ButtonAction::Restart, _) => Ok(Translation::Restart),
        (ButtonAction::Fanout { triples }, _) => {
            // Every member receives the pressed button's label as its value;
            // the value stored in the triple stays unused.
            Ok(Translation::Commands(
                triples
                    .iter()
                    .map(|triple| {
                        CommandRequest::new(triple.device(), found.button.label.clone())
                    })
                    .collect(),
            ))
        }
        (ButtonAction::SetLevel { value }, Some(set)) => Ok(Translation::Commands(vec![
            CommandRequest::new(set.device.clone(), *value),
        ])),
        (ButtonAction::Switch, Some(set)) => Ok(Translation::Commands(vec![
            CommandRequest::new(set.device.clone(), found.button.label.clone()),
        ])),
        // A switch without an owning set cannot be synthesized; treat it
        // like a control we never produced.
        (ButtonAction::SetLevel { .. } | ButtonAction::Switch, None) => {
            Err(UnknownControlError { control }.into())
        }
    }
}
