//! Panel service — routes presentation events through translation to effects.

use serde::Serialize;

use rfpanel_domain::command::CommandRequest;
use rfpanel_domain::error::{PanelError, UnknownControlError};
use rfpanel_domain::id::ControlId;
use rfpanel_domain::panel::Panel;
use rfpanel_domain::toast::Toast;
use rfpanel_domain::widget::RemoteVisibility;

use crate::ports::{ControllerClient, ToastSink};
use crate::translate::{ControlEvent, Translation, translate};

/// Toast shown when a command or query cannot reach the station.
const SEND_FAILURE_TOAST: &str = "There was an error sending the HTTP request";
/// Toast shown when the status query fails.
const INFO_FAILURE_TOAST: &str = "Couldn't get info";
/// Toast announcing that a restart was requested.
const RESTART_TOAST: &str = "Restarting RF Station";

/// Application service handling presentation events end to end.
///
/// Holds the immutable panel plus the outbound ports. Transport failures
/// never fail [`handle_event`](Self::handle_event): each command gets one
/// delivery attempt and its outcome is surfaced as a toast, leaving the
/// panel usable throughout.
pub struct PanelService<C, N> {
    panel: Panel,
    controller: C,
    toasts: N,
}

impl<C: ControllerClient, N: ToastSink> PanelService<C, N> {
    /// Create a new service over an already synthesized panel.
    pub fn new(panel: Panel, controller: C, toasts: N) -> Self {
        Self {
            panel,
            controller,
            toasts,
        }
    }

    /// Read access to the panel for presentation snapshots.
    #[must_use]
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Handle one presentation event.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::UnknownControl`] when the event references a
    /// control id the panel never synthesized.
    #[tracing::instrument(skip(self))]
    pub async fn handle_event(&self, event: ControlEvent) -> Result<EventOutcome, PanelError> {
        match translate(&self.panel, &event)? {
            Translation::Mirror { control, value } => {
                self.mirror(control, value)?;
                Ok(EventOutcome::Mirrored { value })
            }
            Translation::ToggleRemote { control } => {
                let visibility = self.toggle(control)?;
                Ok(EventOutcome::Toggled {
                    visibility,
                    label: visibility.toggle_label().to_string(),
                })
            }
            Translation::Commit {
                control,
                value,
                command,
            } => {
                self.mirror(control, value)?;
                let failed = self.dispatch(&[command]).await;
                Ok(EventOutcome::Dispatched {
                    attempted: 1,
                    failed,
                })
            }
            Translation::Commands(commands) => {
                let failed = self.dispatch(&commands).await;
                Ok(EventOutcome::Dispatched {
                    attempted: commands.len(),
                    failed,
                })
            }
            Translation::Info => {
                self.query_info().await;
                Ok(EventOutcome::InfoRequested)
            }
            Translation::Restart => {
                self.request_restart().await;
                Ok(EventOutcome::RestartRequested)
            }
        }
    }

    fn mirror(&self, control: ControlId, value: i64) -> Result<(), PanelError> {
        let (_, pair) = self
            .panel
            .find_pair(control)
            .ok_or(UnknownControlError { control })?;
        pair.set_value(value);
        Ok(())
    }

    fn toggle(&self, control: ControlId) -> Result<RemoteVisibility, PanelError> {
        let remote = self
            .panel
            .find_remote(control)
            .ok_or(UnknownControlError { control })?;
        Ok(remote.toggle())
    }

    /// Deliver each command independently; no queueing, coalescing, or
    /// retries. Returns how many attempts failed.
    async fn dispatch(&self, commands: &[CommandRequest]) -> usize {
        let mut failed = 0;
        for command in commands {
            match self.controller.send(command).await {
                Ok(reply) => {
                    tracing::debug!(device = %command.device, value = %command.value, "command delivered");
                    let _ = self.toasts.push(Toast::info(reply)).await;
                }
                Err(err) => {
                    tracing::error!(device = %command.device, error = %err, "command delivery failed");
                    let _ = self.toasts.push(Toast::error(SEND_FAILURE_TOAST)).await;
                    failed += 1;
                }
            }
        }
        failed
    }

    async fn query_info(&self) {
        match self.controller.info().await {
            Ok(reply) => {
                let _ = self.toasts.push(Toast::info(reply)).await;
            }
            Err(err) => {
                tracing::error!(error = %err, "info query failed");
                let _ = self.toasts.push(Toast::error(INFO_FAILURE_TOAST)).await;
            }
        }
    }

    /// The announcement goes out first: a restarting station usually drops
    /// the connection before replying, and that is not an error worth
    /// showing.
    async fn request_restart(&self) {
        let _ = self.toasts.push(Toast::info(RESTART_TOAST)).await;
        if let Err(err) = self.controller.restart().await {
            tracing::warn!(error = %err, "restart request did not complete cleanly");
        }
    }
}

/// What handling one event did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventOutcome {
    /// A live value was mirrored into its sibling; nothing was sent.
    Mirrored { value: i64 },
    /// A remote sub-panel changed visibility.
    Toggled {
        visibility: RemoteVisibility,
        label: String,
    },
    /// Commands were attempted, `failed` of them unsuccessfully.
    Dispatched { attempted: usize, failed: usize },
    /// The controller's status endpoint was queried.
    InfoRequested,
    /// A controller restart was requested.
    RestartRequested,
}
