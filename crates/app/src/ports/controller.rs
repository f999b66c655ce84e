//! Controller port — the RF station's remote-control surface.

use std::future::Future;

use rfpanel_domain::command::CommandRequest;
use rfpanel_domain::error::PanelError;

/// Client for the external controller that actually switches devices.
///
/// Implementations make exactly one attempt per call; there is no retry or
/// queueing layer. On success the returned string is the controller's
/// human-readable reply, suitable for a toast.
pub trait ControllerClient {
    /// Deliver one device command to the control endpoint.
    fn send(
        &self,
        command: &CommandRequest,
    ) -> impl Future<Output = Result<String, PanelError>> + Send;

    /// Query the controller's status endpoint.
    fn info(&self) -> impl Future<Output = Result<String, PanelError>> + Send;

    /// Ask the controller to restart itself.
    fn restart(&self) -> impl Future<Output = Result<(), PanelError>> + Send;
}

impl<T: ControllerClient + Send + Sync> ControllerClient for std::sync::Arc<T> {
    fn send(
        &self,
        command: &CommandRequest,
    ) -> impl Future<Output = Result<String, PanelError>> + Send {
        (**self).send(command)
    }

    fn info(&self) -> impl Future<Output = Result<String, PanelError>> + Send {
        (**self).info()
    }

    fn restart(&self) -> impl Future<Output = Result<(), PanelError>> + Send {
        (**self).restart()
    }
}
