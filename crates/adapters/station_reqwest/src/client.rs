//! Controller client over the RF station's HTTP surface.

use std::time::Duration;

use rfpanel_app::ports::ControllerClient;
use rfpanel_domain::command::CommandRequest;
use rfpanel_domain::error::{PanelError, TransportError};

/// Applied to every request on the shared client; there is no retry, so a
/// hung station must not hang the panel.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`ControllerClient`] implementation against the RF station's fixed
/// endpoints.
///
/// Every call is a single delivery attempt; failures come back as
/// [`TransportError`] and the caller decides how to surface them.
pub struct StationClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationClient {
    /// Create a client for the station at `base_url` (scheme + authority,
    /// trailing slash tolerated).
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Transport`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, PanelError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| TransportError {
                endpoint: base_url.clone(),
                reason: err.to_string(),
            })?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn get_display_string(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String, PanelError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|err| transport(url, &err))?
            .error_for_status()
            .map_err(|err| transport(url, &err))?;
        let body = response.text().await.map_err(|err| transport(url, &err))?;
        Ok(display_string(&body))
    }
}

impl ControllerClient for StationClient {
    async fn send(&self, command: &CommandRequest) -> Result<String, PanelError> {
        let url = self.endpoint("deviceCtrl");
        let [device, value] = command.to_query();
        tracing::debug!(device = %command.device, value = %command.value, "sending device command");
        self.get_display_string(&url, &[device, value, ("callback", "send".to_string())])
            .await
    }

    async fn info(&self) -> Result<String, PanelError> {
        let url = self.endpoint("info");
        tracing::debug!("querying station info");
        self.get_display_string(&url, &[("callback", "jsonCb".to_string())])
            .await
    }

    async fn restart(&self) -> Result<(), PanelError> {
        let url = self.endpoint("restart");
        tracing::debug!("requesting station restart");
        self.http
            .post(&url)
            .send()
            .await
            .map_err(|err| transport(&url, &err))?
            .error_for_status()
            .map_err(|err| transport(&url, &err))?;
        Ok(())
    }
}

fn transport(endpoint: &str, err: &reqwest::Error) -> PanelError {
    TransportError {
        endpoint: endpoint.to_string(),
        reason: err.to_string(),
    }
    .into()
}

/// Mine a station reply for a human-readable display string.
///
/// The station may wrap its reply in a JSONP envelope (`send(...)`,
/// `jsonCb(...)`); the envelope is stripped, then the JSON object's
/// `response` field is taken when present. Anything else falls back to the
/// trimmed raw body — the engine never inspects reply structure beyond
/// this.
fn display_string(body: &str) -> String {
    let trimmed = body.trim();
    let inner = strip_jsonp(trimmed).unwrap_or(trimmed);
    match serde_json::from_str::<serde_json::Value>(inner) {
        Ok(value) => value
            .get("response")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| inner.to_string(), ToString::to_string),
        Err(_) => inner.to_string(),
    }
}

fn strip_jsonp(body: &str) -> Option<&str> {
    let (callback, rest) = body.split_once('(')?;
    if callback.is_empty()
        || !callback
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }
    rest.strip_suffix(')').map(str::trim)
}
