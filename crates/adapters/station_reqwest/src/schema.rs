//! Schema source over HTTP — one fetch, then the document is parsed.

use std::time::Duration;

use rfpanel_app::ports::SchemaSource;
use rfpanel_domain::error::{PanelError, SchemaLoadError};
use rfpanel_domain::schema::Schema;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// [`SchemaSource`] implementation fetching the schema document from a
/// fixed URL.
///
/// The upstream failure reason is carried verbatim inside
/// [`SchemaLoadError::Fetch`] so it can be shown to the user unchanged.
pub struct HttpSchemaSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSchemaSource {
    /// Create a source for the schema document at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::SchemaLoad`] when the underlying HTTP client
    /// cannot be constructed.
    pub fn new(url: impl Into<String>) -> Result<Self, PanelError> {
        let url = url.into();
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| SchemaLoadError::Fetch {
                url: url.clone(),
                reason: err.to_string(),
            })?;
        Ok(Self { http, url })
    }

    fn fetch_error(&self, err: &reqwest::Error) -> PanelError {
        SchemaLoadError::Fetch {
            url: self.url.clone(),
            reason: err.to_string(),
        }
        .into()
    }
}

impl SchemaSource for HttpSchemaSource {
    async fn fetch(&self) -> Result<Schema, PanelError> {
        tracing::info!(url = %self.url, "fetching device schema");
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|err| self.fetch_error(&err))?
            .error_for_status()
            .map_err(|err| self.fetch_error(&err))?;
        let body = response
            .text()
            .await
            .map_err(|err| self.fetch_error(&err))?;
        Ok(body.parse::<Schema>()?)
    }
}
