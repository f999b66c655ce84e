//! Schema source port — one-shot retrieval of the device schema.

use std::future::Future;

use rfpanel_domain::error::PanelError;
use rfpanel_domain::schema::Schema;

/// Fetches and parses the device schema.
///
/// Called exactly once, before the engine starts serving; a failure here is
/// fatal because there is no panel to build without a schema.
pub trait SchemaSource {
    /// Retrieve the schema document and parse it.
    fn fetch(&self) -> impl Future<Output = Result<Schema, PanelError>> + Send;
}

impl<T: SchemaSource + Send + Sync> SchemaSource for std::sync::Arc<T> {
    fn fetch(&self) -> impl Future<Output = Result<Schema, PanelError>> + Send {
        (**self).fetch()
    }
}
