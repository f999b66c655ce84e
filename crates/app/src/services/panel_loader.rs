//! Panel loader — one-shot schema retrieval and panel synthesis.

use rfpanel_domain::error::PanelError;
use rfpanel_domain::panel::Panel;
use rfpanel_domain::toast::Toast;

use crate::ports::{SchemaSource, ToastSink};

/// Fetch the schema once and synthesize the panel.
///
/// Descriptors rejected during parsing are not fatal: each one is surfaced
/// as an error toast (and a log line) while the panel builds from the
/// remaining entries.
///
/// # Errors
///
/// Propagates [`PanelError::SchemaLoad`] from the source; without a schema
/// there is no panel to build, so the caller is expected to give up.
#[tracing::instrument(skip(source, toasts))]
pub async fn load<S, N>(source: &S, toasts: &N) -> Result<Panel, PanelError>
where
    S: SchemaSource,
    N: ToastSink,
{
    let schema = source.fetch().await?;

    for rejection in &schema.rejected {
        tracing::warn!(device = %rejection.device, "descriptor rejected");
        let _ = toasts.push(Toast::error(rejection.to_string())).await;
    }
    tracing::info!(
        descriptors = schema.descriptors.len(),
        rejected = schema.rejected.len(),
        "schema loaded"
    );

    Ok(Panel::from_schema(&schema))
}
