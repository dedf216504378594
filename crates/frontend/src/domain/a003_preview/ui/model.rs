//! Preview - Model (network probes)

use crate::shared::error::ApiError;
use crate::shared::http::{head_content_type, resolve_redirects};
use contracts::enums::FileKind;

/// HEAD the resource and classify its declared media type.
pub async fn probe_kind(url: &str) -> Result<FileKind, ApiError> {
    let content_type = head_content_type(url).await?;
    let kind = FileKind::from_content_type(&content_type);
    log::debug!("Probed {} as '{}' ({})", url, content_type, kind);
    Ok(kind)
}

/// Ask the conversion endpoint for a previewable rendition and return the
/// URL it finally redirected to.
pub async fn resolve_presentation(endpoint_url: &str) -> Result<String, ApiError> {
    resolve_redirects(endpoint_url).await
}
