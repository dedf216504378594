//! Session - Model (API functions)

use crate::shared::error::ApiError;
use crate::shared::http::post_empty;
use contracts::domain::a003_session::aggregate::{ResetResponse, ResetScope};
use contracts::domain::common::ServerReply;

/// Wipe server-side state for `scope`.
pub async fn reset(scope: ResetScope) -> Result<(), ApiError> {
    let resp: ResetResponse = post_empty(scope.path()).await?;
    match resp.server_error() {
        Some(err) => Err(ApiError::Server(err)),
        None => Ok(()),
    }
}
