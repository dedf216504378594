use crate::domain::common::ServerReply;
use serde::{Deserialize, Serialize};

pub const CLEAR_CONTEXT_PATH: &str = "/clear_context";
pub const CLEAR_STORAGE_PATH: &str = "/clear_storage";

/// Which server-side state a reset wipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetScope {
    /// Uploads, generated outputs, indexed documents and chat history.
    Context,
    /// Uploads and generated outputs only. Chat history survives.
    Storage,
}

impl ResetScope {
    pub fn path(&self) -> &'static str {
        match self {
            ResetScope::Context => CLEAR_CONTEXT_PATH,
            ResetScope::Storage => CLEAR_STORAGE_PATH,
        }
    }

    pub fn preserves_chat(&self) -> bool {
        matches!(self, ResetScope::Storage)
    }
}

/// Response of `POST /clear_context` and `POST /clear_storage`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResetResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerReply for ResetResponse {
    fn error_field(&self) -> Option<&str> {
        self.error.as_deref()
    }
    fn status_field(&self) -> Option<&str> {
        self.status.as_deref()
    }
    fn message_field(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_paths() {
        assert_eq!(ResetScope::Context.path(), "/clear_context");
        assert_eq!(ResetScope::Storage.path(), "/clear_storage");
        assert!(ResetScope::Storage.preserves_chat());
        assert!(!ResetScope::Context.preserves_chat());
    }

    #[test]
    fn test_reset_response() {
        let ok: ResetResponse = serde_json::from_str(r#"{"status":"context_cleared"}"#).unwrap();
        assert_eq!(ok.server_error(), None);
        let err: ResetResponse = serde_json::from_str(r#"{"error":"permission denied"}"#).unwrap();
        assert_eq!(err.server_error().as_deref(), Some("permission denied"));
    }
}
