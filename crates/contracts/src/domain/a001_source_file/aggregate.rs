use crate::domain::common::ServerReply;
use serde::{Deserialize, Serialize};

pub const UPLOAD_PATH: &str = "/upload";
pub const USER_FILES_PATH: &str = "/user_files";
pub const DELETE_FILE_PATH: &str = "/delete_file";

/// Multipart field name carrying each uploaded file.
pub const UPLOAD_FIELD: &str = "files";

/// Status value the server returns once a file and its embeddings are gone.
pub const DELETED_STATUS: &str = "deleted";

/// A source document known to the server. Only the name is tracked client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Response of `GET /user_files`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFilesResponse {
    #[serde(default)]
    pub files: Vec<SourceFile>,
}

/// Response of `POST /upload`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    /// Sanitised names the server stored, when it reports them.
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ServerReply for UploadResponse {
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

/// Body of `POST /delete_file`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteFileRequest {
    pub filename: String,
}

/// Response of `POST /delete_file`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteFileResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl DeleteFileResponse {
    /// True only when the server confirmed the deletion.
    pub fn is_deleted(&self) -> bool {
        self.status.as_deref() == Some(DELETED_STATUS)
    }
}

impl ServerReply for DeleteFileResponse {
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
