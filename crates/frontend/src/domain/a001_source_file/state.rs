//! Sidebar file list and selection summary.

use crate::shared::error::ApiError;
use contracts::domain::a001_source_file::aggregate::{DeleteFileResponse, UploadResponse};
use contracts::domain::a003_session::aggregate::ResetScope;
use contracts::domain::common::ServerReply;

pub const NO_SELECTION_TEXT: &str = "No file selected";
pub const UPLOAD_COMPLETE_TEXT: &str = "Upload complete.";
pub const UPLOAD_FAILED_TEXT: &str = "Upload failed. See console for details.";
pub const UPLOADING_TEXT: &str = "Uploading & indexing...";
pub const DELETED_TEXT: &str = "File deleted successfully.";
pub const DELETE_REJECTED_TEXT: &str = "Delete failed.";
pub const DELETE_FAILED_TEXT: &str = "Delete failed. See console.";

/// Uploaded file names, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListState {
    names: Vec<String>,
}

impl FileListState {
    /// Prepend each name in turn, so the last given ends up on top.
    pub fn add<I>(&mut self, names: I)
    where
        I: IntoIterator<Item = String>,
    {
        for name in names {
            self.names.insert(0, name);
        }
    }

    /// Remove entries whose name matches exactly. Returns how many went.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        before - self.names.len()
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// `Selected: a, b, c + N more` for the picked files, `None` when nothing is
/// picked.
pub fn selection_summary(names: &[String]) -> Option<String> {
    if names.is_empty() {
        return None;
    }
    let visible = names
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let more = if names.len() > 3 {
        format!(" + {} more", names.len() - 3)
    } else {
        String::new()
    };
    Some(format!("Selected: {}{}", visible, more))
}

/// Text under the upload button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    /// Request in flight; rendered with a spinner.
    Busy,
    Message(String),
}

/// Status after an upload finished, and whether the selection was accepted.
pub fn upload_outcome(result: &Result<UploadResponse, ApiError>) -> (UploadStatus, bool) {
    match result {
        Ok(resp) => match resp.server_error() {
            Some(err) => (UploadStatus::Message(err), false),
            None => (
                UploadStatus::Message(
                    resp.message
                        .clone()
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| UPLOAD_COMPLETE_TEXT.to_string()),
                ),
                true,
            ),
        },
        Err(e) if e.is_transport() => (UploadStatus::Message(UPLOAD_FAILED_TEXT.to_string()), false),
        Err(e) => (UploadStatus::Message(e.to_string()), false),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    /// Server declined; message to flash.
    Rejected(String),
    Failed,
}

pub fn delete_outcome(result: &Result<DeleteFileResponse, ApiError>) -> DeleteOutcome {
    match result {
        Ok(resp) if resp.is_deleted() => DeleteOutcome::Removed,
        Ok(resp) => DeleteOutcome::Rejected(
            resp.server_error()
                .unwrap_or_else(|| DELETE_REJECTED_TEXT.to_string()),
        ),
        Err(e) if e.is_transport() => DeleteOutcome::Failed,
        Err(e) => DeleteOutcome::Rejected(e.to_string()),
    }
}

/// Everything the sidebar shows: known files, picked files and the upload
/// status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourcePanel {
    pub files: FileListState,
    /// Names picked in the file input, in selection order.
    pub selected: Vec<String>,
    pub status: UploadStatus,
}

impl SourcePanel {
    pub fn select(&mut self, names: Vec<String>) {
        self.selected = names;
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn summary(&self) -> Option<String> {
        selection_summary(&self.selected)
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Busy
    }

    /// Names to upload, or `None` when nothing is picked or an upload is
    /// already running. Marks the panel busy otherwise.
    pub fn begin_upload(&mut self) -> Option<Vec<String>> {
        if self.selected.is_empty() || self.is_uploading() {
            return None;
        }
        self.status = UploadStatus::Busy;
        Some(self.selected.clone())
    }

    /// Apply the upload result for `names`. The busy state always ends here.
    /// Returns whether the server accepted the files.
    pub fn finish_upload(
        &mut self,
        names: Vec<String>,
        result: &Result<UploadResponse, ApiError>,
    ) -> bool {
        let (status, accepted) = upload_outcome(result);
        self.status = status;
        if accepted {
            self.files.add(names);
            self.clear_selection();
        }
        accepted
    }

    /// Apply a delete result for `name`.
    pub fn finish_delete(
        &mut self,
        name: &str,
        result: &Result<DeleteFileResponse, ApiError>,
    ) -> DeleteOutcome {
        let outcome = delete_outcome(result);
        if outcome == DeleteOutcome::Removed {
            self.files.remove(name);
        }
        outcome
    }

    /// Forget files and status. A context reset also drops the selection;
    /// a storage clear leaves it for the next upload.
    pub fn reset(&mut self, scope: ResetScope) {
        self.files.clear();
        self.status = UploadStatus::Idle;
        if !scope.preserves_chat() {
            self.clear_selection();
        }
    }
}

pub fn delete_prompt(name: &str) -> String {
    format!(
        "Delete {}? This will also remove its embeddings from the cloud.",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_puts_most_recent_first() {
        let mut list = FileListState::default();
        list.add(names(&["old.pdf"]));
        list.add(names(&["a.pdf", "b.pdf", "c.pdf"]));
        assert_eq!(list.names(), names(&["c.pdf", "b.pdf", "a.pdf", "old.pdf"]).as_slice());
    }

    #[test]
    fn test_remove_exact_match_only() {
        let mut list = FileListState::default();
        list.add(names(&["report.pdf", "report.pdf.bak", "Report.pdf"]));
        assert_eq!(list.remove("report.pdf"), 1);
        assert_eq!(list.names(), names(&["Report.pdf", "report.pdf.bak"]).as_slice());
        assert_eq!(list.remove("missing.pdf"), 0);
    }

    #[test]
    fn test_selection_summary() {
        assert_eq!(selection_summary(&[]), None);
        assert_eq!(
            selection_summary(&names(&["a", "b"])).as_deref(),
            Some("Selected: a, b")
        );
        assert_eq!(
            selection_summary(&names(&["a", "b", "c"])).as_deref(),
            Some("Selected: a, b, c")
        );
        assert_eq!(
            selection_summary(&names(&["a", "b", "c", "d", "e"])).as_deref(),
            Some("Selected: a, b, c + 2 more")
        );
    }

    #[test]
    fn test_upload_outcome() {
        let ok = Ok(UploadResponse {
            message: Some("Uploaded and indexed 2 file(s)".into()),
            ..Default::default()
        });
        assert_eq!(
            upload_outcome(&ok),
            (UploadStatus::Message("Uploaded and indexed 2 file(s)".into()), true)
        );

        let bare = Ok(UploadResponse::default());
        assert_eq!(
            upload_outcome(&bare),
            (UploadStatus::Message(UPLOAD_COMPLETE_TEXT.into()), true)
        );

        let rejected = Ok(UploadResponse {
            error: Some("No files part in request".into()),
            ..Default::default()
        });
        assert_eq!(
            upload_outcome(&rejected),
            (UploadStatus::Message("No files part in request".into()), false)
        );

        let offline: Result<UploadResponse, ApiError> = Err(ApiError::Network("offline".into()));
        assert_eq!(
            upload_outcome(&offline),
            (UploadStatus::Message(UPLOAD_FAILED_TEXT.into()), false)
        );
    }

    #[test]
    fn test_delete_outcome() {
        let deleted = Ok(DeleteFileResponse {
            status: Some("deleted".into()),
            ..Default::default()
        });
        assert_eq!(delete_outcome(&deleted), DeleteOutcome::Removed);

        let refused = Ok(DeleteFileResponse {
            error: Some("File not found".into()),
            ..Default::default()
        });
        assert_eq!(
            delete_outcome(&refused),
            DeleteOutcome::Rejected("File not found".into())
        );

        let silent = Ok(DeleteFileResponse::default());
        assert_eq!(
            delete_outcome(&silent),
            DeleteOutcome::Rejected(DELETE_REJECTED_TEXT.into())
        );

        let offline: Result<DeleteFileResponse, ApiError> = Err(ApiError::Http(500));
        assert_eq!(delete_outcome(&offline), DeleteOutcome::Failed);
    }

    #[test]
    fn test_empty_selection_starts_no_upload() {
        let mut panel = SourcePanel::default();
        assert_eq!(panel.begin_upload(), None);
        assert_eq!(panel.status, UploadStatus::Idle);
        assert!(!panel.is_uploading());
    }

    #[test]
    fn test_successful_upload_lists_names_and_clears_selection() {
        let mut panel = SourcePanel::default();
        panel.select(names(&["a.pdf", "b.pdf"]));
        assert_eq!(panel.summary().as_deref(), Some("Selected: a.pdf, b.pdf"));

        let picked = panel.begin_upload().unwrap();
        assert!(panel.is_uploading());
        assert_eq!(panel.begin_upload(), None, "one upload at a time");

        let ok = Ok(UploadResponse::default());
        assert!(panel.finish_upload(picked, &ok));
        assert!(!panel.is_uploading());
        assert_eq!(panel.files.names(), names(&["b.pdf", "a.pdf"]).as_slice());
        assert!(panel.selected.is_empty());
        assert_eq!(panel.summary(), None);
    }

    #[test]
    fn test_failed_upload_keeps_selection_and_list() {
        let mut panel = SourcePanel::default();
        panel.select(names(&["a.pdf"]));
        let picked = panel.begin_upload().unwrap();
        let err: Result<UploadResponse, ApiError> = Err(ApiError::Server("Index full".into()));
        assert!(!panel.finish_upload(picked, &err));
        assert!(!panel.is_uploading());
        assert_eq!(panel.status, UploadStatus::Message("Index full".into()));
        assert!(panel.files.is_empty());
        assert_eq!(panel.selected, names(&["a.pdf"]));
    }

    #[test]
    fn test_delete_removes_only_on_confirmation() {
        let mut panel = SourcePanel::default();
        panel.files.add(names(&["a.pdf", "b.pdf"]));
        let refused = Ok(DeleteFileResponse::default());
        assert_ne!(panel.finish_delete("a.pdf", &refused), DeleteOutcome::Removed);
        assert_eq!(panel.files.names().len(), 2);

        let deleted = Ok(DeleteFileResponse {
            status: Some("deleted".into()),
            ..Default::default()
        });
        assert_eq!(panel.finish_delete("a.pdf", &deleted), DeleteOutcome::Removed);
        assert_eq!(panel.files.names(), names(&["b.pdf"]).as_slice());
    }

    #[test]
    fn test_reset_scopes() {
        let mut panel = SourcePanel::default();
        panel.files.add(names(&["a.pdf"]));
        panel.select(names(&["next.pdf"]));
        panel.status = UploadStatus::Message("Upload complete.".into());

        panel.reset(ResetScope::Storage);
        assert!(panel.files.is_empty());
        assert_eq!(panel.status, UploadStatus::Idle);
        assert_eq!(panel.selected, names(&["next.pdf"]));

        panel.files.add(names(&["a.pdf"]));
        panel.reset(ResetScope::Context);
        assert!(panel.files.is_empty());
        assert!(panel.selected.is_empty());
    }

    #[test]
    fn test_delete_prompt() {
        assert_eq!(
            delete_prompt("notes.pdf"),
            "Delete notes.pdf? This will also remove its embeddings from the cloud."
        );
    }
}
