//! Source files - Model (API functions)

use crate::shared::error::ApiError;
use crate::shared::http::{get_json, post_form, post_json};
use contracts::domain::a001_source_file::aggregate::{
    DeleteFileRequest, DeleteFileResponse, UploadResponse, UserFilesResponse, DELETE_FILE_PATH,
    UPLOAD_FIELD, UPLOAD_PATH, USER_FILES_PATH,
};
use web_sys::{File, FormData};

/// Upload all files in one multipart request, one `files` part each.
pub async fn upload_files(files: &[File]) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    for file in files {
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    }
    post_form(UPLOAD_PATH, form).await
}

/// Names of the files the server already holds for this user.
pub async fn fetch_user_files() -> Result<Vec<String>, ApiError> {
    let resp: UserFilesResponse = get_json(USER_FILES_PATH).await?;
    Ok(resp.files.into_iter().map(|f| f.name).collect())
}

pub async fn delete_file(name: &str) -> Result<DeleteFileResponse, ApiError> {
    let body = DeleteFileRequest {
        filename: name.to_string(),
    };
    post_json(DELETE_FILE_PATH, &body).await
}
