//! Source files UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: upload, list and delete API calls
//! - view_model.rs: SourceFilesVm with RwSignals
//! - view.rs: UploadPanel and FileListPanel components

mod model;
mod view;
mod view_model;

pub use view::{FileListPanel, UploadPanel};
pub use view_model::{use_source_files, SourceFilesVm};
