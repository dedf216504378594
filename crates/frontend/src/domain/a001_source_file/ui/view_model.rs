//! Source files - View Model

use super::model::{delete_file, fetch_user_files, upload_files};
use crate::domain::a001_source_file::state::{
    delete_prompt, DeleteOutcome, SourcePanel, DELETED_TEXT, DELETE_FAILED_TEXT,
};
use crate::shared::dom::{alert, confirm};
use crate::shared::flash::use_flash;
use contracts::domain::a003_session::aggregate::ResetScope;
use leptos::prelude::*;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct SourceFilesVm {
    pub panel: RwSignal<SourcePanel>,
    pub input_ref: NodeRef<leptos::html::Input>,
}

impl SourceFilesVm {
    pub fn new() -> Self {
        Self {
            panel: RwSignal::new(SourcePanel::default()),
            input_ref: NodeRef::new(),
        }
    }

    pub fn is_uploading(&self) -> bool {
        self.panel.with(|p| p.is_uploading())
    }

    fn picked_files(&self) -> Vec<File> {
        let Some(list) = self.input_ref.get_untracked().and_then(|input| input.files()) else {
            return Vec::new();
        };
        (0..list.length()).filter_map(|i| list.get(i)).collect()
    }

    /// Refresh the selection summary from the file input.
    pub fn on_selection_change(&self) {
        let names = self.picked_files().iter().map(File::name).collect();
        self.panel.update(|p| p.select(names));
    }

    fn clear_input(&self) {
        if let Some(input) = self.input_ref.get_untracked() {
            input.set_value("");
        }
    }

    /// Empty the file input and the summary.
    pub fn clear_selection(&self) {
        self.clear_input();
        self.panel.update(|p| p.clear_selection());
    }

    pub fn upload(&self) {
        let mut plan = None;
        self.panel.update(|p| plan = p.begin_upload());
        let Some(names) = plan else {
            if !self.is_uploading() {
                alert("Please select files first.");
            }
            return;
        };
        let files = self.picked_files();

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = upload_files(&files).await;
            match &result {
                Ok(resp) if !resp.files.is_empty() => {
                    log::info!("Server stored: {}", resp.files.join(", "))
                }
                Ok(_) => log::info!("Uploaded {} file(s)", names.len()),
                Err(e) => log::error!("Upload failed: {}", e),
            }
            let mut accepted = false;
            vm.panel
                .try_update(|p| accepted = p.finish_upload(names, &result));
            if accepted {
                vm.clear_input();
            }
        });
    }

    /// Ask, then delete `name` and its embeddings on the server.
    pub fn delete(&self, name: String) {
        if !confirm(&delete_prompt(&name)) {
            return;
        }
        let flash = use_flash();
        let panel = self.panel;
        wasm_bindgen_futures::spawn_local(async move {
            let result = delete_file(&name).await;
            let mut outcome = DeleteOutcome::Failed;
            panel.try_update(|p| outcome = p.finish_delete(&name, &result));
            match outcome {
                DeleteOutcome::Removed => flash.success(DELETED_TEXT),
                DeleteOutcome::Rejected(message) => flash.danger(message),
                DeleteOutcome::Failed => {
                    if let Err(e) = &result {
                        log::error!("Delete of {} failed: {}", name, e);
                    }
                    flash.danger(DELETE_FAILED_TEXT);
                }
            }
        });
    }

    /// Seed the list from `/user_files`.
    pub fn load(&self) {
        let panel = self.panel;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_user_files().await {
                Ok(names) => {
                    log::debug!("Server holds {} file(s)", names.len());
                    panel.try_update(|p| p.files.add(names));
                }
                Err(e) => log::error!("Failed to load user files: {}", e),
            }
        });
    }

    /// Clear the file input when a reset drops the selection.
    pub fn after_reset(&self, scope: ResetScope) {
        if !scope.preserves_chat() {
            self.clear_input();
        }
    }
}

pub fn use_source_files() -> SourceFilesVm {
    use_context::<SourceFilesVm>().expect("SourceFilesVm not provided in context")
}
