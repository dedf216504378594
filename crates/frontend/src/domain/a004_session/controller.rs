//! Context and storage resets.

use super::model::reset;
use crate::domain::a001_source_file::state::SourcePanel;
use crate::domain::a001_source_file::ui::SourceFilesVm;
use crate::domain::a002_chat::state::ChatState;
use crate::domain::a002_chat::ui::ChatVm;
use crate::shared::config::config;
use crate::shared::error::ApiError;
use contracts::domain::a003_session::aggregate::ResetScope;
use leptos::prelude::Update;

/// Whether the UI follows a reset request that ended with `result`.
///
/// A context reset always clears the UI, so a reload never shows stale chat.
/// A storage clear follows any reply from the server, but not a request that
/// never reached it.
pub fn reset_clears_ui(scope: ResetScope, result: &Result<(), ApiError>) -> bool {
    match (scope, result) {
        (ResetScope::Context, _) => true,
        (ResetScope::Storage, Err(ApiError::Network(_))) => false,
        (ResetScope::Storage, _) => true,
    }
}

/// Client-side half of a reset.
pub fn apply_reset(scope: ResetScope, chat: &mut ChatState, panel: &mut SourcePanel, welcome: &str) {
    if !scope.preserves_chat() {
        chat.reset(welcome);
    }
    panel.reset(scope);
}

async fn run_reset(scope: ResetScope, chat: ChatVm, files: SourceFilesVm) -> bool {
    let result = reset(scope).await;
    if let Err(e) = &result {
        log::warn!("{} failed: {}", scope.path(), e);
    }
    if !reset_clears_ui(scope, &result) {
        return false;
    }
    let welcome = &config().ui.welcome_message;
    chat.state.update(|c| {
        files
            .panel
            .update(|p| apply_reset(scope, c, p, welcome));
    });
    files.after_reset(scope);
    true
}

/// Page-load reset: clear the server context, put the UI back to a single
/// welcome message, then list what the server still holds.
pub fn reset_context_on_load(chat: ChatVm, files: SourceFilesVm) {
    wasm_bindgen_futures::spawn_local(async move {
        run_reset(ResetScope::Context, chat, files).await;
        files.load();
    });
}

/// Drop uploads and generated outputs; chat history stays.
pub fn clear_storage_keep_chat(chat: ChatVm, files: SourceFilesVm) {
    wasm_bindgen_futures::spawn_local(async move {
        if run_reset(ResetScope::Storage, chat, files).await {
            log::info!("Storage cleared");
        }
    });
}
