use crate::domain::a001_source_file::ui::{use_source_files, FileListPanel, UploadPanel};
use crate::domain::a002_chat::ui::use_chat;
use crate::domain::a004_session::controller::clear_storage_keep_chat;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Upload controls, known files and the storage reset.
#[component]
pub fn Sidebar() -> impl IntoView {
    let files = use_source_files();
    let chat = use_chat();

    view! {
        <div class="sidebar__content">
            <h3 class="sidebar__title">"Sources"</h3>
            <UploadPanel />

            <h4 class="sidebar__subtitle">"Your files"</h4>
            <FileListPanel />

            <div class="sidebar__footer">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| clear_storage_keep_chat(chat, files)
                >
                    {icon("eraser")}
                    " Clear storage"
                </Button>
            </div>
        </div>
    }
}
