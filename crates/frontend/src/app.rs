use crate::app_shell::AppShell;
use crate::domain::a001_source_file::ui::SourceFilesVm;
use crate::domain::a002_chat::ui::ChatVm;
use crate::domain::a003_preview::ui::PreviewVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::shared::flash::FlashService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    // Preview modal visibility; PreviewVm drives it.
    let modal = ModalService::new();
    provide_context(modal);
    provide_context(PreviewVm::new(modal));

    provide_context(FlashService::new());
    provide_context(ChatVm::new());
    provide_context(SourceFilesVm::new());

    view! {
        <AppShell />
    }
}
