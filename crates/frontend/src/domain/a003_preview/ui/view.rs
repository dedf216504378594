//! Preview - View Component

use super::view_model::use_preview;
use crate::domain::a003_preview::strategy::PreviewBody;
use crate::layout::modal_service::Modal;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn PreviewModal() -> impl IntoView {
    let vm = use_preview();

    let download_action: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <a
                id="previewDownload"
                class="btn download-link"
                href=move || vm.download_href.get()
                download=move || vm.download_name.get()
                target="_blank"
            >
                {icon("download")}
                " Download"
            </a>
        }
        .into_any()
    });

    view! {
        <Modal
            title="Preview"
            on_close=Callback::new(move |_| vm.close())
            action_buttons=download_action
        >
            <div id="previewContent" class="preview-content">
                {move || render_body(vm.body.get())}
            </div>
        </Modal>
    }
}

fn render_body(body: PreviewBody) -> AnyView {
    match body {
        PreviewBody::Loading => view! { <Spinner /> }.into_any(),
        PreviewBody::Audio { src } => view! { <audio controls=true src=src></audio> }.into_any(),
        PreviewBody::Embed { src } => view! {
            <embed
                src=src
                type="application/pdf"
                style="width: 100%; height: 100%;"
                aria-label="PDF preview"
            />
        }
        .into_any(),
        PreviewBody::Frame { src } => view! {
            <iframe src=src style="width: 100%; height: 100%; border: 0;"></iframe>
        }
        .into_any(),
        PreviewBody::Unavailable { ext } => view! {
            <div>
                <p>{PreviewBody::unavailable_text(ext.as_deref())}</p>
            </div>
        }
        .into_any(),
        PreviewBody::Failed { error } => view! {
            <div>
                <p>"Preview failed. Try downloading the file instead."</p>
                <pre>{error}</pre>
            </div>
        }
        .into_any(),
    }
}
