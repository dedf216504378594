//! Preview - View Model

use super::model::{probe_kind, resolve_presentation};
use crate::domain::a003_preview::strategy::{
    body_for_kind, body_for_resolved, download_name, needs_probe, presentation_download_fallback,
    presentation_endpoint, PreviewBody,
};
use crate::layout::modal_service::ModalService;
use crate::shared::api_utils::{api_base, join_url};
use crate::shared::config::config;
use contracts::enums::file_kind::{extension_of, FileKind};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PreviewVm {
    pub body: RwSignal<PreviewBody>,
    pub download_href: RwSignal<String>,
    pub download_name: RwSignal<String>,
    modal: ModalService,
}

impl PreviewVm {
    pub fn new(modal: ModalService) -> Self {
        Self {
            body: RwSignal::new(PreviewBody::Loading),
            download_href: RwSignal::new(String::new()),
            download_name: RwSignal::new(String::new()),
            modal,
        }
    }

    fn set_download(&self, download_full: String) {
        self.download_name.set(download_name(&download_full));
        self.download_href.set(download_full);
    }

    /// Preview by extension, probing the server when the reference has none.
    pub fn open(&self, preview: &str, download: Option<&str>) {
        let base = api_base();
        let preview_full = join_url(&base, preview);
        let download_full = download
            .map(|d| join_url(&base, d))
            .unwrap_or_else(|| preview_full.clone());
        self.set_download(download_full);

        let reference = preview.to_string();
        if !needs_probe(&reference) {
            let ext = extension_of(&reference);
            let kind = FileKind::from_url(&reference);
            self.body.set(body_for_kind(kind, &reference, &base, ext));
            self.modal.show();
            return;
        }

        self.body.set(PreviewBody::Loading);
        self.modal.show();
        let body = self.body;
        wasm_bindgen_futures::spawn_local(async move {
            let kind = match probe_kind(&preview_full).await {
                Ok(kind) => kind,
                Err(e) => {
                    log::warn!("Content-type probe failed for {}: {}", preview_full, e);
                    FileKind::Other
                }
            };
            body.try_set(body_for_kind(kind, &reference, &base, None));
        });
    }

    /// Presentation preview through the server-side conversion endpoint.
    pub fn open_presentation(&self, preview: &str, download: Option<&str>) {
        let base = api_base();
        let download_ref = download
            .map(str::to_string)
            .unwrap_or_else(|| presentation_download_fallback(preview, &config().api.outputs_path));
        self.set_download(join_url(&base, &download_ref));

        let endpoint = join_url(&base, &presentation_endpoint(preview));
        self.body.set(PreviewBody::Loading);
        self.modal.show();

        let body = self.body;
        wasm_bindgen_futures::spawn_local(async move {
            let next = match resolve_presentation(&endpoint).await {
                Ok(final_url) => body_for_resolved(&final_url),
                Err(e) => {
                    log::error!("Presentation preview failed for {}: {}", endpoint, e);
                    PreviewBody::Failed {
                        error: e.to_string(),
                    }
                }
            };
            body.try_set(next);
        });
    }

    pub fn close(&self) {
        self.modal.hide();
        self.body.set(PreviewBody::Loading);
    }

    /// Untracked; meant for event handlers.
    pub fn is_open(&self) -> bool {
        self.modal.is_open_untracked()
    }
}

pub fn use_preview() -> PreviewVm {
    use_context::<PreviewVm>().expect("PreviewVm not provided in context")
}
