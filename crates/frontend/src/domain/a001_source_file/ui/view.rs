//! Source files - View Components

use super::view_model::use_source_files;
use crate::domain::a001_source_file::state::{UploadStatus, NO_SELECTION_TEXT, UPLOADING_TEXT};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// File picker, selection summary, upload button and status line.
#[component]
#[allow(non_snake_case)]
pub fn UploadPanel() -> impl IntoView {
    let vm = use_source_files();

    let summary = move || vm.panel.with(|p| p.summary());

    view! {
        <div class="upload-panel">
            <input
                type="file"
                id="fileInput"
                multiple=true
                node_ref=vm.input_ref
                on:change=move |_| vm.on_selection_change()
            />

            <div id="selectedPreview" class="selected-preview">
                {move || match summary() {
                    Some(text) => view! {
                        <span class="selected-names">{text}</span>
                        <button
                            type="button"
                            class="clear-selection"
                            title="Clear selection"
                            on:click=move |_| vm.clear_selection()
                        >
                            "✖"
                        </button>
                    }
                    .into_any(),
                    None => view! { <span class="muted">{NO_SELECTION_TEXT}</span> }.into_any(),
                }}
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                attr:id="uploadBtn"
                disabled=Signal::derive(move || vm.is_uploading())
                on_click=move |_| vm.upload()
            >
                {icon("upload")}
                " Upload"
            </Button>

            <div id="statusMsg" class="status-msg">
                {move || match vm.panel.with(|p| p.status.clone()) {
                    UploadStatus::Idle => view! { <span></span> }.into_any(),
                    UploadStatus::Busy => view! {
                        <Spinner size=SpinnerSize::Tiny />
                        <span>{UPLOADING_TEXT}</span>
                    }
                    .into_any(),
                    UploadStatus::Message(text) => view! { <span>{text}</span> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Known files, newest first, each with a delete button.
#[component]
#[allow(non_snake_case)]
pub fn FileListPanel() -> impl IntoView {
    let vm = use_source_files();

    view! {
        <ul id="fileList" class="file-list">
            <Show when=move || vm.panel.with(|p| p.files.is_empty())>
                <li class="file-list__empty muted">"No files yet"</li>
            </Show>
            <For
                each=move || {
                    vm.panel.with(|p| {
                        p.files.names().iter().cloned().enumerate().collect::<Vec<_>>()
                    })
                }
                key=|(idx, name)| (*idx, name.clone())
                let:entry
            >
                {
                    let (_, name) = entry;
                    let target = name.clone();
                    let title = name.clone();
                    view! {
                        <li class="file-item">
                            <span class="file-name" title=title>{name}</span>
                            <button
                                type="button"
                                class="delete-btn"
                                aria-label="Delete file and embeddings"
                                title="Delete file and embeddings"
                                on:click=move |_| vm.delete(target.clone())
                            >
                                "🗑️"
                            </button>
                        </li>
                    }
                }
            </For>
        </ul>
    }
}
