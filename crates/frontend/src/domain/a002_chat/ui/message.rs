use super::view_model::use_chat;
use crate::domain::a002_chat::markdown::render_markdown_lite;
use crate::domain::a002_chat::state::ChatMessage;
use crate::domain::a003_preview::audio::{label_for, AudioCommand, AudioEvent};
use crate::domain::a003_preview::strategy::{download_name, FileActionGroup};
use crate::domain::a003_preview::ui::use_preview;
use crate::shared::api_utils::{api_base, join_url};
use contracts::enums::FileKind;
use leptos::prelude::*;
use uuid::Uuid;

/// One chat bubble. Text and actions are fixed once inserted; only the
/// inline audio slot changes afterwards.
#[component]
#[allow(non_snake_case)]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let vm = use_chat();
    let id = message.id;
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    // Only a change of source remounts the player; play/pause must not.
    let audio_src = Memo::new(move |_| {
        vm.state.with(|s| {
            s.message(id)
                .and_then(|m| m.audio.as_ref().map(|a| a.src.clone()))
        })
    });

    let class = if message.placeholder {
        format!("message {} thinking", message.sender.as_str())
    } else {
        format!("message {}", message.sender.as_str())
    };
    let html = render_markdown_lite(&message.text);
    let actions = message.actions.clone();

    view! {
        <div class=class id=message.dom_id()>
            <div class="message-text" inner_html=html></div>
            {actions
                .into_iter()
                .map(|group| view! { <FileActions message_id=id group=group audio_ref=audio_ref /> })
                .collect_view()}
            {move || {
                audio_src
                    .get()
                    .map(|src| {
                        let on_play = {
                            let src = src.clone();
                            move |_| vm.audio_event(id, &src, AudioEvent::Play)
                        };
                        let on_pause = {
                            let src = src.clone();
                            move |_| vm.audio_event(id, &src, AudioEvent::Pause)
                        };
                        let on_ended = {
                            let src = src.clone();
                            move |_| vm.audio_event(id, &src, AudioEvent::Ended)
                        };
                        view! {
                            <audio
                                node_ref=audio_ref
                                class="inline-audio"
                                controls=true
                                autoplay=true
                                src=src
                                on:play=on_play
                                on:pause=on_pause
                                on:ended=on_ended
                            ></audio>
                        }
                    })
            }}
        </div>
    }
}

/// Preview/Play button plus Download link for one generated file.
#[component]
#[allow(non_snake_case)]
fn FileActions(
    message_id: Uuid,
    group: FileActionGroup,
    audio_ref: NodeRef<leptos::html::Audio>,
) -> impl IntoView {
    let vm = use_chat();
    let preview = use_preview();

    let base = api_base();
    let preview_full = join_url(&base, &group.preview);
    let download_full = join_url(&base, &group.download);
    let file_name = download_name(&download_full);
    let kind = group.kind;
    let static_label = group.button_label();

    let label = {
        let src = preview_full.clone();
        move || {
            if kind != FileKind::Audio {
                return static_label;
            }
            vm.state.with(|s| {
                s.message(message_id)
                    .map(|m| label_for(&m.audio, &src))
                    .unwrap_or("Play")
            })
        }
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        match kind {
            FileKind::Audio => match vm.toggle_audio(message_id, &preview_full) {
                Some(AudioCommand::Play) => {
                    if let Some(el) = audio_ref.get_untracked() {
                        if let Ok(promise) = el.play() {
                            // A rejected play() fires no pause event.
                            let src = preview_full.clone();
                            wasm_bindgen_futures::spawn_local(async move {
                                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                                    log::warn!("Playback of {} rejected: {:?}", src, e);
                                    vm.audio_event(message_id, &src, AudioEvent::Pause);
                                }
                            });
                        }
                    }
                }
                Some(AudioCommand::Pause) => {
                    if let Some(el) = audio_ref.get_untracked() {
                        let _ = el.pause();
                    }
                }
                Some(AudioCommand::Start) | None => {}
            },
            FileKind::Presentation => {
                preview.open_presentation(&group.preview, Some(&group.download))
            }
            _ => preview.open(&group.preview, Some(&group.download)),
        }
    };

    view! {
        <div class=format!("file-actions file-actions--{}", kind.code())>
            <button type="button" class="btn preview-btn" on:click=on_click>
                {label}
            </button>
            <a class="btn download-link" href=download_full target="_blank" download=file_name>
                "Download"
            </a>
        </div>
    }
}
