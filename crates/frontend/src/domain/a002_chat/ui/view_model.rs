//! Chat - View Model

use super::model::send_query;
use crate::domain::a002_chat::state::ChatState;
use crate::domain::a003_preview::audio::{AudioCommand, AudioEvent};
use crate::shared::config::config;
use leptos::prelude::*;
use uuid::Uuid;

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub state: RwSignal<ChatState>,
    pub draft: RwSignal<String>,
    pub history_ref: NodeRef<leptos::html::Div>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ChatState::welcome(&config().ui.welcome_message)),
            draft: RwSignal::new(String::new()),
            history_ref: NodeRef::new(),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.state.with(|s| s.is_pending())
    }

    pub fn scroll_to_bottom(&self) {
        if let Some(container) = self.history_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    }

    /// Send the current draft. Empty drafts and sends while a query is in
    /// flight are ignored.
    pub fn send(&self) {
        let query = self.draft.get_untracked();
        let mut placeholder = None;
        self.state.update(|s| placeholder = s.begin_query(&query));
        let Some(placeholder) = placeholder else {
            return;
        };
        self.draft.set(String::new());
        self.scroll_to_bottom();

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = send_query(&query).await;
            let outputs_path = &config().api.outputs_path;
            vm.state
                .try_update(|s| s.finish_query(placeholder, result, outputs_path));
            vm.scroll_to_bottom();
        });
    }

    /// Preset prompt: fill the draft and send it.
    pub fn send_special(&self, text: &str) {
        self.draft.set(text.to_string());
        self.send();
    }

    pub fn toggle_audio(&self, message: Uuid, src: &str) -> Option<AudioCommand> {
        let mut command = None;
        self.state.update(|s| command = s.toggle_audio(message, src));
        command
    }

    pub fn audio_event(&self, message: Uuid, src: &str, event: AudioEvent) {
        self.state.update(|s| s.audio_event(message, src, event));
    }
}

pub fn use_chat() -> ChatVm {
    use_context::<ChatVm>().expect("ChatVm not provided in context")
}
