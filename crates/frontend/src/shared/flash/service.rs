use super::queue::{FlashKind, FlashQueue};
use crate::shared::config::config;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Context service owning the visible banners.
#[derive(Clone, Copy)]
pub struct FlashService {
    pub queue: RwSignal<FlashQueue>,
}

impl FlashService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(FlashQueue::default()),
        }
    }

    /// Show a banner; it starts fading after `flash_hide_ms` and leaves the
    /// tree on `transitionend` or after `flash_remove_ms` more.
    pub fn show(&self, text: impl Into<String>, kind: FlashKind) {
        let mut id = None;
        self.queue.update(|q| id = Some(q.push(kind, text)));
        let Some(id) = id else { return };

        let queue = self.queue;
        let ui = &config().ui;
        let (hide_ms, remove_ms) = (ui.flash_hide_ms, ui.flash_remove_ms);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(hide_ms).await;
            queue.try_update(|q| q.hide(id));
            TimeoutFuture::new(remove_ms).await;
            queue.try_update(|q| q.remove_hidden(id));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(text, FlashKind::Success);
    }

    pub fn danger(&self, text: impl Into<String>) {
        self.show(text, FlashKind::Danger);
    }
}

pub fn use_flash() -> FlashService {
    use_context::<FlashService>().expect("FlashService not provided in context")
}
