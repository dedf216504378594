//! Application Shell - root layout and start-up wiring
//!
//! Contains:
//! - `AppShell` - Shell (sidebar + chat) plus the flash host and preview modal
//! - window listeners for Escape and resize
//! - the page-load context reset

use crate::domain::a001_source_file::ui::use_source_files;
use crate::domain::a002_chat::ui::{use_chat, ChatPanel};
use crate::domain::a003_preview::ui::{use_preview, PreviewModal};
use crate::domain::a004_session::controller::reset_context_on_load;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::flash::{adopt_server_flashes, FlashHost};
use leptos::prelude::window_event_listener;
use leptos::prelude::*;

/// Escape closes the mobile menu and the preview; growing past the mobile
/// breakpoint closes the menu.
fn install_window_listeners(ctx: AppGlobalContext) {
    let preview = use_preview();

    let _ = window_event_listener(leptos::ev::keydown, move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        ctx.close_mobile_menu();
        if preview.is_open() {
            preview.close();
        }
    });

    let _ = window_event_listener(leptos::ev::resize, move |_| ctx.on_resize());
}

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    ctx.init_body_class_sync();
    install_window_listeners(ctx);
    adopt_server_flashes();

    log::debug!("Resetting server context on load");
    reset_context_on_load(use_chat(), use_source_files());

    view! {
        <FlashHost />
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ChatPanel /> }.into_any()
        />
        <PreviewModal />
    }
}
