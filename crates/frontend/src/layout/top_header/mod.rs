//! TopHeader component - application top bar with the mobile menu toggle.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_menu_open = move || ctx.mobile_menu_open.get();

    view! {
        <div class="top-header">
            <button
                class="top-header__icon-btn mobile-menu-toggle"
                on:click=move |_| ctx.toggle_mobile_menu()
                aria-expanded=move || is_menu_open().to_string()
                title=move || if is_menu_open() { "Close menu" } else { "Open menu" }
            >
                {move || if is_menu_open() { icon("close") } else { icon("menu") }}
            </button>
            <div class="top-header__brand">
                <span class="top-header__title">"Doc Chat"</span>
            </div>
        </div>
    }
}
