use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar frame. On narrow screens it is an off-canvas drawer; tapping the
/// backdrop closes it.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.mobile_menu_open.get();

    view! {
        <div
            class="mobile-backdrop"
            class:visible=is_open
            on:click=move |_| ctx.close_mobile_menu()
        ></div>
        <aside data-zone="left" class="left sidebar" class:open=is_open>
            {children()}
        </aside>
    }
}
