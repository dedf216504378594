pub mod global_context;
pub mod left;
pub mod modal_service;
pub mod top_header;

pub use modal_service::{Modal, ModalService};

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |      Content     |
/// |  (Left)   |      (Main)      |
/// +------------------------------+
/// ```
///
/// Below the mobile breakpoint the sidebar becomes a drawer toggled from the
/// header.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
