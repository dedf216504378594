use crate::shared::config::config;
use crate::shared::dom::{set_body_class, window_width};
use leptos::prelude::Effect;
use leptos::prelude::*;

/// Body class that slides the sidebar in on narrow screens.
pub const MOBILE_MENU_CLASS: &str = "mobile-menu-open";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub mobile_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            mobile_menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }

    pub fn close_mobile_menu(&self) {
        if self.mobile_menu_open.get_untracked() {
            self.mobile_menu_open.set(false);
        }
    }

    /// Close the menu once the window is wider than the mobile breakpoint.
    pub fn on_resize(&self) {
        if let Some(width) = window_width() {
            if width > config().ui.mobile_breakpoint_px {
                self.close_mobile_menu();
            }
        }
    }

    /// Mirror the menu state onto `<body>`.
    pub fn init_body_class_sync(&self) {
        let open = self.mobile_menu_open;
        Effect::new(move |_| set_body_class(MOBILE_MENU_CLASS, open.get()));
    }
}
