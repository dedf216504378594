//! Blocking browser dialogs and small DOM helpers.

/// `window.alert`. No-op outside a browser.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// `window.confirm`. Declines when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Toggle a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let classes = body.class_list();
        let _ = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }
}

/// Window inner width in CSS pixels.
pub fn window_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}
