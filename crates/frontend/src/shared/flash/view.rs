use super::service::use_flash;
use crate::shared::config::config;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Container for client-side banners.
#[component]
pub fn FlashHost() -> impl IntoView {
    let flash = use_flash();

    view! {
        <div
            class="flash-messages"
            class:empty=move || flash.queue.with(|q| q.is_empty())
            role="status"
            aria-live="polite"
        >
            <For
                each=move || flash.queue.get().items().to_vec()
                key=|f| f.id
                let:item
            >
                {
                    let id = item.id;
                    let kind = item.kind;
                    let class = move || {
                        let hiding = flash
                            .queue
                            .with(|q| q.items().iter().any(|f| f.id == id && f.hiding));
                        if hiding {
                            format!("{} flash-hide", kind.css_class())
                        } else {
                            kind.css_class().to_string()
                        }
                    };
                    view! {
                        <div
                            class=class
                            on:transitionend=move |_| {
                                flash.queue.update(|q| q.remove_hidden(id));
                            }
                        >
                            {item.text.clone()}
                        </div>
                    }
                }
            </For>
        </div>
    }
}

/// Auto-hide banners the host page rendered before the app mounted.
pub fn adopt_server_flashes() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".flash-messages .flash") else {
        return;
    };
    let hide_ms = config().ui.flash_hide_ms;

    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };

        let on_end = {
            let el = el.clone();
            Closure::wrap(Box::new(move |_ev: web_sys::Event| {
                if el.class_list().contains("flash-hide") {
                    el.remove();
                }
            }) as Box<dyn FnMut(_)>)
        };
        let _ = el.add_event_listener_with_callback("transitionend", on_end.as_ref().unchecked_ref());
        on_end.forget();

        let target = el.clone();
        Timeout::new(hide_ms, move || {
            let _ = target.class_list().add_1("flash-hide");
        })
        .forget();
    }
    log::debug!("Adopted {} server-rendered flash message(s)", nodes.length());
}
