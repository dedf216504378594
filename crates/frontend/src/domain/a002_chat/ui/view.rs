//! Chat - View Component

use super::message::MessageBubble;
use super::view_model::use_chat;
use crate::shared::config::config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let vm = use_chat();
    let prompts = config().ui.quick_prompts.clone();

    view! {
        <section class="chat-panel">
            <div id="chatHistory" class="chat-history" node_ref=vm.history_ref>
                <For
                    each=move || vm.state.with(|s| s.messages().to_vec())
                    key=|msg| msg.id
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>
            </div>

            <div class="quick-prompts">
                {prompts
                    .into_iter()
                    .map(|prompt| {
                        let text = prompt.text.clone();
                        view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Subtle
                                disabled=Signal::derive(move || vm.is_sending())
                                on_click=move |_| vm.send_special(&text)
                            >
                                {prompt.label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="chat-input">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.draft
                        placeholder="Ask about your sources... (Ctrl+Enter to send)"
                        attr:id="userQuery"
                        attr:style="width: 100%; min-height: 60px; max-height: 200px; resize: vertical;"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
                                ev.prevent_default();
                                vm.send();
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.is_sending())
                    on_click=move |_| vm.send()
                >
                    {icon("send")}
                    {move || if vm.is_sending() { " Thinking..." } else { " Send" }}
                </Button>
            </div>
        </section>
    }
}
