use leptos::ev;
use leptos::prelude::*;

/// Service for centralized modal visibility
#[derive(Clone, Copy)]
pub struct ModalService {
    is_visible: RwSignal<bool>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            is_visible: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.is_visible.set(true);
    }

    pub fn hide(&self) {
        self.is_visible.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.is_visible.get()
    }

    pub fn is_open_untracked(&self) -> bool {
        self.is_visible.get_untracked()
    }
}

/// Full-screen modal frame. The frame stays mounted and toggles
/// `aria-hidden`; content is only rendered while it is open.
///
/// ```rust,ignore
/// view! {
///     <Modal title="Preview" on_close=Callback::new(move |_| vm.close())>
///         <MyComponent />
///     </Modal>
/// }
/// ```
#[component]
pub fn Modal(
    title: &'static str,
    on_close: Callback<()>,
    /// Optional actions shown in the header next to the close button
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="modal-overlay"
            aria-hidden=move || if modal.is_open() { "false" } else { "true" }
            on:click=move |_| on_close.run(())
        >
            <div class="modal" role="dialog" aria-label=title on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        {move || action_buttons.as_ref().map(|buttons| buttons())}
                        <button
                            class="button button--icon modal__close"
                            aria-label="Close preview"
                            on:click=move |_| on_close.run(())
                        >
                            {crate::shared::icons::icon("close")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {move || if modal.is_open() { Some(children()) } else { None }}
                </div>
            </div>
        </div>
    }
}
