//! Modal Component
//!
//! Reusable dialog overlay with a title bar and close button. Clicking the
//! backdrop closes the dialog; clicks inside the panel do not propagate.

use leptos::prelude::*;

/// Dialog overlay shown while `open` is true
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| set_open.set(false)>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">{title.clone()}</h3>
                        <button class="modal-close-btn" on:click=move |_| set_open.set(false)>
                            "×"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
