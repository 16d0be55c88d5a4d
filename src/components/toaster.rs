//! Toaster Component
//!
//! Renders active toast notifications as a fixed corner stack. Toasts are
//! pushed and auto-dismissed through `AppContext`.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toaster">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = if toast.destructive { "toast destructive" } else { "toast" };
                    view! {
                        <div class=class>
                            {toast.title.clone().map(|title| view! { <h4 class="toast-title">{title}</h4> })}
                            <p class="toast-message">{toast.message.clone()}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
