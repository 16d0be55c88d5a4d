//! Roll Controls Component
//!
//! The generate button plus the "feeling lucky" shortcut that widens the
//! filter to the whole catalog before rolling. Both are disabled while a
//! roll is in flight.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::CategoryFilter;
use crate::picker::start_roll;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RollControls() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let rolling = move || store.rolling().get();

    view! {
        <div class="roll-controls">
            <button
                class="generate-btn"
                disabled=rolling
                on:click=move |_| start_roll(store, ctx)
            >
                {move || if rolling() { "Generating..." } else { "🎲 Generate Activity" }}
            </button>
            <button
                class="lucky-btn"
                disabled=rolling
                on:click=move |_| {
                    ctx.set_category(CategoryFilter::All);
                    start_roll(store, ctx);
                }
            >
                "✨ Lucky"
            </button>
        </div>
    }
}
