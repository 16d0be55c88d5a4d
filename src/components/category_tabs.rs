//! Category Tabs Component
//!
//! Filter tabs for rolls: the whole catalog or one specific category.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{Category, CategoryFilter};

#[component]
pub fn CategoryTabs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="category-tabs">
            <button
                class=move || {
                    if ctx.category.get() == CategoryFilter::All {
                        "category-tab active"
                    } else {
                        "category-tab"
                    }
                }
                on:click=move |_| ctx.set_category(CategoryFilter::All)
            >
                "All"
            </button>
            {Category::SELECTABLE.iter().map(|&category| {
                let is_selected = move || ctx.category.get() == CategoryFilter::Only(category);
                view! {
                    <button
                        class=move || if is_selected() { "category-tab active" } else { "category-tab" }
                        on:click=move |_| ctx.set_category(CategoryFilter::Only(category))
                    >
                        <span class="category-tab-icon">{category.icon()}</span>
                        <span class="category-tab-label">{category.label()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
