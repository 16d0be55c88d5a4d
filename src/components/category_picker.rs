//! Category Picker Component
//!
//! Reusable category selector buttons for the add-activity form.

use leptos::prelude::*;

use crate::models::Category;

/// Category selector buttons
#[component]
pub fn CategoryPicker(
    current: ReadSignal<Category>,
    on_change: impl Fn(Category) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="category-picker">
            {Category::SELECTABLE.iter().map(|&category| {
                let is_selected = move || current.get() == category;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "category-btn active" } else { "category-btn" }
                        on:click=move |_| on_change(category)
                    >
                        {category.icon()} " " {category.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
