//! Title Component

use leptos::prelude::*;

#[component]
pub fn Title() -> impl IntoView {
    view! {
        <header class="app-title">
            <h1>"Activity Generator"</h1>
            <p class="app-tagline">"Discover your next adventure"</p>
        </header>
    }
}
