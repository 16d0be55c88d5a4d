//! Activity Card Component
//!
//! Shows the current selection with favorite and share actions, or a
//! placeholder before the first roll. Picks up `rolling` and `celebrating`
//! as CSS class hooks for presentation.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::picker::is_favorite;
use crate::share::spawn_share;
use crate::store::{store_toggle_favorite, use_app_store, AppStateStoreFields};

#[component]
pub fn ActivityCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let card_class = move || {
        if store.rolling().get() {
            "activity-card rolling"
        } else if ctx.celebrating.get() {
            "activity-card celebrating"
        } else {
            "activity-card"
        }
    };

    view! {
        <div class=card_class>
            {move || match store.current_activity().get() {
                Some(activity) => {
                    let starred = {
                        let id = activity.id.clone();
                        move || is_favorite(&store.favorites().read(), &id)
                    };
                    let fav_subject = activity.clone();
                    let share_subject = activity.clone();
                    view! {
                        <div class="activity-card-body">
                            <span class="activity-icon">{activity.icon()}</span>
                            <h2 class="activity-name">{activity.name.clone()}</h2>
                            <p class="activity-description">{activity.description.clone()}</p>
                            <div class="activity-actions">
                                <button
                                    class=move || if starred() { "favorite-btn active" } else { "favorite-btn" }
                                    on:click=move |_| {
                                        if store_toggle_favorite(&store, &fav_subject) {
                                            ctx.notify("Added to favorites");
                                        } else {
                                            ctx.notify("Removed from favorites");
                                        }
                                    }
                                >
                                    "★"
                                </button>
                                <button
                                    class="share-btn"
                                    on:click=move |_| spawn_share(share_subject.clone(), ctx)
                                >
                                    "Share"
                                </button>
                            </div>
                        </div>
                    }.into_any()
                }
                None => view! {
                    <div class="activity-card-empty">
                        <p>"Pick a category and generate your next activity"</p>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
