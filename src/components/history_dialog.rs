//! History Dialog Component
//!
//! Modal listing the most recent selections, newest first. Entries can be
//! starred straight from the list. History may contain the same activity
//! more than once, so rows are keyed by position.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::AppContext;
use crate::picker::is_favorite;
use crate::store::{store_toggle_favorite, use_app_store, AppStateStoreFields};

#[component]
pub fn HistoryDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (open, set_open) = signal(false);

    let entries = move || {
        let list: Vec<(usize, _)> = store.history().get().into_iter().enumerate().collect();
        list
    };

    view! {
        <button class="footer-btn" on:click=move |_| set_open.set(true)>
            "History"
        </button>
        <Modal title="Recent Activities" open=open set_open=set_open>
            <div class="dialog-list">
                <Show
                    when=move || !store.history().read().is_empty()
                    fallback=|| view! { <p class="dialog-empty">"No activity history yet"</p> }
                >
                    <For
                        each=entries
                        key=|(position, _)| *position
                        children=move |(_, activity)| {
                            let starred = {
                                let id = activity.id.clone();
                                move || is_favorite(&store.favorites().read(), &id)
                            };
                            let subject = activity.clone();
                            view! {
                                <div class="dialog-row">
                                    <span class="dialog-row-icon">{activity.icon()}</span>
                                    <div class="dialog-row-text">
                                        <h4>{activity.name.clone()}</h4>
                                        <p>{activity.description.clone()}</p>
                                    </div>
                                    <button
                                        class=move || if starred() { "favorite-btn active" } else { "favorite-btn" }
                                        on:click=move |_| {
                                            if store_toggle_favorite(&store, &subject) {
                                                ctx.notify("Added to favorites");
                                            } else {
                                                ctx.notify("Removed from favorites");
                                            }
                                        }
                                    >
                                        "★"
                                    </button>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </Modal>
    }
}
