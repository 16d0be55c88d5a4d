//! Favorites Dialog Component
//!
//! Modal listing starred activities with a remove action per row.

use leptos::prelude::*;

use crate::components::Modal;
use crate::context::AppContext;
use crate::store::{store_toggle_favorite, use_app_store, AppStateStoreFields};

#[component]
pub fn FavoritesDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (open, set_open) = signal(false);

    view! {
        <button class="footer-btn" on:click=move |_| set_open.set(true)>
            "♥ Favorites"
        </button>
        <Modal title="Favorite Activities" open=open set_open=set_open>
            <div class="dialog-list">
                <Show
                    when=move || !store.favorites().read().is_empty()
                    fallback=|| view! { <p class="dialog-empty">"No favorite activities yet"</p> }
                >
                    <For
                        each=move || store.favorites().get()
                        key=|activity| activity.id.clone()
                        children=move |activity| {
                            let subject = activity.clone();
                            view! {
                                <div class="dialog-row">
                                    <span class="dialog-row-icon">{activity.icon()}</span>
                                    <div class="dialog-row-text">
                                        <h4>{activity.name.clone()}</h4>
                                        <p>{activity.description.clone()}</p>
                                    </div>
                                    <button
                                        class="unfavorite-btn"
                                        on:click=move |_| {
                                            store_toggle_favorite(&store, &subject);
                                            ctx.notify("Removed from favorites");
                                        }
                                    >
                                        "×"
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
