//! Custom Activity List Component
//!
//! User-created activities with inline delete. Hidden while the catalog
//! has no custom entries. Deleting removes the activity from the catalog,
//! favorites, and history.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Activity;
use crate::store::{store_delete_custom, use_app_store, AppStateStoreFields};

#[component]
pub fn CustomActivityList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let custom_activities = move || {
        store
            .activities()
            .get()
            .into_iter()
            .filter(|activity| activity.custom)
            .collect::<Vec<Activity>>()
    };

    view! {
        <Show when=move || store.activities().read().iter().any(|activity| activity.custom)>
            <div class="custom-activities">
                <h3 class="custom-activities-heading">"Your Custom Activities"</h3>
                <div class="custom-activity-list">
                    <For
                        each=custom_activities
                        key=|activity| activity.id.clone()
                        children=move |activity| {
                            let id = activity.id.clone();
                            view! {
                                <div class="custom-activity-row">
                                    <span class="custom-activity-icon">{activity.icon()}</span>
                                    <div class="custom-activity-text">
                                        <h4>{activity.name.clone()}</h4>
                                        <p class="custom-activity-category">{activity.category.label()}</p>
                                    </div>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        on_confirm=Callback::new(move |_| {
                                            store_delete_custom(&store, &id);
                                            ctx.notify("Activity deleted");
                                        })
                                    />
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
