//! Add Activity Dialog Component
//!
//! Modal form for creating a custom activity: name, description, and one
//! of the four primary categories (outdoor by default).

use leptos::prelude::*;

use crate::components::{CategoryPicker, Modal};
use crate::context::AppContext;
use crate::models::Category;
use crate::picker::new_custom_activity;
use crate::store::{store_add_custom, use_app_store, AppStateStoreFields};

#[component]
pub fn AddActivityDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (open, set_open) = signal(false);
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(Category::Outdoor);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let built = {
            let catalog = store.activities().read_untracked();
            new_custom_activity(
                &catalog,
                &name.get_untracked(),
                &description.get_untracked(),
                category.get_untracked(),
                js_sys::Date::now() as u64,
            )
        };

        match built {
            Ok(activity) => {
                store_add_custom(&store, activity);
                set_name.set(String::new());
                set_description.set(String::new());
                set_category.set(Category::Outdoor);
                set_open.set(false);
                ctx.notify_titled(
                    "Activity added",
                    "Your custom activity has been added to the list.",
                );
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("rejected custom activity: {}", err).into());
                ctx.notify_error("Missing information", "Please fill in all fields");
            }
        }
    };

    view! {
        <button class="add-activity-btn" on:click=move |_| set_open.set(true)>
            "+ Add Activity"
        </button>
        <Modal title="Add Custom Activity" open=open set_open=set_open>
            <form class="add-activity-form" on:submit=submit>
                <label for="activity-name">"Activity Name"</label>
                <input
                    id="activity-name"
                    type="text"
                    placeholder="Go for a run"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label for="activity-description">"Description"</label>
                <textarea
                    id="activity-description"
                    placeholder="Run for 30 minutes in your neighborhood"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <label>"Category"</label>
                <CategoryPicker
                    current=category
                    on_change=move |selected| set_category.set(selected)
                />

                <button type="submit" class="add-activity-submit">"Add Activity"</button>
            </form>
        </Modal>
    }
}
