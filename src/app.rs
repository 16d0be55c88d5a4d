//! Activity Generator App
//!
//! Root component: owns the reactive store and context, writes collections
//! back to localStorage when they change, and lays out the picker UI.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    ActivityCard, AddActivityDialog, CategoryTabs, CustomActivityList, FavoritesDialog,
    HistoryDialog, RollControls, Title, Toaster,
};
use crate::context::{AppContext, Toast};
use crate::models::{Activity, CategoryFilter};
use crate::storage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Seed catalog plus persisted state; localStorage is synchronous, so
    // the store starts fully loaded.
    let store = Store::new(AppState::load());
    provide_context(store);

    let category = signal(CategoryFilter::All);
    let toasts = signal(Vec::<Toast>::new());
    let celebrating = signal(false);
    provide_context(AppContext::new(category, toasts, celebrating));

    // Persist on every change. Only custom entries are stored for the
    // catalog; seeds are compiled in. Empty collections are written too,
    // so clearing favorites or history sticks across reloads.
    Effect::new(move |_| {
        let custom: Vec<Activity> = store
            .activities()
            .read()
            .iter()
            .filter(|activity| activity.custom)
            .cloned()
            .collect();
        storage::save_list(storage::ACTIVITIES_KEY, &custom);
    });
    Effect::new(move |_| {
        storage::save_list(storage::FAVORITES_KEY, store.favorites().read().as_slice());
    });
    Effect::new(move |_| {
        storage::save_list(storage::HISTORY_KEY, store.history().read().as_slice());
    });

    view! {
        <main class="app-layout">
            <Title />
            <div class="picker-column">
                <CategoryTabs />
                <RollControls />
                <ActivityCard />
                <div class="picker-footer">
                    <div class="picker-footer-left">
                        <HistoryDialog />
                        <FavoritesDialog />
                    </div>
                    <AddActivityDialog />
                </div>
                <CustomActivityList />
            </div>
            <Toaster />
        </main>
    }
}
