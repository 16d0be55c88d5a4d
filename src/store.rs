//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the three activity collections plus the current selection and the
//! rolling flag.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Activity;
use crate::picker;
use crate::seed::seed_activities;
use crate::storage;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full catalog: seed activities plus persisted custom entries
    pub activities: Vec<Activity>,
    /// Previous selections, most recent first, capped
    pub history: Vec<Activity>,
    /// Starred activities, unique by id
    pub favorites: Vec<Activity>,
    /// The activity currently on the card
    pub current_activity: Option<Activity>,
    /// True while a roll sequence is in flight
    pub rolling: bool,
}

impl AppState {
    /// Seed catalog plus whatever survived in localStorage.
    pub fn load() -> Self {
        let mut activities = seed_activities();
        activities.extend(storage::load_list(storage::ACTIVITIES_KEY));
        Self {
            activities,
            history: storage::load_list(storage::HISTORY_KEY),
            favorites: storage::load_list(storage::FAVORITES_KEY),
            current_activity: None,
            rolling: false,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle an activity's favorites membership. Returns true if it is a
/// favorite afterwards.
pub fn store_toggle_favorite(store: &AppStore, activity: &Activity) -> bool {
    picker::toggle_favorite(&mut store.favorites().write(), activity)
}

/// Append a new custom activity to the catalog
pub fn store_add_custom(store: &AppStore, activity: Activity) {
    store.activities().write().push(activity);
}

/// Remove a custom activity from the catalog, favorites, and history
pub fn store_delete_custom(store: &AppStore, id: &str) {
    picker::remove_by_id(&mut store.activities().write(), id);
    picker::remove_by_id(&mut store.favorites().write(), id);
    picker::remove_by_id(&mut store.history().write(), id);
}
