//! Activity Picker
//!
//! The selection state machine: category filtering, the uniform random
//! pick, the rolling animation sequence, history capping, favorites, and
//! custom-activity bookkeeping. Everything except `start_roll` is pure so
//! it can be unit-tested off the browser.

use std::fmt;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::models::{Activity, Category, CategoryFilter};
use crate::store::{AppStateStoreFields, AppStore};

/// History keeps only this many entries, most recent first.
pub const HISTORY_CAP: usize = 10;

/// Number of intermediate picks shown during a roll.
pub const ROLL_STEPS: u32 = 10;

/// Cadence of the intermediate picks, in milliseconds.
pub const ROLL_STEP_MS: u32 = 100;

/// A recoverable picker failure. Neither variant mutates any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerError {
    /// The category filter produced no candidates.
    EmptySelection,
    /// A required field was blank after trimming.
    MissingField(&'static str),
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::EmptySelection => write!(f, "no activities match the selected category"),
            PickerError::MissingField(field) => write!(f, "missing required field: {}", field),
        }
    }
}

/// Candidates for a roll: the catalog filtered by category.
pub fn candidates(
    catalog: &[Activity],
    filter: CategoryFilter,
) -> Result<Vec<Activity>, PickerError> {
    let filtered: Vec<Activity> = catalog
        .iter()
        .filter(|activity| filter.matches(activity.category))
        .cloned()
        .collect();
    if filtered.is_empty() {
        Err(PickerError::EmptySelection)
    } else {
        Ok(filtered)
    }
}

/// Uniform pick from a non-empty candidate list. `roll` is a random value
/// in `[0, 1)`; values at or above 1.0 clamp to the last entry.
pub fn pick(candidates: &[Activity], roll: f64) -> &Activity {
    let index = ((roll * candidates.len() as f64) as usize).min(candidates.len() - 1);
    &candidates[index]
}

/// Prepend a selection to history, evicting beyond the cap.
pub fn push_history(history: &mut Vec<Activity>, activity: Activity) {
    history.insert(0, activity);
    history.truncate(HISTORY_CAP);
}

pub fn is_favorite(favorites: &[Activity], id: &str) -> bool {
    favorites.iter().any(|fav| fav.id == id)
}

/// Toggle membership in favorites. Returns true if the activity is a
/// favorite afterwards.
pub fn toggle_favorite(favorites: &mut Vec<Activity>, activity: &Activity) -> bool {
    if is_favorite(favorites, &activity.id) {
        favorites.retain(|fav| fav.id != activity.id);
        false
    } else {
        favorites.push(activity.clone());
        true
    }
}

/// Remove an activity from a collection by id. No-op if absent.
pub fn remove_by_id(list: &mut Vec<Activity>, id: &str) {
    list.retain(|activity| activity.id != id);
}

/// Generate an id for a new custom activity. Timestamp-derived like the
/// seed ids are numeric, with a suffix when two adds land on the same
/// millisecond.
pub fn next_custom_id(catalog: &[Activity], now_ms: u64) -> String {
    let taken = |id: &str| catalog.iter().any(|activity| activity.id == id);
    let base = now_ms.to_string();
    if !taken(&base) {
        return base;
    }
    let mut n = 1u32;
    loop {
        let id = format!("{}-{}", base, n);
        if !taken(&id) {
            return id;
        }
        n += 1;
    }
}

/// Validate and build a custom activity. Name and description must be
/// non-empty after trimming.
pub fn new_custom_activity(
    catalog: &[Activity],
    name: &str,
    description: &str,
    category: Category,
    now_ms: u64,
) -> Result<Activity, PickerError> {
    let name = name.trim();
    let description = description.trim();
    if name.is_empty() {
        return Err(PickerError::MissingField("name"));
    }
    if description.is_empty() {
        return Err(PickerError::MissingField("description"));
    }
    Ok(Activity {
        id: next_custom_id(catalog, now_ms),
        name: name.to_string(),
        description: description.to_string(),
        category,
        custom: true,
    })
}

/// Run the roll sequence: flash `ROLL_STEPS` intermediate picks at the
/// fixed cadence, then commit an independent final pick, record it in
/// history, and raise the celebration signal.
///
/// The `rolling` flag is the one-in-flight guard; the trigger buttons are
/// disabled while it is set, and a second call returns immediately.
pub fn start_roll(store: AppStore, ctx: AppContext) {
    if store.rolling().get_untracked() {
        return;
    }

    let pool = match candidates(
        &store.activities().read_untracked(),
        ctx.category.get_untracked(),
    ) {
        Ok(pool) => pool,
        Err(_) => {
            ctx.notify_error(
                "No activities found",
                "Try selecting a different category or adding your own activities.",
            );
            return;
        }
    };

    store.rolling().set(true);

    spawn_local(async move {
        for _ in 0..ROLL_STEPS {
            let preview = pick(&pool, js_sys::Math::random()).clone();
            store.current_activity().set(Some(preview));
            TimeoutFuture::new(ROLL_STEP_MS).await;
        }

        // The final pick is independent of the last preview.
        let landed = pick(&pool, js_sys::Math::random()).clone();
        store.current_activity().set(Some(landed.clone()));
        push_history(&mut store.history().write(), landed);
        store.rolling().set(false);
        ctx.celebrate();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_activities;

    fn custom(id: &str, category: Category) -> Activity {
        Activity {
            id: id.to_string(),
            name: format!("Activity {}", id),
            description: "Something to do".to_string(),
            category,
            custom: true,
        }
    }

    #[test]
    fn test_candidates_filtered_by_category() {
        let catalog = seed_activities();

        let outdoor = candidates(&catalog, CategoryFilter::Only(Category::Outdoor)).unwrap();
        assert_eq!(outdoor.len(), 4);
        assert!(outdoor.iter().all(|a| a.category == Category::Outdoor));

        let all = candidates(&catalog, CategoryFilter::All).unwrap();
        assert_eq!(all.len(), catalog.len());
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        let catalog = seed_activities();
        // No seed uses Other, so this filter has no candidates.
        let result = candidates(&catalog, CategoryFilter::Only(Category::Other));
        assert_eq!(result.unwrap_err(), PickerError::EmptySelection);

        assert_eq!(
            candidates(&[], CategoryFilter::All).unwrap_err(),
            PickerError::EmptySelection
        );
    }

    #[test]
    fn test_pick_stays_in_candidates() {
        let catalog = seed_activities();
        let pool = candidates(&catalog, CategoryFilter::Only(Category::Outdoor)).unwrap();

        for roll in [0.0, 0.1, 0.25, 0.5, 0.75, 0.999] {
            let picked = pick(&pool, roll);
            assert!(pool.iter().any(|a| a.id == picked.id));
            assert_eq!(picked.category, Category::Outdoor);
        }
        // Degenerate roll values clamp instead of indexing out of range.
        assert_eq!(pick(&pool, 1.0).id, pool.last().unwrap().id);
    }

    #[test]
    fn test_committed_pick_lands_in_history_first() {
        let catalog = seed_activities();
        let pool = candidates(&catalog, CategoryFilter::All).unwrap();
        let mut history = Vec::new();

        let landed = pick(&pool, 0.42).clone();
        push_history(&mut history, landed.clone());

        assert_eq!(history[0], landed);
        assert!(pool.contains(&landed));
    }

    #[test]
    fn test_history_caps_at_ten_most_recent_first() {
        let mut history = Vec::new();
        for n in 0..11 {
            push_history(&mut history, custom(&n.to_string(), Category::Relax));
        }

        assert_eq!(history.len(), HISTORY_CAP);
        // Eleventh push evicted the oldest ("0"); newest first.
        assert_eq!(history[0].id, "10");
        assert_eq!(history[9].id, "1");
        assert!(!history.iter().any(|a| a.id == "0"));
    }

    #[test]
    fn test_toggle_favorite_is_involutive() {
        let activity = custom("a", Category::Learn);
        let mut favorites = vec![custom("b", Category::Relax)];
        let before = favorites.clone();

        assert!(toggle_favorite(&mut favorites, &activity));
        assert!(is_favorite(&favorites, "a"));
        assert!(!toggle_favorite(&mut favorites, &activity));
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_remove_by_id_everywhere_and_noop_when_absent() {
        let target = custom("gone", Category::Creative);
        let mut catalog = seed_activities();
        catalog.push(target.clone());
        let mut favorites = vec![target.clone()];
        let mut history = vec![custom("other", Category::Relax), target.clone()];

        for list in [&mut catalog, &mut favorites, &mut history] {
            remove_by_id(list, "gone");
        }
        assert_eq!(catalog.len(), 18);
        assert!(favorites.is_empty());
        assert_eq!(history.len(), 1);

        // Absent id: nothing changes.
        let snapshot = catalog.clone();
        remove_by_id(&mut catalog, "gone");
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn test_new_custom_activity_validates_and_trims() {
        let catalog = seed_activities();

        let activity =
            new_custom_activity(&catalog, "  Run  ", " 30 min jog ", Category::Outdoor, 99)
                .unwrap();
        assert_eq!(activity.name, "Run");
        assert_eq!(activity.description, "30 min jog");
        assert!(activity.custom);

        assert_eq!(
            new_custom_activity(&catalog, "   ", "desc", Category::Outdoor, 99).unwrap_err(),
            PickerError::MissingField("name")
        );
        assert_eq!(
            new_custom_activity(&catalog, "Run", " ", Category::Outdoor, 99).unwrap_err(),
            PickerError::MissingField("description")
        );
    }

    #[test]
    fn test_add_then_delete_restores_catalog() {
        let mut catalog = seed_activities();
        let before: Vec<String> = catalog.iter().map(|a| a.id.clone()).collect();

        let added =
            new_custom_activity(&catalog, "Run", "30 min jog", Category::Outdoor, 1234).unwrap();
        catalog.push(added.clone());
        assert_eq!(catalog.len(), 19);

        remove_by_id(&mut catalog, &added.id);
        let after: Vec<String> = catalog.iter().map(|a| a.id.clone()).collect();
        assert_eq!(after, before);
    }

    #[test]
    fn test_custom_ids_unique_within_same_millisecond() {
        let mut catalog = seed_activities();
        let first = new_custom_activity(&catalog, "A", "a", Category::Relax, 777).unwrap();
        catalog.push(first.clone());
        let second = new_custom_activity(&catalog, "B", "b", Category::Relax, 777).unwrap();

        assert_eq!(first.id, "777");
        assert_ne!(second.id, first.id);
    }
}
