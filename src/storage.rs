//! Local Storage Persistence
//!
//! Three independent string keys in browser `localStorage`, each holding a
//! JSON array of activity records. Icons are never stored; they come back
//! from `Category::icon()` after decoding. Load and save are best-effort:
//! malformed JSON reads as "no saved state" and write failures (quota,
//! disabled storage) are logged without blocking the caller.

use wasm_bindgen::JsValue;

use crate::models::Activity;

/// Custom (non-seed) catalog entries.
pub const ACTIVITIES_KEY: &str = "activities";
/// The favorites set.
pub const FAVORITES_KEY: &str = "favorites";
/// Selection history, most recent first.
pub const HISTORY_KEY: &str = "history";

pub fn encode_list(activities: &[Activity]) -> Result<String, serde_json::Error> {
    serde_json::to_string(activities)
}

pub fn decode_list(raw: &str) -> Result<Vec<Activity>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load a persisted activity list. Missing keys, unavailable storage, and
/// undecodable values all come back as an empty list.
pub fn load_list(key: &str) -> Vec<Activity> {
    let Some(storage) = local_storage() else {
        return Vec::new();
    };
    match storage.get_item(key) {
        Ok(Some(raw)) => match decode_list(&raw) {
            Ok(activities) => activities,
            Err(err) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "discarding undecodable '{}' entry: {}",
                    key, err
                )));
                Vec::new()
            }
        },
        _ => Vec::new(),
    }
}

/// Persist an activity list under `key`. The current state is always
/// written, including an empty list, so a cleared collection stays cleared
/// across reloads.
pub fn save_list(key: &str, activities: &[Activity]) {
    let Some(storage) = local_storage() else {
        return;
    };
    let json = match encode_list(activities) {
        Ok(json) => json,
        Err(err) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "failed to encode '{}': {}",
                key, err
            )));
            return;
        }
    };
    if let Err(err) = storage.set_item(key, &json) {
        web_sys::console::warn_2(
            &JsValue::from_str(&format!("failed to persist '{}'", key)),
            &err,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn sample() -> Vec<Activity> {
        vec![
            Activity {
                id: "1712345678901".to_string(),
                name: "Run".to_string(),
                description: "30 min jog".to_string(),
                category: Category::Outdoor,
                custom: true,
            },
            Activity {
                id: "3".to_string(),
                name: "Meditate for 10 minutes".to_string(),
                description: "Find a quiet spot and focus on your breathing".to_string(),
                category: Category::Relax,
                custom: false,
            },
        ]
    }

    #[test]
    fn test_round_trip_preserves_fields_and_rederives_icon() {
        let original = sample();
        let decoded = decode_list(&encode_list(&original).unwrap()).unwrap();

        assert_eq!(decoded, original);
        for (decoded, original) in decoded.iter().zip(&original) {
            assert_eq!(decoded.icon(), original.category.icon());
        }
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(decode_list("not json at all").is_err());
        assert!(decode_list("{\"id\": \"1\"}").is_err());
    }

    #[test]
    fn test_decode_tolerates_foreign_records() {
        // Records from other versions: missing `custom`, unknown category,
        // stray extra fields.
        let raw = r#"[{"id":"9","name":"Knit","description":"A scarf","category":"crafts","emoji":"x"}]"#;
        let decoded = decode_list(raw).unwrap();

        assert_eq!(decoded.len(), 1);
        assert!(!decoded[0].custom);
        assert_eq!(decoded[0].category, Category::Other);
        assert_eq!(decoded[0].icon(), Category::Other.icon());
    }

    #[test]
    fn test_encoded_records_carry_no_icon() {
        let json = encode_list(&sample()).unwrap();
        assert!(!json.contains("icon"));
        assert!(!json.contains("emoji"));
    }
}
