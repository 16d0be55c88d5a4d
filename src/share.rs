//! Share Handoff
//!
//! Hands an activity to the platform share sheet when available, falling
//! back to a clipboard copy. Fire-and-forget: failures are logged to the
//! console and never block the picker.

use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::context::AppContext;
use crate::models::Activity;

/// Text handed to the share target or clipboard.
pub fn share_text(activity: &Activity) -> String {
    format!("{}: {}", activity.name, activity.description)
}

/// Kick off a share without blocking the caller.
pub fn spawn_share(activity: Activity, ctx: AppContext) {
    spawn_local(async move {
        share_activity(&activity, ctx).await;
    });
}

async fn share_activity(activity: &Activity, ctx: AppContext) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let text = share_text(activity);

    // navigator.share is absent outside secure contexts and on most desktops
    let has_share =
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false);

    if has_share {
        let data = web_sys::ShareData::new();
        data.set_title("Check out this activity!");
        data.set_text(&text);
        if let Ok(href) = window.location().href() {
            data.set_url(&href);
        }
        if let Err(err) = JsFuture::from(navigator.share_with_data(&data)).await {
            web_sys::console::error_2(&JsValue::from_str("Error sharing:"), &err);
        }
    } else {
        match JsFuture::from(navigator.clipboard().write_text(&text)).await {
            Ok(_) => ctx.notify("Copied to clipboard!"),
            Err(err) => {
                web_sys::console::warn_2(&JsValue::from_str("Clipboard copy failed:"), &err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_share_text_format() {
        let activity = Activity {
            id: "1".to_string(),
            name: "Go for a hike".to_string(),
            description: "Find a local trail and enjoy nature".to_string(),
            category: Category::Outdoor,
            custom: false,
        };
        assert_eq!(
            share_text(&activity),
            "Go for a hike: Find a local trail and enjoy nature"
        );
    }
}
