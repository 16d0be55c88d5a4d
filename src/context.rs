//! Application Context
//!
//! Shared UI state provided via Leptos Context API: the category filter,
//! transient toast notifications, and the celebration signal raised when a
//! roll lands.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::CategoryFilter;

/// How long a toast stays on screen, in milliseconds.
const TOAST_DISMISS_MS: u32 = 3000;

/// How long the celebration signal stays raised after a roll lands.
const CELEBRATION_MS: u32 = 3000;

/// A transient user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: Option<String>,
    pub message: String,
    pub destructive: bool,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Category filter applied to rolls - read
    pub category: ReadSignal<CategoryFilter>,
    /// Category filter applied to rolls - write
    set_category: WriteSignal<CategoryFilter>,
    /// Active toasts, oldest first - read
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    /// True for a short window after a roll lands - read
    pub celebrating: ReadSignal<bool>,
    set_celebrating: WriteSignal<bool>,
    toast_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        category: (ReadSignal<CategoryFilter>, WriteSignal<CategoryFilter>),
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
        celebrating: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            category: category.0,
            set_category: category.1,
            toasts: toasts.0,
            set_toasts: toasts.1,
            celebrating: celebrating.0,
            set_celebrating: celebrating.1,
            toast_seq: StoredValue::new(0),
        }
    }

    /// Change the category filter for subsequent rolls
    pub fn set_category(&self, filter: CategoryFilter) {
        self.set_category.set(filter);
    }

    /// Show a short confirmation notice
    pub fn notify(&self, message: &str) {
        self.push_toast(None, message, false);
    }

    /// Show a titled notice
    pub fn notify_titled(&self, title: &str, message: &str) {
        self.push_toast(Some(title), message, false);
    }

    /// Show an error notice
    pub fn notify_error(&self, title: &str, message: &str) {
        self.push_toast(Some(title), message, true);
    }

    fn push_toast(&self, title: Option<&str>, message: &str, destructive: bool) {
        let id = self.toast_seq.get_value();
        self.toast_seq.update_value(|seq| *seq = seq.wrapping_add(1));

        self.set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title: title.map(str::to_string),
                message: message.to_string(),
                destructive,
            })
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }

    /// Raise the celebration signal, then drop it after the fixed window
    pub fn celebrate(&self) {
        self.set_celebrating.set(true);
        let set_celebrating = self.set_celebrating;
        spawn_local(async move {
            TimeoutFuture::new(CELEBRATION_MS).await;
            set_celebrating.set(false);
        });
    }
}
