//! UI Components
//!
//! Reusable Leptos components.

mod activity_card;
mod add_activity_dialog;
mod category_picker;
mod category_tabs;
mod custom_activity_list;
mod delete_confirm_button;
mod favorites_dialog;
mod history_dialog;
mod modal;
mod roll_controls;
mod title;
mod toaster;

pub use activity_card::ActivityCard;
pub use add_activity_dialog::AddActivityDialog;
pub use category_picker::CategoryPicker;
pub use category_tabs::CategoryTabs;
pub use custom_activity_list::CustomActivityList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use favorites_dialog::FavoritesDialog;
pub use history_dialog::HistoryDialog;
pub use modal::Modal;
pub use roll_controls::RollControls;
pub use title::Title;
pub use toaster::Toaster;
