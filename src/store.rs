//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The checklist
//! engine lives in one field so views re-derive from it after every write.

use checklist_sync::{CheckState, ChecklistSlots, Slot};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::theme::Theme;

/// Session state owned by the app root
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The three checklist slots
    pub checklists: ChecklistSlots,
    /// Current theme
    pub theme: Theme,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
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

/// Read something out of one slot (tracked)
pub fn with_slot<T>(store: &AppStore, index: usize, f: impl FnOnce(&Slot) -> T) -> Option<T> {
    store.checklists().read().slot(index).ok().map(f)
}

/// Replace a slot's text with user input
pub fn store_set_slot_text(store: &AppStore, index: usize, text: String) {
    if let Err(err) = store.checklists().write().set_slot_text(index, text) {
        log::warn!("[STORE] edit dropped: {}", err);
    }
}

/// Toggle one item. Out-of-range rows are logged by the engine and ignored.
pub fn store_toggle_item(store: &AppStore, slot: usize, row: usize) -> Option<CheckState> {
    store.checklists().write().toggle_item(slot, row).ok()
}

/// Flip the theme and return the new value
pub fn store_toggle_theme(store: &AppStore) -> Theme {
    let theme = store.theme().get_untracked().toggled();
    *store.theme().write() = theme;
    theme
}
