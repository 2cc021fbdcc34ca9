//! Theme Toggle Component

use leptos::prelude::*;

use crate::commands;
use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};

/// Dark/light switch. Applies and persists the new theme on click.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    let toggle = move |_| {
        let theme = store_toggle_theme(&store);
        if let Err(err) = commands::apply_theme(theme) {
            log::warn!("[THEME] apply failed: {}", err);
        }
        if let Err(err) = commands::save_theme(theme) {
            log::warn!("[THEME] save failed: {}", err);
        }
    };

    view! {
        <button class="theme-toggle" aria-label="Toggle dark mode" on:click=toggle>
            {move || store.theme().get().toggle_label()}
        </button>
    }
}
