//! Checklist Sync Frontend App
//!
//! Main application component: three inputs, the aligned table, and the
//! three output cards.

use checklist_sync::SLOT_COUNT;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{AlignedTable, OutputCard, SlotInput, ThemeToggle, ToastView};
use crate::context::{AppContext, Toast};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Theme is read once at startup
    let theme = commands::load_theme();
    if let Err(err) = commands::apply_theme(theme) {
        log::warn!("[APP] could not apply theme: {}", err);
    }
    log::info!("[APP] starting with {} theme", theme.as_str());

    // Fresh session state per mount
    provide_context(Store::new(AppState::new(theme)));
    provide_context(AppContext::new(signal(None::<Toast>)));

    view! {
        <main class="app-layout">
            <header class="app-header">
                <div>
                    <h1>"SDA Checklist Manager"</h1>
                    <p class="subtitle">"Paste JSON checklist data, toggle items, and see real-time output"</p>
                </div>
                <ThemeToggle />
            </header>

            <section class="slot-inputs">
                {(0..SLOT_COUNT).map(|index| view! { <SlotInput index=index /> }).collect_view()}
            </section>

            <section class="checklist-items">
                <h2>"Checklist Items"</h2>
                <AlignedTable />
            </section>

            <section class="json-output">
                <h2>"JSON Output"</h2>
                <div class="output-grid">
                    {(0..SLOT_COUNT).map(|index| view! { <OutputCard index=index /> }).collect_view()}
                </div>
            </section>

            <ToastView />
        </main>
    }
}
