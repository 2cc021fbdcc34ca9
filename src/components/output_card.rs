//! Output Card Component
//!
//! Compact JSON of one slot with a copy button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Export pane for one slot
#[component]
pub fn OutputCard(index: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let exported = move || store.checklists().read().export_slot(index);

    let copy = move |_| {
        let result = store.checklists().read_untracked().export_slot(index);
        match result {
            Ok(text) => spawn_local(async move {
                match commands::copy_to_clipboard(&text).await {
                    Ok(()) => ctx.notify_success("Checklist Copied!"),
                    Err(err) => {
                        log::error!("[CLIPBOARD] {}", err);
                        ctx.notify_error("Copy failed");
                    }
                }
            }),
            Err(err) => {
                log::error!("[EXPORT] {}", err);
                ctx.notify_error("Copy failed");
            }
        }
    };

    view! {
        <div class="output-card">
            <h3>{format!("Checklist {} Output", index + 1)}</h3>
            <pre class="output-json">{move || exported().unwrap_or_default()}</pre>
            <button class="copy-btn" on:click=copy>"Copy JSON"</button>
        </div>
    }
}
