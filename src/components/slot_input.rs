//! Slot Input Component
//!
//! Raw JSON textarea for one checklist, flagged while its text is invalid.

use leptos::prelude::*;

use crate::store::{store_set_slot_text, use_app_store, with_slot};

/// Textarea bound to one slot's raw text
#[component]
pub fn SlotInput(index: usize) -> impl IntoView {
    let store = use_app_store();

    let raw_text = move || with_slot(&store, index, |slot| slot.raw_text().to_string()).unwrap_or_default();
    let error = move || with_slot(&store, index, |slot| slot.parse_error().map(|e| e.to_string())).flatten();

    let textarea_class = move || {
        if error().is_some() {
            "slot-textarea invalid"
        } else {
            "slot-textarea"
        }
    };

    view! {
        <div class="slot-input">
            <h2>{format!("Checklist {} Input", index + 1)}</h2>
            <textarea
                class=textarea_class
                prop:value=raw_text
                on:input=move |ev| store_set_slot_text(&store, index, event_target_value(&ev))
                placeholder="Paste JSON array here..."
                spellcheck="false"
            />
            {move || error().map(|msg| view! { <p class="slot-error">{msg}</p> })}
        </div>
    }
}
