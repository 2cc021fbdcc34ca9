//! Aligned Table Component
//!
//! Renders the three checklists side by side, one row per item index.
//! Rows are rebuilt from the engine on every change.

use checklist_sync::{AlignedCell, AlignedRow, ABSENT_MARKER, REQUIRED_LABEL, SLOT_COUNT};
use leptos::prelude::*;

use crate::store::{store_toggle_item, use_app_store, AppStateStoreFields, AppStore};

/// Owned copy of a present cell, detached from the store borrow
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CellModel {
    slot: usize,
    row: usize,
    key: String,
    name: String,
    checked: bool,
    required: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct RowModel {
    index: usize,
    cells: Vec<Option<CellModel>>,
}

impl From<AlignedRow<'_>> for RowModel {
    fn from(row: AlignedRow<'_>) -> Self {
        let cells = row
            .cells
            .iter()
            .map(|cell| match cell {
                AlignedCell::Present(view) => Some(CellModel {
                    slot: view.slot,
                    row: view.row,
                    key: view.key.to_string(),
                    name: view.name().to_string(),
                    checked: view.is_checked(),
                    required: view.required,
                }),
                AlignedCell::Absent => None,
            })
            .collect();
        Self { index: row.index, cells }
    }
}

/// Side-by-side view of all slots
#[component]
pub fn AlignedTable() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        store
            .checklists()
            .read()
            .aligned_rows()
            .map(RowModel::from)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="aligned-table">
            <div class="aligned-row header">
                {(0..SLOT_COUNT)
                    .map(|slot| view! { <div class="aligned-cell">{format!("Checklist {}", slot + 1)}</div> })
                    .collect_view()}
            </div>
            <For
                each=rows
                // Whole row as key so any cell change re-renders it
                key=|row| row.clone()
                children=move |row| {
                    view! {
                        <div class="aligned-row" data-row=row.index.to_string()>
                            {row.cells.into_iter().map(|cell| cell_view(store, cell)).collect_view()}
                        </div>
                    }
                }
            />
        </div>
    }
}

fn cell_view(store: AppStore, cell: Option<CellModel>) -> AnyView {
    let Some(CellModel { slot, row, key, name, checked, required }) = cell else {
        // No checkbox here, so absent rows can never be toggled
        return view! {
            <div class="aligned-cell absent">
                <span class="absent-marker">{ABSENT_MARKER}</span>
            </div>
        }
        .into_any();
    };

    view! {
        <div class="aligned-cell">
            <input
                type="checkbox"
                id=key.clone()
                checked=checked
                on:change=move |_| {
                    store_toggle_item(&store, slot, row);
                }
            />
            <label for=key>
                <span class="item-name">{name}</span>
                {required.then(|| view! { <span class="required-badge">{REQUIRED_LABEL}</span> })}
            </label>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use checklist_sync::ChecklistSlots;

    #[test]
    fn test_row_model_from_aligned_rows() {
        let mut slots = ChecklistSlots::new();
        slots
            .set_slot_text(0, r#"[{"id":"1","name":"Sign form","mandatory":"yes","value":"checked"},{"id":"2"}]"#)
            .unwrap();
        slots.set_slot_text(2, r#"[{"id":"9","name":"Other"}]"#).unwrap();

        let rows: Vec<RowModel> = slots.aligned_rows().map(RowModel::from).collect();
        assert_eq!(rows.len(), 2);

        let first = rows[0].cells[0].as_ref().unwrap();
        assert_eq!(first.key, "item-0-1");
        assert!(first.checked);
        assert!(first.required);
        assert!(rows[0].cells[1].is_none());
        assert_eq!(rows[0].cells[2].as_ref().unwrap().name, "Other");

        assert_eq!(rows[1].index, 1);
        assert!(rows[1].cells[2].is_none());
    }
}
