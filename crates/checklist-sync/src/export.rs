//! Export
//!
//! Compact JSON handed to the outside world (clipboard, output pane).
//! A different form from the pretty text written back into a slot on
//! toggle; both carry every element exactly as parsed.

use crate::error::SyncResult;
use crate::item::ChecklistItem;
use crate::slots::ChecklistSlots;

/// Compact JSON of an item list, keys in input order, no whitespace
pub(crate) fn export_items(items: &[ChecklistItem]) -> SyncResult<String> {
    Ok(serde_json::to_string(items)?)
}

impl ChecklistSlots {
    /// Compact JSON of one slot's current items
    pub fn export_slot(&self, index: usize) -> SyncResult<String> {
        self.slot(index)?.export()
    }
}
