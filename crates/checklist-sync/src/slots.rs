//! Checklist Slot Manager
//!
//! Owns the three slots. Every mutation addresses exactly one slot and
//! never reads or writes the others.

use crate::align::AlignedRows;
use crate::error::{SyncError, SyncResult};
use crate::item::CheckState;
use crate::slot::Slot;
use crate::SLOT_COUNT;

/// Session state for the side-by-side checklists.
///
/// Created empty per session; there is no shared or global instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistSlots {
    slots: [Slot; SLOT_COUNT],
}

impl ChecklistSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> SyncResult<&Slot> {
        self.slots.get(index).ok_or(SyncError::SlotOutOfRange { slot: index })
    }

    fn slot_mut(&mut self, index: usize) -> SyncResult<&mut Slot> {
        self.slots.get_mut(index).ok_or(SyncError::SlotOutOfRange { slot: index })
    }

    /// Replace a slot's text with user input and re-parse it.
    ///
    /// Parse failures are recorded on the slot, not returned; the only
    /// error is an unknown slot index.
    pub fn set_slot_text(&mut self, index: usize, text: impl Into<String>) -> SyncResult<()> {
        let slot = self.slot_mut(index)?;
        slot.set_text(text);
        match slot.parse_error() {
            Some(err) => log::debug!("[SLOTS] slot {} rejected: {}", index, err),
            None => log::debug!("[SLOTS] slot {} accepted {} items", index, slot.len()),
        }
        Ok(())
    }

    /// Flip one item's check state and resync the slot text.
    ///
    /// A row past the end of the slot is reported and ignored; slots with
    /// fewer rows than their neighbours are expected.
    pub fn toggle_item(&mut self, slot: usize, row: usize) -> SyncResult<CheckState> {
        let result = self.slot_mut(slot)?.toggle(slot, row);
        match &result {
            Ok(state) => log::debug!("[SLOTS] slot {} row {} -> {:?}", slot, row, state),
            Err(err) => log::warn!("[SLOTS] toggle ignored: {}", err),
        }
        result
    }

    /// Rows aligned by index across all slots, derived from current state
    pub fn aligned_rows(&self) -> AlignedRows<'_> {
        AlignedRows::new(&self.slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_three_empty_slots() {
        let slots = ChecklistSlots::new();
        assert_eq!(slots.slots().len(), 3);
        assert!(slots.slots().iter().all(|s| s.is_empty() && s.is_valid()));
        assert_eq!(slots.aligned_rows().len(), 0);
    }

    #[test]
    fn test_set_slot_text_bad_index() {
        let mut slots = ChecklistSlots::new();
        assert_eq!(slots.set_slot_text(3, "[]"), Err(SyncError::SlotOutOfRange { slot: 3 }));
        assert_eq!(slots, ChecklistSlots::new());
    }

    #[test]
    fn test_toggle_bad_slot_is_noop() {
        let mut slots = ChecklistSlots::new();
        slots.set_slot_text(0, r#"[{"id":"1"}]"#).unwrap();
        let before = slots.clone();

        assert_eq!(slots.toggle_item(5, 0), Err(SyncError::SlotOutOfRange { slot: 5 }));
        assert_eq!(slots, before);
    }

    #[test]
    fn test_aligned_len_ignores_invalid_slot() {
        let mut slots = ChecklistSlots::new();
        slots.set_slot_text(0, r#"[{},{}]"#).unwrap();
        slots.set_slot_text(1, r#"[{},{},{}"#).unwrap();
        assert_eq!(slots.aligned_rows().len(), 2);
    }
}
