//! Slot
//!
//! One checklist document: the text the user sees, the items parsed from
//! it, and the parse error when there are no valid items.

use crate::error::{ParseError, SyncError, SyncResult};
use crate::item::{CheckState, ChecklistItem};
use crate::export::export_items;
use crate::parser::{parse_checklist, to_pretty_json};

/// A single checklist document.
///
/// Fields are private so the text, items and error can only change
/// together through `set_text` or `toggle`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slot {
    raw_text: String,
    items: Vec<ChecklistItem>,
    parse_error: Option<ParseError>,
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Items of the current text. Empty while `parse_error` is set.
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn parse_error(&self) -> Option<&ParseError> {
        self.parse_error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.parse_error.is_none()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the text and re-derive items and error from it.
    /// Previous items are discarded, never merged.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.raw_text = text.into();
        match parse_checklist(&self.raw_text) {
            Ok(items) => {
                self.items = items;
                self.parse_error = None;
            }
            Err(err) => {
                self.items = Vec::new();
                self.parse_error = Some(err);
            }
        }
    }

    /// Flip one item and rewrite the text from the updated items.
    ///
    /// `slot` is only used to label the error. An out-of-range `row`
    /// leaves the slot untouched.
    pub fn toggle(&mut self, slot: usize, row: usize) -> SyncResult<CheckState> {
        let len = self.items.len();
        let mut items = self.items.clone();
        let state = items
            .get_mut(row)
            .ok_or(SyncError::RowOutOfRange { slot, row, len })?
            .toggle();

        // Serialize before committing so a failure leaves everything as it was
        let text = to_pretty_json(&items)?;
        self.items = items;
        self.raw_text = text;
        self.parse_error = None;
        Ok(state)
    }

    /// Compact JSON of the current items
    pub fn export(&self) -> SyncResult<String> {
        export_items(&self.items)
    }
}
