//! Alignment View
//!
//! Row-by-row comparison of all slots by item index. Borrowed from the
//! current slots and rebuilt on demand, so it can never go stale.

use std::borrow::Cow;

use crate::item::ChecklistItem;
use crate::slot::Slot;
use crate::SLOT_COUNT;

/// Placeholder rendered where a slot has no item for a row
pub const ABSENT_MARKER: &str = "-";

/// Badge rendered next to required items
pub const REQUIRED_LABEL: &str = "Required";

/// Identity of a rendered item across re-renders
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub slot: usize,
    pub id: String,
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item-{}-{}", self.slot, self.id)
    }
}

/// A present item as seen from the aligned view
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView<'a> {
    pub slot: usize,
    pub row: usize,
    pub item: &'a ChecklistItem,
    pub required: bool,
    pub key: ItemKey,
}

impl<'a> ItemView<'a> {
    fn new(slot: usize, row: usize, item: &'a ChecklistItem) -> Self {
        Self {
            slot,
            row,
            item,
            required: item.is_required(),
            key: ItemKey { slot, id: item.id().into_owned() },
        }
    }

    pub fn is_checked(&self) -> bool {
        self.item.is_checked()
    }

    pub fn name(&self) -> Cow<'a, str> {
        self.item.name()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlignedCell<'a> {
    Present(ItemView<'a>),
    Absent,
}

impl<'a> AlignedCell<'a> {
    pub fn item(&self) -> Option<&ItemView<'a>> {
        match self {
            AlignedCell::Present(view) => Some(view),
            AlignedCell::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AlignedCell::Absent)
    }
}

/// One row of the comparison, one cell per slot
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedRow<'a> {
    pub index: usize,
    pub cells: [AlignedCell<'a>; SLOT_COUNT],
}

/// Lazy iterator over aligned rows. Cloning restarts it from the same row.
#[derive(Debug, Clone)]
pub struct AlignedRows<'a> {
    slots: &'a [Slot; SLOT_COUNT],
    next: usize,
    len: usize,
}

impl<'a> AlignedRows<'a> {
    pub(crate) fn new(slots: &'a [Slot; SLOT_COUNT]) -> Self {
        let len = slots.iter().map(Slot::len).max().unwrap_or(0);
        Self { slots, next: 0, len }
    }

    fn row(&self, index: usize) -> AlignedRow<'a> {
        let slots = self.slots;
        AlignedRow {
            index,
            cells: std::array::from_fn(|slot| match slots[slot].items().get(index) {
                Some(item) => AlignedCell::Present(ItemView::new(slot, index, item)),
                None => AlignedCell::Absent,
            }),
        }
    }
}

impl<'a> Iterator for AlignedRows<'a> {
    type Item = AlignedRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let row = self.row(self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AlignedRows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots_with(texts: [&str; SLOT_COUNT]) -> [Slot; SLOT_COUNT] {
        texts.map(|text| {
            let mut slot = Slot::new();
            slot.set_text(text);
            slot
        })
    }

    #[test]
    fn test_empty_slots_have_no_rows() {
        let slots = slots_with(["", "", ""]);
        assert_eq!(AlignedRows::new(&slots).len(), 0);
    }

    #[test]
    fn test_rows_follow_longest_slot() {
        let slots = slots_with([
            r#"[{"id":"a"},{"id":"b"},{"id":"c"}]"#,
            r#"[{"id":"x"}]"#,
            "not json",
        ]);
        let rows: Vec<_> = AlignedRows::new(&slots).collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].cells[1].item().map(|v| v.key.to_string()), Some("item-1-x".to_string()));
        assert!(rows[0].cells[2].is_absent());
        assert!(rows[1].cells[1].is_absent());
        assert_eq!(rows[2].cells[0].item().map(|v| v.row), Some(2));
    }

    #[test]
    fn test_iterator_is_restartable() {
        let slots = slots_with([r#"[{"id":"a"},{"id":"b"}]"#, "", ""]);
        let rows = AlignedRows::new(&slots);

        let first: Vec<_> = rows.clone().collect();
        let second: Vec<_> = rows.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_size_hint_counts_down() {
        let slots = slots_with([r#"[{},{}]"#, "", ""]);
        let mut rows = AlignedRows::new(&slots);
        assert_eq!(rows.len(), 2);
        rows.next();
        assert_eq!(rows.len(), 1);
        rows.next();
        assert_eq!(rows.len(), 0);
        assert!(rows.next().is_none());
    }

    #[test]
    fn test_required_flag() {
        let slots = slots_with([r#"[{"id":"1","mandatory":"yes"},{"id":"2","mandatory":" "}]"#, "", ""]);
        let rows: Vec<_> = AlignedRows::new(&slots).collect();
        assert!(rows[0].cells[0].item().unwrap().required);
        assert!(!rows[1].cells[0].item().unwrap().required);
    }
}
