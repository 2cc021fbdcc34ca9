//! Checklist Sync Engine
//!
//! Keeps up to three JSON checklist documents in step between their raw
//! text, the parsed items, and the text regenerated after a toggle.
//!
//! Layers (leaves first):
//! - item / parser: tolerant JSON reading, elements kept as parsed
//! - slot: one document's text, items and parse error
//! - slots: the three-slot container with edit and toggle
//! - align / export: read-only views over the container

mod align;
mod error;
mod export;
mod item;
mod parser;
mod slot;
mod slots;

/// Number of side-by-side checklists
pub const SLOT_COUNT: usize = 3;

pub use align::{AlignedCell, AlignedRow, AlignedRows, ItemKey, ItemView, ABSENT_MARKER, REQUIRED_LABEL};
pub use error::{ParseError, SyncError, SyncResult, NOT_ARRAY_MESSAGE};
pub use item::{CheckState, ChecklistItem, NAMED_KEYS};
pub use parser::parse_checklist;
pub use slot::Slot;
pub use slots::ChecklistSlots;
