//! UI Components
//!
//! Leptos components for the checklist page.

mod aligned_table;
mod output_card;
mod slot_input;
mod theme_toggle;
mod toast;

pub use aligned_table::AlignedTable;
pub use output_card::OutputCard;
pub use slot_input::SlotInput;
pub use theme_toggle::ThemeToggle;
pub use toast::ToastView;
