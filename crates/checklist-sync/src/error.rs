//! Engine Errors
//!
//! Parse failures are stored on the slot as data; `SyncError` covers the
//! calls that address a slot or row that does not exist.

/// Fixed diagnostic for valid JSON that is not an array
pub const NOT_ARRAY_MESSAGE: &str = "JSON must be an array";

/// Why a slot's raw text did not produce an item list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed JSON, carrying the parser's own message
    Syntax(String),
    /// Well-formed JSON whose top-level value is not an array
    NotArray,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Syntax(msg) => write!(f, "{}", msg),
            ParseError::NotArray => write!(f, "{}", NOT_ARRAY_MESSAGE),
        }
    }
}

impl std::error::Error for ParseError {}

/// Common result type for slot operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Slot-level errors. None of them leave a slot modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    SlotOutOfRange { slot: usize },
    RowOutOfRange { slot: usize, row: usize, len: usize },
    Serialize(String),
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::SlotOutOfRange { slot } => write!(f, "Slot out of range: {}", slot),
            SyncError::RowOutOfRange { slot, row, len } => {
                write!(f, "Row out of range: slot {} has {} items, got row {}", slot, len, row)
            }
            SyncError::Serialize(msg) => write!(f, "Serialize error: {}", msg),
        }
    }
}

impl std::error::Error for SyncError {}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Serialize(err.to_string())
    }
}
