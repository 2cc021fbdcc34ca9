//! Parser / Serializer
//!
//! Raw slot text in, item list out, and the editable text form back.

use serde_json::Value;

use crate::error::{ParseError, SyncResult};
use crate::item::ChecklistItem;

/// Parse a slot's raw text.
///
/// Blank text is an empty checklist, not an error. Items are read
/// tolerantly; only malformed JSON or a non-array top level fails.
pub fn parse_checklist(text: &str) -> Result<Vec<ChecklistItem>, ParseError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(text).map_err(|e| {
        log::debug!("[PARSE] syntax error: {}", e);
        ParseError::Syntax(e.to_string())
    })?;

    match value {
        Value::Array(elements) => Ok(elements.into_iter().map(ChecklistItem::from).collect()),
        other => {
            log::debug!("[PARSE] top-level value is {}, not an array", kind_of(&other));
            Err(ParseError::NotArray)
        }
    }
}

/// Human-editable form written back into a slot after a toggle.
/// Every element is written as parsed, keys in input order.
pub(crate) fn to_pretty_json(items: &[ChecklistItem]) -> SyncResult<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
