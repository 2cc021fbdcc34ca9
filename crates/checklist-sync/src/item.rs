//! Checklist Item
//!
//! One entry of a checklist document. The parsed JSON element is kept as
//! is; named fields are read through it and a toggle writes only `value`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Binary check state. Wire form is `"checked"` or `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    Checked,
    #[default]
    Unchecked,
}

impl CheckState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckState::Checked => "checked",
            CheckState::Unchecked => "",
        }
    }

    /// Anything other than the exact string `"checked"` reads as unchecked
    pub fn from_str(s: &str) -> Self {
        match s {
            "checked" => CheckState::Checked,
            _ => CheckState::Unchecked,
        }
    }

    pub fn from_value(value: &Value) -> Self {
        value.as_str().map(Self::from_str).unwrap_or_default()
    }

    pub fn toggled(self) -> Self {
        match self {
            CheckState::Checked => CheckState::Unchecked,
            CheckState::Unchecked => CheckState::Checked,
        }
    }

    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }
}

/// Keys with a meaning to the checklist; everything else is an extension
pub const NAMED_KEYS: [&str; 6] = ["id", "name", "type", "value", "doctype", "mandatory"];

/// A single checklist entry.
///
/// Wraps the array element exactly as parsed, so serializing an item
/// reproduces its input apart from a toggled `value`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistItem {
    raw: Value,
}

impl ChecklistItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("id".to_string(), Value::String(id.into()));
        map.insert("name".to_string(), Value::String(name.into()));
        Self { raw: Value::Object(map) }
    }

    /// The element as parsed (plus any toggle)
    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.raw.as_object()?.get(key)
    }

    /// Text of a field: strings as is, numbers and booleans as their JSON
    /// text, anything else (missing, null, arrays, objects) as empty
    pub fn text(&self, key: &str) -> Cow<'_, str> {
        match self.field(key) {
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => Cow::Owned(v.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    /// Unique within its slot
    pub fn id(&self) -> Cow<'_, str> {
        self.text("id")
    }

    /// Display label
    pub fn name(&self) -> Cow<'_, str> {
        self.text("name")
    }

    pub fn kind(&self) -> Cow<'_, str> {
        self.text("type")
    }

    pub fn doctype(&self) -> Cow<'_, str> {
        self.text("doctype")
    }

    pub fn mandatory(&self) -> Cow<'_, str> {
        self.text("mandatory")
    }

    pub fn value(&self) -> CheckState {
        self.field("value").map(CheckState::from_value).unwrap_or_default()
    }

    /// Extension attributes: every key outside `NAMED_KEYS`, in input order
    pub fn extra(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.raw
            .as_object()
            .into_iter()
            .flat_map(|map| map.iter())
            .filter(|(key, _)| !NAMED_KEYS.contains(&key.as_str()))
    }

    pub fn is_checked(&self) -> bool {
        self.value().is_checked()
    }

    /// `mandatory` with surrounding whitespace removed is non-empty
    pub fn is_required(&self) -> bool {
        !self.mandatory().trim().is_empty()
    }

    /// Flip the check state by writing the `value` key and return the new
    /// state. A non-object element becomes an object holding only `value`.
    pub fn toggle(&mut self) -> CheckState {
        let next = self.value().toggled();
        if !self.raw.is_object() {
            self.raw = Value::Object(Map::new());
        }
        if let Value::Object(map) = &mut self.raw {
            map.insert("value".to_string(), Value::String(next.as_str().to_string()));
        }
        next
    }
}

impl From<Value> for ChecklistItem {
    fn from(raw: Value) -> Self {
        Self { raw }
    }
}
