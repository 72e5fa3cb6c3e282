//! Data types for corpus records and load statistics.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One corpus entry.
///
/// `id`, `input` and `output` are the fields the service interprets; every
/// other key is kept in `extra`. Each field holds the raw JSON value, and
/// `None` means the key was absent, so a record serializes back exactly as
/// it was read (an explicit `null` stays `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A key that is present deserializes to `Some`, even when its value is `null`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// Text view of a raw field: strings as-is, `null` or absent as empty,
/// anything else as its JSON text.
fn field_text(field: Option<&Value>) -> Cow<'_, str> {
    match field {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

impl Record {
    /// Build a record with the interpreted fields only.
    pub fn new(id: impl Into<String>, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            id: Some(Value::String(id.into())),
            input: Some(Value::String(input.into())),
            output: Some(Value::String(output.into())),
            extra: serde_json::Map::new(),
        }
    }

    /// Index key for this record: the stringified `id`, or None when absent.
    ///
    /// String ids are used as-is; numbers and other scalars use their JSON text.
    pub fn id_key(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Input text, empty when missing or null.
    pub fn input_text(&self) -> Cow<'_, str> {
        field_text(self.input.as_ref())
    }

    /// Output text, empty when missing or null.
    pub fn output_text(&self) -> Cow<'_, str> {
        field_text(self.output.as_ref())
    }
}

/// Counts gathered while loading a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Records read from the file.
    pub read: usize,
    /// Records kept in the corpus.
    pub retained: usize,
    /// Records dropped by the unique-by-output pass.
    pub dropped: usize,
    /// Distinct keys in the id index.
    pub indexed: usize,
}
