//! Case-insensitive substring filtering and skip/limit pagination.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Record;

/// Substring predicates over `input` and `output`, combined with AND.
///
/// A predicate that is `None` or empty matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFilter {
    pub input_text: Option<String>,
    pub output_text: Option<String>,
}

impl ResponseFilter {
    pub fn new(input_text: Option<String>, output_text: Option<String>) -> Self {
        Self {
            input_text,
            output_text,
        }
    }

    /// Filter on the output field only.
    pub fn output(text: impl Into<String>) -> Self {
        Self {
            input_text: None,
            output_text: Some(text.into()),
        }
    }

    /// Filter on the input field only.
    pub fn input(text: impl Into<String>) -> Self {
        Self {
            input_text: Some(text.into()),
            output_text: None,
        }
    }

    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        active(&self.input_text).is_none() && active(&self.output_text).is_none()
    }

    /// Lowercase the active predicates once for repeated matching.
    fn compile(&self) -> CompiledFilter {
        CompiledFilter {
            input: active(&self.input_text).map(str::to_lowercase),
            output: active(&self.output_text).map(str::to_lowercase),
        }
    }

    /// Check a single record against both predicates.
    pub fn matches(&self, record: &Record) -> bool {
        self.compile().matches(record)
    }
}

struct CompiledFilter {
    input: Option<String>,
    output: Option<String>,
}

impl CompiledFilter {
    fn matches(&self, record: &Record) -> bool {
        contains_folded(&record.input_text(), self.input.as_deref())
            && contains_folded(&record.output_text(), self.output.as_deref())
    }
}

fn active(predicate: &Option<String>) -> Option<&str> {
    predicate.as_deref().filter(|p| !p.is_empty())
}

fn contains_folded(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(needle),
        None => true,
    }
}

/// Filter records, preserving their relative order. The input is not modified.
pub fn filter_records<'a>(records: &'a [Record], filter: &ResponseFilter) -> Vec<&'a Record> {
    if filter.is_empty() {
        return records.iter().collect();
    }

    let compiled = filter.compile();
    let filtered: Vec<&Record> = records.iter().filter(|r| compiled.matches(r)).collect();
    debug!(
        "Filtered by input={:?} output={:?}: {} of {} records",
        filter.input_text,
        filter.output_text,
        filtered.len(),
        records.len()
    );
    filtered
}

/// A `[skip, skip + limit)` window over a result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub skip: usize,
    pub limit: usize,
}

impl Page {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }

    /// Slice the window out of `items`, clipped to the available length.
    pub fn apply<T: Copy>(&self, items: &[T]) -> Vec<T> {
        items.iter().skip(self.skip).take(self.limit).copied().collect()
    }
}

/// Fixed keyword categories served as convenience filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Happy,
    Sad,
}

impl Category {
    /// The literal keyword matched against `output`.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
        }
    }

    pub fn filter(&self) -> ResponseFilter {
        ResponseFilter::output(self.keyword())
    }
}
