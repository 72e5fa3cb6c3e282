//! Heuristic entity recognition using regex patterns and a gazetteer.
//!
//! Labels follow the spaCy scheme so clients written against a statistical
//! model keep working: `PERSON`, `ORG`, `GPE`, `DATE`, `TIME`, `MONEY`,
//! `PERCENT`, `CARDINAL`.

use std::collections::BTreeMap;
use std::path::Path;

use counsel_core::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::recognizer::{Entity, EntityRecognizer};

// Compiled regex patterns (compiled once, reused).
static MONEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\d[\d,]*(?:\.\d+)?|\b\d[\d,]*(?:\.\d+)?\s+(?:dollars|euros|pounds|cents)\b")
        .unwrap()
});
static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:\.\d+)?\s?(?:%|percent\b)").unwrap());
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \b(?:January|February|March|April|May|June|July|August|September|October|November|December)
            \s+\d{1,2}(?:st|nd|rd|th)?(?:,?\s*\d{4})?\b
        | \b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b
        | \b\d{4}-\d{1,2}-\d{1,2}\b
        | \b(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b
        | \b(?:yesterday|today|tomorrow)\b
        | \b(?:last|next|this)\s+(?:week|month|year|weekend)\b",
    )
    .unwrap()
});
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b\d{1,2}:\d{2}(?:\s*[aApP][mM])?\b|\b\d{1,2}\s*[aApP][mM]\b|\b(?:tonight|this (?:morning|afternoon|evening))\b",
    )
    .unwrap()
});
static PERSON_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Mr|Mrs|Ms|Miss|Dr|Prof)\.?\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?").unwrap()
});
static ORG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:[A-Z][A-Za-z&]*\s+)+(?:Inc|Corp|Corporation|Company|LLC|Ltd|University|Institute|Hospital|Clinic|Association|Foundation|Bank)\b",
    )
    .unwrap()
});
static CARDINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+(?:,\d{3})*(?:\.\d+)?\b").unwrap());

// Well-known places recognized without a gazetteer file.
const BUILTIN_PLACES: &[&str] = &[
    "United States", "United Kingdom", "America", "Canada", "Mexico", "England",
    "France", "Germany", "Spain", "Italy", "China", "Japan", "India", "Brazil",
    "Australia", "London", "Paris", "Berlin", "Madrid", "Rome", "Tokyo",
    "New York", "Los Angeles", "Chicago", "Boston", "Toronto", "Sydney",
];

static GPE_RE: Lazy<Regex> = Lazy::new(|| alternation(BUILTIN_PLACES.iter().copied()).unwrap());

/// Build `\b(?:a|b|c)\b` from literal terms, longest first.
fn alternation<'a>(terms: impl Iterator<Item = &'a str>) -> std::result::Result<Regex, regex::Error> {
    let mut terms: Vec<&str> = terms.filter(|t| !t.trim().is_empty()).collect();
    terms.sort_by(|a, b| b.len().cmp(&a.len()));
    terms.dedup();
    let body: Vec<String> = terms.iter().map(|t| regex::escape(t.trim())).collect();
    Regex::new(&format!(r"\b(?:{})\b", body.join("|")))
}

/// Regex and lexicon entity recognizer.
pub struct HeuristicRecognizer {
    /// Gazetteer entries, checked before the built-in patterns.
    lexicon: Vec<(String, Regex)>,
    patterns: Vec<(&'static str, &'static Regex)>,
}

impl Default for HeuristicRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicRecognizer {
    /// Create a recognizer with the built-in patterns only.
    pub fn new() -> Self {
        Self {
            lexicon: Vec::new(),
            // Order breaks ties between matches with the same span
            patterns: vec![
                ("MONEY", &MONEY_RE),
                ("PERCENT", &PERCENT_RE),
                ("DATE", &DATE_RE),
                ("TIME", &TIME_RE),
                ("PERSON", &PERSON_RE),
                ("ORG", &ORG_RE),
                ("GPE", &GPE_RE),
                ("CARDINAL", &CARDINAL_RE),
            ],
        }
    }

    /// Create a recognizer extended with a gazetteer file.
    ///
    /// The file is a JSON object mapping labels to lists of literal spans,
    /// e.g. `{"ORG": ["Mind Matters"], "PERSON": ["Sigmund Freud"]}`.
    pub fn with_gazetteer(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("gazetteer {}: {}", path.display(), e)))?;
        let entries: BTreeMap<String, Vec<String>> = serde_json::from_str(&data)
            .map_err(|e| Error::Config(format!("gazetteer {}: {}", path.display(), e)))?;
        Self::from_lexicon(entries)
    }

    /// Create a recognizer extended with in-memory lexicon entries.
    pub fn from_lexicon(entries: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut recognizer = Self::new();
        for (label, terms) in entries {
            if terms.iter().all(|t| t.trim().is_empty()) {
                continue;
            }
            let regex = alternation(terms.iter().map(String::as_str))
                .map_err(|e| Error::Config(format!("gazetteer label {}: {}", label, e)))?;
            recognizer.lexicon.push((label, regex));
        }
        Ok(recognizer)
    }

    /// Number of gazetteer labels loaded.
    pub fn lexicon_labels(&self) -> usize {
        self.lexicon.len()
    }

    fn candidates<'t>(&'t self, text: &'t str) -> Vec<Candidate<'t>> {
        let lexicon = self
            .lexicon
            .iter()
            .map(|(label, re)| (label.as_str(), re));
        let builtin = self.patterns.iter().map(|(label, re)| (*label, *re));

        let mut found = Vec::new();
        for (label, regex) in lexicon.chain(builtin) {
            for m in regex.find_iter(text) {
                found.push(Candidate {
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str(),
                    label,
                });
            }
        }
        found
    }
}

struct Candidate<'t> {
    start: usize,
    end: usize,
    text: &'t str,
    label: &'t str,
}

impl EntityRecognizer for HeuristicRecognizer {
    fn extract(&self, text: &str) -> Result<Vec<Entity>> {
        let mut found = self.candidates(text);

        // Sort by position, longest match first for overlapping
        found.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut entities = Vec::new();
        let mut last_end = 0;
        for candidate in found {
            if candidate.start >= last_end {
                last_end = candidate.end;
                entities.push(Entity::new(candidate.text.trim(), candidate.label));
            }
        }

        debug!("Extracted {} entities", entities.len());
        Ok(entities)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
