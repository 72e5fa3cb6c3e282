//! Corpus loading and the id index.
//!
//! The corpus is built once at startup and never mutated afterwards, so it
//! can be shared across request handlers without locking.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use counsel_core::{Error, LoadMode, Result};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{error, info};

use crate::filter::{filter_records, Category, Page, ResponseFilter};
use crate::types::{LoadStats, Record};

/// Ordered, immutable set of records plus an id → position index.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<Record>,
    index: HashMap<String, usize>,
    mode: LoadMode,
    stats: LoadStats,
}

impl Corpus {
    /// Build a corpus from already-parsed records.
    ///
    /// With `LoadMode::Unique`, only the first record for each distinct
    /// non-empty `output` is kept. When several retained records share an id,
    /// the index points at the last one.
    pub fn from_records(records: Vec<Record>, mode: LoadMode) -> Self {
        let read = records.len();
        let records = match mode {
            LoadMode::All => records,
            LoadMode::Unique => dedup_by_output(records),
        };

        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if let Some(key) = record.id_key() {
                index.insert(key, pos);
            }
        }

        let stats = LoadStats {
            read,
            retained: records.len(),
            dropped: read - records.len(),
            indexed: index.len(),
        };

        Self {
            records,
            index,
            mode,
            stats,
        }
    }

    /// Read and parse a JSON array of records.
    pub fn try_load(path: &Path, mode: LoadMode) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::LoadFailure(format!("{}: {}", path.display(), e)))?;
        let records: Vec<Record> = serde_json::from_str(&data)
            .map_err(|e| Error::LoadFailure(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_records(records, mode))
    }

    /// Load the corpus, falling back to an empty one if the file cannot be
    /// read or parsed. The failure is logged, never returned.
    pub fn load(path: &Path, mode: LoadMode) -> Self {
        info!("Loading responses from {} (mode={})", path.display(), mode);
        match Self::try_load(path, mode) {
            Ok(corpus) => {
                let stats = corpus.stats();
                info!(
                    "Loaded {} responses ({} kept, {} duplicates dropped, {} indexed)",
                    stats.read, stats.retained, stats.dropped, stats.indexed
                );
                corpus
            }
            Err(e) => {
                error!("Error loading responses: {}", e);
                Self {
                    mode,
                    ..Self::default()
                }
            }
        }
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn mode(&self) -> LoadMode {
        self.mode
    }

    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }

    /// Point lookup through the id index.
    pub fn get_by_id(&self, id: &str) -> Result<&Record> {
        self.index
            .get(id)
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| Error::NotFound(format!("response {}", id)))
    }

    /// Filtered records in corpus order.
    pub fn filter(&self, filter: &ResponseFilter) -> Vec<&Record> {
        filter_records(&self.records, filter)
    }

    /// Filtered records, windowed by `page`.
    pub fn query(&self, filter: &ResponseFilter, page: Page) -> Vec<&Record> {
        page.apply(&self.filter(filter))
    }

    /// Records whose output contains the category keyword, windowed by `page`.
    pub fn category(&self, category: Category, page: Page) -> Vec<&Record> {
        self.query(&category.filter(), page)
    }

    /// Uniformly pick one record among the filtered set.
    pub fn random<R: Rng + ?Sized>(&self, filter: &ResponseFilter, rng: &mut R) -> Result<&Record> {
        pick_random(&self.filter(filter), rng)
    }
}

/// Uniformly pick one of `candidates`, which are usually the output of
/// [`Corpus::filter`]. Only the draw touches `rng`.
pub fn pick_random<'a, R: Rng + ?Sized>(candidates: &[&'a Record], rng: &mut R) -> Result<&'a Record> {
    candidates
        .choose(rng)
        .copied()
        .ok_or_else(|| Error::NotFound("no matching responses".to_string()))
}

/// Keep the first record for each distinct `output`, in first-seen order.
///
/// Matching is exact and case-sensitive. Records whose output is missing,
/// null or empty are dropped.
pub fn dedup_by_output(records: Vec<Record>) -> Vec<Record> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| {
            let output = record.output_text();
            !output.is_empty() && seen.insert(output.into_owned())
        })
        .collect()
}
