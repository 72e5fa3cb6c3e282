//! Configuration read from the process environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default corpus file, relative to the working directory.
pub const DEFAULT_DATASET: &str = "psychologist_responses_10k.json";

/// Page size used when a caller omits `limit`.
pub const DEFAULT_LIMIT: usize = 10_000;

/// Which corpus loader variant to run at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Keep every record in file order.
    #[default]
    All,
    /// Keep only the first record for each distinct `output`.
    Unique,
}

impl FromStr for LoadMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "unique" => Ok(Self::Unique),
            other => Err(Error::Config(format!("unknown load mode: {}", other))),
        }
    }
}

impl std::fmt::Display for LoadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Unique => write!(f, "unique"),
        }
    }
}

/// Entity recognizer backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NerBackend {
    /// Regex and lexicon recognizer.
    #[default]
    Heuristic,
    /// No recognizer; entity extraction reports unavailable.
    None,
}

impl FromStr for NerBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(Self::Heuristic),
            "none" | "off" => Ok(Self::None),
            other => Err(Error::Config(format!("unknown NER backend: {}", other))),
        }
    }
}

/// Top-level Counsel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounselConfig {
    /// HTTP listen address.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
    /// Path to the JSON corpus.
    pub dataset: PathBuf,
    /// Loader variant.
    pub load_mode: LoadMode,
    /// Page size applied when `limit` is omitted.
    pub default_limit: usize,
    /// Fixed seed for the shared random source.
    pub rng_seed: Option<u64>,
    pub ner_backend: NerBackend,
    /// Optional lexicon file for the heuristic recognizer.
    pub ner_gazetteer: Option<PathBuf>,
}

impl Default for CounselConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            dataset: PathBuf::from(DEFAULT_DATASET),
            load_mode: LoadMode::All,
            default_limit: DEFAULT_LIMIT,
            rng_seed: None,
            ner_backend: NerBackend::Heuristic,
            ner_gazetteer: None,
        }
    }
}

impl CounselConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            host: var("COUNSEL_HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", var("PORT"))?.unwrap_or(defaults.port),
            dataset: var("COUNSEL_DATASET")
                .map(PathBuf::from)
                .unwrap_or(defaults.dataset),
            load_mode: parse_var("COUNSEL_LOAD_MODE", var("COUNSEL_LOAD_MODE"))?
                .unwrap_or(defaults.load_mode),
            default_limit: parse_var("COUNSEL_DEFAULT_LIMIT", var("COUNSEL_DEFAULT_LIMIT"))?
                .unwrap_or(defaults.default_limit),
            rng_seed: parse_var("COUNSEL_RNG_SEED", var("COUNSEL_RNG_SEED"))?,
            ner_backend: parse_var("COUNSEL_NER_BACKEND", var("COUNSEL_NER_BACKEND"))?
                .unwrap_or(defaults.ner_backend),
            ner_gazetteer: var("COUNSEL_NER_GAZETTEER").map(PathBuf::from),
        })
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(key: &str, value: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.trim()
                .parse::<T>()
                .map_err(|e| Error::Config(format!("{}={:?}: {}", key, v, e)))
        })
        .transpose()
}
