//! Entity recognizer trait and backend selection.
//!
//! The `EntityRecognizer` trait abstracts over named-entity extraction.
//! Implementations:
//! - `HeuristicRecognizer`: regex patterns plus an optional gazetteer
//! - `UnavailableRecognizer`: reports why no backend could be initialized

use std::path::Path;
use std::sync::Arc;

use counsel_core::{Error, NerBackend, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::heuristic::HeuristicRecognizer;

/// A recognized span and its label (`PERSON`, `ORG`, `GPE`, `DATE`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Trait for entity extraction backends.
///
/// Backends are shared across request handlers, so extraction takes `&self`.
pub trait EntityRecognizer: Send + Sync {
    /// Extract entities in text order.
    ///
    /// An empty vector means nothing was found. An unavailable backend must
    /// return `Error::ServiceUnavailable` instead.
    fn extract(&self, text: &str) -> Result<Vec<Entity>>;

    /// Check if the backend is ready to serve requests.
    fn is_available(&self) -> bool;

    /// Short backend name for logs and health output.
    fn name(&self) -> &str;
}

/// Stand-in used when no backend could be initialized.
pub struct UnavailableRecognizer {
    reason: String,
}

impl UnavailableRecognizer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl EntityRecognizer for UnavailableRecognizer {
    fn extract(&self, _text: &str) -> Result<Vec<Entity>> {
        Err(Error::ServiceUnavailable(self.reason.clone()))
    }

    fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

/// Create the configured recognizer.
///
/// Initialization failures do not abort startup: they produce an
/// `UnavailableRecognizer` so that extraction requests fail visibly.
pub fn create_recognizer(
    backend: NerBackend,
    gazetteer: Option<&Path>,
) -> Arc<dyn EntityRecognizer> {
    match backend {
        NerBackend::Heuristic => {
            let loaded = match gazetteer {
                Some(path) => HeuristicRecognizer::with_gazetteer(path),
                None => Ok(HeuristicRecognizer::new()),
            };
            match loaded {
                Ok(recognizer) => {
                    info!(
                        "Using heuristic entity recognizer ({} lexicon labels)",
                        recognizer.lexicon_labels()
                    );
                    Arc::new(recognizer)
                }
                Err(e) => {
                    warn!("Entity recognizer unavailable: {}", e);
                    Arc::new(UnavailableRecognizer::new(e.to_string()))
                }
            }
        }
        NerBackend::None => {
            info!("Entity recognition disabled by configuration.");
            Arc::new(UnavailableRecognizer::new("entity recognition disabled"))
        }
    }
}
