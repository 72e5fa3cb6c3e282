//! Shared application state.

use std::sync::Arc;

use counsel_core::CounselConfig;
use counsel_nlp::{create_recognizer, EntityRecognizer};
use counsel_store::Corpus;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Shared application state accessible from all route handlers.
///
/// The corpus is read-only after construction; the random source is the
/// only field behind a lock.
pub struct AppState {
    pub config: CounselConfig,
    pub corpus: Corpus,
    pub recognizer: Arc<dyn EntityRecognizer>,
    rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(
        config: CounselConfig,
        corpus: Corpus,
        recognizer: Arc<dyn EntityRecognizer>,
    ) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => {
                info!("Random source seeded with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Self {
            config,
            corpus,
            recognizer,
            rng: Mutex::new(rng),
        }
    }

    /// Load the corpus and recognizer described by `config`.
    pub fn from_config(config: CounselConfig) -> Self {
        let corpus = Corpus::load(&config.dataset, config.load_mode);
        let recognizer = create_recognizer(config.ner_backend, config.ner_gazetteer.as_deref());
        Self::new(config, corpus, recognizer)
    }

    /// Run `f` with exclusive access to the shared random source.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        f(&mut self.rng.lock())
    }

    /// Derive an independent generator so long-running work does not hold the lock.
    pub fn fork_rng(&self) -> StdRng {
        StdRng::from_rng(&mut *self.rng.lock())
    }
}
