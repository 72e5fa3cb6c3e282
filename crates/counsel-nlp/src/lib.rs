//! Counsel NLP: placeholder text transforms and entity recognition.
//!
//! The transforms (sentiment, summarization, question answering, translation)
//! are deliberately mechanical: their string contract is what callers rely on,
//! not their linguistic quality. Entity recognition goes through the
//! `EntityRecognizer` trait so the backend can be swapped or disabled.

pub mod heuristic;
pub mod recognizer;
pub mod transform;

pub use heuristic::HeuristicRecognizer;
pub use recognizer::{create_recognizer, Entity, EntityRecognizer, UnavailableRecognizer};
pub use transform::{
    answer_question, analyze_sentiment, summarize, translate, Sentiment, SentimentLabel,
    DEFAULT_TARGET_LANG, NO_ANSWER,
};
