//! Stateless text transforms.

pub mod qa;
pub mod sentiment;
pub mod summarize;
pub mod translate;

pub use qa::{answer_question, NO_ANSWER};
pub use sentiment::{analyze_sentiment, Sentiment, SentimentLabel};
pub use summarize::summarize;
pub use translate::{translate, DEFAULT_TARGET_LANG};
