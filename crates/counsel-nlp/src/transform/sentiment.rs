//! Sentiment placeholder.
//!
//! The score is drawn at random and does not depend on the text; two calls
//! with the same input may disagree.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label by sign: above zero is positive, below is negative, zero is neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    #[serde(rename = "sentiment")]
    pub score: f64,
    pub label: SentimentLabel,
}

impl Sentiment {
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}

/// Draw a score uniformly from `[-1, 1]` and label it.
pub fn analyze_sentiment<R: Rng + ?Sized>(_text: &str, rng: &mut R) -> Sentiment {
    Sentiment::from_score(rng.random_range(-1.0..=1.0))
}
