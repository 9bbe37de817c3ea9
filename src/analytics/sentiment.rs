//! Lexicon-based sentiment classification.
//!
//! Scores a text by counting positive and negative lexicon entries it
//! contains as substrings; the larger side wins and ties are neutral.

use crate::config::AnalysisConfig;
use crate::corpus::Article;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify one text against the configured lexicons.
pub fn classify(text: &str, config: &AnalysisConfig) -> Sentiment {
    let text = text.to_lowercase();
    let positive_score = config.positive_words().filter(|w| text.contains(w)).count();
    let negative_score = config.negative_words().filter(|w| text.contains(w)).count();

    if positive_score > negative_score {
        Sentiment::Positive
    } else if negative_score > positive_score {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Per-class article counts over a set, classified by description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentVolumes {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentVolumes {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Classify every article's description and tally the classes.
pub fn volumes(articles: &[Article], config: &AnalysisConfig) -> SentimentVolumes {
    let mut tally = SentimentVolumes::default();
    for article in articles {
        match classify(&article.description, config) {
            Sentiment::Positive => tally.positive += 1,
            Sentiment::Negative => tally.negative += 1,
            Sentiment::Neutral => tally.neutral += 1,
        }
    }
    tally
}
