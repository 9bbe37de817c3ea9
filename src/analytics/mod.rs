//! Corpus-level analytics: sentiment, volume over time, and frequency
//! tables for cloud/treemap rendering.

pub mod frequency;
pub mod sentiment;
pub mod timeseries;

pub use frequency::{entity_mentions, word_frequencies};
pub use sentiment::{classify, volumes, Sentiment, SentimentVolumes};
pub use timeseries::{volume_over_time, TimePeriod, VolumeSeries};
