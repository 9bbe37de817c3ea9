//! Newslens: keyword-driven news analytics.
//!
//! Ingests a CSV corpus of news articles and produces keyword analytics
//! around a user-supplied seed keyword: lexicon sentiment, volume over
//! time, word-frequency tables, entity mention counts, and the core
//! product, a co-occurrence network of keywords appearing in titles near
//! the seed, with deterministic ranking, seeded force-directed layout, and
//! SVG rendering.
//!
//! # Architecture
//!
//! - [`config`]: stopwords, entity gazetteer, particles, sentiment
//!   lexicons; loaded once, passed by reference everywhere.
//! - [`corpus`]: typed [`corpus::Article`] records and CSV ingestion.
//! - [`text`]: the external tokenizer boundary and the keyword
//!   normalizer/extractor built on it.
//! - [`analytics`]: sentiment, time-series volume, frequency tables.
//! - [`graph`]: the two-phase co-occurrence graph builder and node
//!   ranking.
//! - [`layout`]: seeded spring layout over the built graph.
//! - [`render`]: the SVG rendering contract (sizes, colormap, radii).
//!
//! Everything is rebuilt per query from the filtered article set; only
//! rendered artifacts persist on disk.
//!
//! # Example
//!
//! ```rust
//! use newslens::config::AnalysisConfig;
//! use newslens::text::{Normalizer, SpaceTokenizer};
//!
//! let config = AnalysisConfig::from_parts(
//!     vec!["기자"],      // stopwords
//!     vec!["삼성전자"],  // gazetteer
//!     vec![],            // positive lexicon
//!     vec![],            // negative lexicon
//! );
//! let normalizer = Normalizer::new(&config, &SpaceTokenizer);
//! let tokens = normalizer.normalize("삼성전자 실적이 발표").unwrap();
//! assert_eq!(tokens, vec!["삼성전자", "실적", "발표"]);
//! ```

pub mod analytics;
pub mod config;
pub mod corpus;
pub mod graph;
pub mod layout;
pub mod render;
pub mod text;

pub use config::{AnalysisConfig, ConfigError};
pub use corpus::{Article, CorpusError};
pub use graph::KeywordGraph;
pub use text::{KeywordExtractor, Normalizer, TokenizationError};

/// Crate version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
