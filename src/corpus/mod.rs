//! Article corpus: CSV ingestion and typed queries.
//!
//! Articles are immutable once loaded; one row per article. Duplicate
//! titles are meaningful signal (republished wire copy), not noise, so the
//! loader never deduplicates.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or querying the corpus.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV record: {0}")]
    Malformed(#[from] csv::Error),

    #[error("row {row}: unrecognized pub_date {value:?}")]
    InvalidTimestamp { row: usize, value: String },
}

pub type CorpusResult<T> = Result<T, CorpusError>;

/// One news article, immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub item_id: String,
    pub title: String,
    pub description: String,
    pub pub_date: NaiveDateTime,
    pub author: String,
    pub link: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub source: String,
}

/// Raw CSV row shape; converted into [`Article`] after timestamp parsing.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    item_id: String,
    title: String,
    description: String,
    pub_date: String,
    author: String,
    link: String,
    category1: String,
    category2: Option<String>,
    source_name: String,
}

/// Timestamp shapes accepted in the `pub_date` column.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn parse_pub_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }
    // Bare dates map to midnight.
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Load all articles from a CSV file.
///
/// Any malformed row or unparseable timestamp aborts the load with a typed
/// error naming the row; the article set is never silently truncated.
pub fn load_articles(path: impl AsRef<Path>) -> CorpusResult<Vec<Article>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut articles = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let record: CsvRecord = result?;
        let pub_date =
            parse_pub_date(&record.pub_date).ok_or_else(|| CorpusError::InvalidTimestamp {
                // +2: header line, then 1-based data rows
                row: row + 2,
                value: record.pub_date.clone(),
            })?;
        articles.push(Article {
            item_id: record.item_id,
            title: record.title,
            description: record.description,
            pub_date,
            author: record.author,
            link: record.link,
            category: record.category1,
            subcategory: record.category2.filter(|c| !c.is_empty()),
            source: record.source_name,
        });
    }
    tracing::info!(articles = articles.len(), path = %path.display(), "corpus loaded");
    Ok(articles)
}

/// Articles mentioning `keyword` in their title or description,
/// case-insensitive substring match.
pub fn filter_by_keyword(articles: &[Article], keyword: &str) -> Vec<Article> {
    let needle = keyword.to_lowercase();
    articles
        .iter()
        .filter(|a| {
            a.title.to_lowercase().contains(&needle)
                || a.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// The most frequently republished exact headline, with its count.
///
/// Ties break toward the title that appeared first in the article set.
pub fn most_published_headline(articles: &[Article]) -> Option<(&str, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for article in articles {
        *counts.entry(article.title.as_str()).or_insert(0) += 1;
    }
    let mut best: Option<(&str, usize)> = None;
    for (title, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((title, count));
        }
    }
    best
}
