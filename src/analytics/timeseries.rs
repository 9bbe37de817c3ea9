//! News volume over time.
//!
//! Buckets matching articles by publication period and finds the peak
//! bucket. Bucket keys are ISO-shaped strings so chronological order and
//! lexicographic order coincide.

use crate::corpus::Article;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Granularity of the volume buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePeriod {
    Date,
    Month,
    Year,
}

impl TimePeriod {
    /// Bucket key for one publication timestamp.
    fn bucket(&self, article: &Article) -> String {
        match self {
            TimePeriod::Date => article.pub_date.format("%Y-%m-%d").to_string(),
            TimePeriod::Month => article.pub_date.format("%Y-%m").to_string(),
            TimePeriod::Year => article.pub_date.format("%Y").to_string(),
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimePeriod::Date => "date",
            TimePeriod::Month => "month",
            TimePeriod::Year => "year",
        };
        f.write_str(label)
    }
}

impl FromStr for TimePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(TimePeriod::Date),
            "month" => Ok(TimePeriod::Month),
            "year" => Ok(TimePeriod::Year),
            other => Err(format!(
                "invalid time period {other:?}, expected date, month or year"
            )),
        }
    }
}

/// Chronologically ordered bucket counts plus the highest-volume bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeSeries {
    pub buckets: IndexMap<String, usize>,
    /// Bucket with the most articles; ties break toward the earliest.
    pub peak: Option<(String, usize)>,
}

impl VolumeSeries {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Count articles whose description mentions `keyword`, bucketed by
/// publication period.
pub fn volume_over_time(articles: &[Article], keyword: &str, period: TimePeriod) -> VolumeSeries {
    let needle = keyword.to_lowercase();
    let mut buckets: IndexMap<String, usize> = IndexMap::new();
    for article in articles {
        if !article.description.to_lowercase().contains(&needle) {
            continue;
        }
        *buckets.entry(period.bucket(article)).or_insert(0) += 1;
    }
    buckets.sort_keys();

    let mut peak: Option<(String, usize)> = None;
    for (bucket, &count) in &buckets {
        if peak.as_ref().map_or(true, |(_, c)| count > *c) {
            peak = Some((bucket.clone(), count));
        }
    }
    VolumeSeries { buckets, peak }
}
