//! Keyword frequency tables.
//!
//! Per-occurrence counts of normalized description tokens, as consumed by
//! cloud-style renderers, plus the gazetteer-restricted variant used for
//! entity treemaps.

use crate::config::AnalysisConfig;
use crate::corpus::Article;
use crate::text::{KeywordExtractor, TextResult, Token};
use indexmap::IndexMap;

/// Count normalized description tokens across the article set.
///
/// Counts are per occurrence and the map is ordered by first appearance.
pub fn word_frequencies(
    articles: &[Article],
    extractor: &KeywordExtractor<'_>,
) -> TextResult<IndexMap<Token, usize>> {
    let batches = extractor.extract_all(articles.iter().map(|a| a.description.as_str()))?;
    let mut counts: IndexMap<Token, usize> = IndexMap::new();
    for tokens in batches {
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

/// Like [`word_frequencies`], restricted to gazetteer entities.
pub fn entity_mentions(
    articles: &[Article],
    extractor: &KeywordExtractor<'_>,
    config: &AnalysisConfig,
) -> TextResult<IndexMap<Token, usize>> {
    let mut counts = word_frequencies(articles, extractor)?;
    counts.retain(|token, _| config.is_entity(token));
    Ok(counts)
}

/// The `n` highest counts, stable order on ties.
pub fn top_n(counts: &IndexMap<Token, usize>, n: usize) -> Vec<(Token, usize)> {
    let mut entries: Vec<(Token, usize)> = counts
        .iter()
        .map(|(token, &count)| (token.clone(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::SpaceTokenizer;

    fn article(description: &str) -> Article {
        Article {
            item_id: "0".into(),
            title: String::new(),
            description: description.into(),
            pub_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            author: String::new(),
            link: String::new(),
            category: String::new(),
            subcategory: None,
            source: String::new(),
        }
    }

    #[test]
    fn test_word_frequencies_count_occurrences() {
        let config = AnalysisConfig::from_parts::<&str>(vec![], vec![], vec![], vec![]);
        let extractor = KeywordExtractor::new(&config, &SpaceTokenizer);
        let articles = vec![article("실적 발표 실적"), article("실적 전망")];
        let counts = word_frequencies(&articles, &extractor).unwrap();
        assert_eq!(counts.get("실적"), Some(&3));
        assert_eq!(counts.get("발표"), Some(&1));
        assert_eq!(counts.get("전망"), Some(&1));
    }

    #[test]
    fn test_entity_mentions_restricted_to_gazetteer() {
        let config =
            AnalysisConfig::from_parts(vec![], vec!["삼성전자", "카카오"], vec![], vec![]);
        let extractor = KeywordExtractor::new(&config, &SpaceTokenizer);
        let articles = vec![
            article("삼성전자 실적 발표"),
            article("카카오 삼성전자 협력"),
        ];
        let counts = entity_mentions(&articles, &extractor, &config).unwrap();
        assert_eq!(counts.get("삼성전자"), Some(&2));
        assert_eq!(counts.get("카카오"), Some(&1));
        assert_eq!(counts.get("실적"), None);
    }

    #[test]
    fn test_top_n_stable_on_ties() {
        let config = AnalysisConfig::from_parts::<&str>(vec![], vec![], vec![], vec![]);
        let extractor = KeywordExtractor::new(&config, &SpaceTokenizer);
        let articles = vec![article("증시 환율 증시 환율 금리")];
        let counts = word_frequencies(&articles, &extractor).unwrap();
        let top = top_n(&counts, 2);
        assert_eq!(top[0].0, "증시");
        assert_eq!(top[1].0, "환율");
    }
}
