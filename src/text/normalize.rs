//! Keyword normalization over analyzed text.
//!
//! Turns raw text into the ordered keyword-candidate sequence the rest of
//! the pipeline consumes: noun-like surface forms, particle-stripped,
//! stopword- and short-token-filtered, with gazetteer entities preserved
//! verbatim.

use super::{TextResult, Token, Tokenizer};
use crate::config::AnalysisConfig;

/// Normalizes analyzed text into keyword tokens.
pub struct Normalizer<'a> {
    config: &'a AnalysisConfig,
    tokenizer: &'a dyn Tokenizer,
}

impl<'a> Normalizer<'a> {
    pub fn new(config: &'a AnalysisConfig, tokenizer: &'a dyn Tokenizer) -> Self {
        Self { config, tokenizer }
    }

    /// Normalize `text` into an ordered keyword sequence.
    ///
    /// Duplicates within one text are preserved; downstream counting
    /// relies on repetition. Empty or content-free text yields an empty
    /// sequence, never an error.
    pub fn normalize(&self, text: &str) -> TextResult<Vec<Token>> {
        let words = self.tokenizer.tokenize(text)?;

        let mut keywords = Vec::with_capacity(words.len());
        for word in words {
            if !word.tag.is_keyword_candidate() {
                continue;
            }

            // Gazetteer entities are kept whole: no particle stripping,
            // and the short-token filter does not apply to them.
            if self.config.is_entity(&word.surface) {
                if !self.config.is_stopword(&word.surface) {
                    keywords.push(word.surface);
                }
                continue;
            }

            let stripped = self.strip_particle(word.surface);
            if self.config.is_stopword(&stripped) || stripped.chars().count() <= 1 {
                continue;
            }
            keywords.push(stripped);
        }
        Ok(keywords)
    }

    /// Remove at most one trailing particle character.
    fn strip_particle(&self, mut word: Token) -> Token {
        if let Some((idx, last)) = word.char_indices().last() {
            if self.config.is_particle(last) {
                word.truncate(idx);
            }
        }
        word
    }
}

/// Thin per-field wrapper over [`Normalizer`].
///
/// Applied independently to a single article field (title or description);
/// the graph builder consumes only title-derived sequences.
pub struct KeywordExtractor<'a> {
    normalizer: Normalizer<'a>,
}

impl<'a> KeywordExtractor<'a> {
    pub fn new(config: &'a AnalysisConfig, tokenizer: &'a dyn Tokenizer) -> Self {
        Self {
            normalizer: Normalizer::new(config, tokenizer),
        }
    }

    /// Extract the keyword sequence of one article field.
    pub fn extract(&self, field: &str) -> TextResult<Vec<Token>> {
        self.normalizer.normalize(field)
    }

    /// Extract keyword sequences for a batch of fields upfront.
    ///
    /// The whole batch is one unit of work: any tokenizer failure aborts
    /// it with no partial results.
    pub fn extract_all<'f>(
        &self,
        fields: impl IntoIterator<Item = &'f str>,
    ) -> TextResult<Vec<Vec<Token>>> {
        fields.into_iter().map(|f| self.extract(f)).collect()
    }
}
