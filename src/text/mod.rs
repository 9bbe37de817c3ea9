//! Text segmentation boundary and keyword normalization.
//!
//! Morphological analysis is an external capability: anything that can
//! produce an ordered `(surface form, part of speech)` sequence plugs in
//! through the [`Tokenizer`] trait. [`SpaceTokenizer`] is a dependency-free
//! fallback so the pipeline runs end to end without an analyzer wired in.

pub mod normalize;

pub use normalize::{KeywordExtractor, Normalizer};

use thiserror::Error;

/// A normalized keyword. Equality is exact string match post-normalization.
pub type Token = String;

/// Errors raised by morphological analysis.
///
/// A tokenizer failure aborts the whole operation that triggered it; no
/// partial token sequences are surfaced.
#[derive(Error, Debug)]
pub enum TokenizationError {
    #[error("morphological analysis failed: {0}")]
    Analysis(String),
}

pub type TextResult<T> = Result<T, TokenizationError>;

/// Part-of-speech classes produced by a [`Tokenizer`].
///
/// Analyzers with richer tagsets must map onto these classes; the
/// normalizer keeps only the noun-like subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    CommonNoun,
    ProperNoun,
    BoundNoun,
    Numeral,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Particle,
    Punctuation,
    Other,
}

impl PosTag {
    /// Content-bearing tags retained during normalization.
    pub fn is_keyword_candidate(&self) -> bool {
        matches!(
            self,
            PosTag::CommonNoun
                | PosTag::ProperNoun
                | PosTag::BoundNoun
                | PosTag::Numeral
                | PosTag::Pronoun
        )
    }
}

/// One analyzed word: surface form plus part of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub surface: String,
    pub tag: PosTag,
}

impl TaggedWord {
    pub fn new(surface: impl Into<String>, tag: PosTag) -> Self {
        Self {
            surface: surface.into(),
            tag,
        }
    }
}

/// External morphological analyzer boundary.
pub trait Tokenizer {
    /// Segment `text` into an ordered sequence of tagged words.
    ///
    /// Empty input yields an empty sequence, not an error.
    fn tokenize(&self, text: &str) -> TextResult<Vec<TaggedWord>>;
}

/// Whitespace segmenter used when no morphological analyzer is available.
///
/// Splits on whitespace, trims surrounding punctuation, and tags digit
/// runs as numerals and everything else as common nouns. Trailing
/// particles on attached word forms are left for the normalizer to strip.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
    fn tokenize(&self, text: &str) -> TextResult<Vec<TaggedWord>> {
        let words = text
            .split_whitespace()
            .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .map(|w| {
                let tag = if w.chars().all(|c| c.is_ascii_digit()) {
                    PosTag::Numeral
                } else {
                    PosTag::CommonNoun
                };
                TaggedWord::new(w, tag)
            })
            .collect();
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_tokenizer_segments_and_tags() {
        let words = SpaceTokenizer.tokenize("삼성전자 실적 발표, 2024").unwrap();
        let surfaces: Vec<&str> = words.iter().map(|w| w.surface.as_str()).collect();
        assert_eq!(surfaces, vec!["삼성전자", "실적", "발표", "2024"]);
        assert_eq!(words[3].tag, PosTag::Numeral);
        assert_eq!(words[0].tag, PosTag::CommonNoun);
    }

    #[test]
    fn test_space_tokenizer_empty_input() {
        assert!(SpaceTokenizer.tokenize("").unwrap().is_empty());
        assert!(SpaceTokenizer.tokenize("   \t\n").unwrap().is_empty());
        assert!(SpaceTokenizer.tokenize("?! ...").unwrap().is_empty());
    }

    #[test]
    fn test_keyword_candidate_tags() {
        assert!(PosTag::CommonNoun.is_keyword_candidate());
        assert!(PosTag::ProperNoun.is_keyword_candidate());
        assert!(PosTag::Numeral.is_keyword_candidate());
        assert!(!PosTag::Verb.is_keyword_candidate());
        assert!(!PosTag::Particle.is_keyword_candidate());
    }
}
