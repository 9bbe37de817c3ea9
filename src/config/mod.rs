//! Analysis configuration: stopwords, entity gazetteer, particle set,
//! and sentiment lexicons.
//!
//! All resources are loaded once at startup and shared by reference.
//! Normalization correctness depends on the stopword set and gazetteer, so
//! a load failure is fatal: callers must not serve requests without a
//! fully constructed [`AnalysisConfig`].

use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading analysis resources.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("resource file {} contains no entries", path.display())]
    EmptyResource { path: PathBuf },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Trailing grammatical suffixes stripped during normalization.
///
/// A closed set of single-character particles; a word ending in one of
/// these loses that character unless it is a gazetteer entry.
pub const DEFAULT_PARTICLES: [char; 8] = ['은', '는', '이', '가', '를', '도', '랑', '을'];

/// Immutable analysis resources, constructed once per process.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    stopwords: FxHashSet<String>,
    gazetteer: FxHashSet<String>,
    particles: FxHashSet<char>,
    positive: FxHashSet<String>,
    negative: FxHashSet<String>,
}

impl AnalysisConfig {
    /// Load all resources from one-token-per-line UTF-8 files.
    pub fn load(
        stopwords: impl AsRef<Path>,
        gazetteer: impl AsRef<Path>,
        positive: impl AsRef<Path>,
        negative: impl AsRef<Path>,
    ) -> ConfigResult<Self> {
        let config = Self {
            stopwords: load_word_list(stopwords.as_ref())?,
            gazetteer: load_word_list(gazetteer.as_ref())?,
            particles: DEFAULT_PARTICLES.iter().copied().collect(),
            positive: load_word_list(positive.as_ref())?,
            negative: load_word_list(negative.as_ref())?,
        };
        tracing::info!(
            stopwords = config.stopwords.len(),
            gazetteer = config.gazetteer.len(),
            positive = config.positive.len(),
            negative = config.negative.len(),
            "analysis resources loaded"
        );
        Ok(config)
    }

    /// Build a config directly from in-memory word lists.
    ///
    /// Used by tests and by embedders that manage resources themselves.
    pub fn from_parts<S: Into<String>>(
        stopwords: impl IntoIterator<Item = S>,
        gazetteer: impl IntoIterator<Item = S>,
        positive: impl IntoIterator<Item = S>,
        negative: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            stopwords: stopwords.into_iter().map(Into::into).collect(),
            gazetteer: gazetteer.into_iter().map(Into::into).collect(),
            particles: DEFAULT_PARTICLES.iter().copied().collect(),
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the particle set (defaults to [`DEFAULT_PARTICLES`]).
    pub fn with_particles(mut self, particles: impl IntoIterator<Item = char>) -> Self {
        self.particles = particles.into_iter().collect();
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Verbatim gazetteer membership; entity names are exempt from
    /// particle stripping and the short-token filter.
    pub fn is_entity(&self, word: &str) -> bool {
        self.gazetteer.contains(word)
    }

    pub fn is_particle(&self, c: char) -> bool {
        self.particles.contains(&c)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn positive_words(&self) -> impl Iterator<Item = &str> {
        self.positive.iter().map(String::as_str)
    }

    pub fn negative_words(&self) -> impl Iterator<Item = &str> {
        self.negative.iter().map(String::as_str)
    }
}

/// Read a one-token-per-line word list, skipping blank lines.
fn load_word_list(path: &Path) -> ConfigResult<FxHashSet<String>> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: FxHashSet<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    if words.is_empty() {
        return Err(ConfigError::EmptyResource {
            path: path.to_path_buf(),
        });
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_list(dir: &tempfile::TempDir, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        path
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let stop = write_list(&dir, "stop.txt", &["기자", "뉴스", ""]);
        let gaz = write_list(&dir, "gaz.txt", &["삼성전자", "LG전자"]);
        let pos = write_list(&dir, "pos.txt", &["호재"]);
        let neg = write_list(&dir, "neg.txt", &["악재"]);

        let config = AnalysisConfig::load(&stop, &gaz, &pos, &neg).unwrap();
        assert!(config.is_stopword("기자"));
        assert!(!config.is_stopword("삼성전자"));
        assert!(config.is_entity("삼성전자"));
        assert!(config.is_positive("호재"));
        assert!(config.is_negative("악재"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let gaz = write_list(&dir, "gaz.txt", &["삼성전자"]);
        let result = AnalysisConfig::load(dir.path().join("absent.txt"), &gaz, &gaz, &gaz);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_empty_resource_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let empty = write_list(&dir, "empty.txt", &["", "  "]);
        let gaz = write_list(&dir, "gaz.txt", &["삼성전자"]);
        let result = AnalysisConfig::load(&empty, &gaz, &gaz, &gaz);
        assert!(matches!(result, Err(ConfigError::EmptyResource { .. })));
    }

    #[test]
    fn test_default_particles() {
        let config = AnalysisConfig::from_parts::<String>([], [], [], []);
        assert!(config.is_particle('은'));
        assert!(config.is_particle('를'));
        assert!(!config.is_particle('전'));
    }
}
