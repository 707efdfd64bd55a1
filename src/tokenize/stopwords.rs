// WHY: read-only exclusion set for the inverted index
// Entries go through the corpus normalizer on load so they compare equal to
// tokens regardless of how the list is cased or accented.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use super::normalization::{normalize, Locale};
use crate::error::{Error, Result};

/// Default stopword list shipped with the binary
pub const EMBEDDED_STOPWORDS: &str = include_str!("../../data/stopwords.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StopwordFile {
    words: Vec<String>,
}

/// Tokens excluded from indexing
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// An empty set: nothing is filtered
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a `words = [...]` TOML list, normalizing entries with `locale`
    pub fn from_toml(source: &str, locale: &Locale) -> Result<Self> {
        let file: StopwordFile =
            toml::from_str(source).map_err(|e| Error::config("stopword", e.to_string()))?;
        let set = Self::from_words(file.words.iter().map(|w| normalize(w, locale)));
        debug!("Loaded {} stopwords", set.len());
        Ok(set)
    }

    pub fn embedded(locale: &Locale) -> Result<Self> {
        Self::from_toml(EMBEDDED_STOPWORDS, locale)
    }

    pub async fn read<P: AsRef<Path>>(path: P, locale: &Locale) -> Result<Self> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(path, e))?;
        Self::from_toml(&source, locale)
    }

    /// Build from already-normalized words; empty entries are ignored
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words
                .into_iter()
                .map(Into::into)
                .filter(|w: &String| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
