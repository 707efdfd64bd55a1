// WHY: verse corpus to frequency-ranked inverted index
// normalize -> tokenize -> dedupe per verse -> drop stopwords -> aggregate
// ids per token -> rank by verse count. The whole corpus is materialized
// before indexing starts.

use tracing::{debug, info};

pub mod index;
pub mod normalization;
pub mod ranking;
pub mod stopwords;
pub mod tokenizer;

pub use index::{index, InvertedIndex};
pub use normalization::{normalize, normalize_with, CaseFolder, Locale, DEFAULT_LOCALE};
pub use ranking::{rank, RankedEntry, TieBreak};
pub use stopwords::{StopwordSet, EMBEDDED_STOPWORDS};
pub use tokenizer::{tokenize, tokenize_verse, TokenSet, VerseTokens};

use crate::verse::VerseRecord;

/// Settings for one tokenization run
#[derive(Debug, Clone, Default)]
pub struct TokenizeConfig {
    pub locale: Locale,
    pub tie_break: TieBreak,
}

/// Runs the tokenization pipeline against a borrowed stopword set
#[derive(Debug, Clone)]
pub struct TokenIndexer<'s> {
    config: TokenizeConfig,
    stopwords: &'s StopwordSet,
}

impl<'s> TokenIndexer<'s> {
    pub fn new(config: TokenizeConfig, stopwords: &'s StopwordSet) -> Self {
        Self { config, stopwords }
    }

    pub fn config(&self) -> &TokenizeConfig {
        &self.config
    }

    pub fn tokenize_verse(&self, record: &VerseRecord) -> VerseTokens {
        tokenize_verse(record, &self.config.locale)
    }

    /// Index already-tokenized verses and rank the result
    pub fn index_and_rank(&self, verses: &[VerseTokens]) -> Vec<RankedEntry> {
        let index = index(verses, self.stopwords);
        debug!("Indexed {} distinct tokens", index.len());
        rank(index, self.config.tie_break)
    }

    /// Full pipeline over a corpus
    pub fn run(&self, records: &[VerseRecord]) -> Vec<RankedEntry> {
        info!(
            "Tokenizing {} verses (locale {}, {} stopwords)",
            records.len(),
            self.config.locale,
            self.stopwords.len()
        );
        let verses: Vec<VerseTokens> = records.iter().map(|r| self.tokenize_verse(r)).collect();
        self.index_and_rank(&verses)
    }
}

/// Convenience wrapper over [`TokenIndexer::run`]
pub fn tokenize_corpus(
    records: &[VerseRecord],
    config: TokenizeConfig,
    stopwords: &StopwordSet,
) -> Vec<RankedEntry> {
    TokenIndexer::new(config, stopwords).run(records)
}
