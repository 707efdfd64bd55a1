use indexmap::IndexSet;
use unicode_segmentation::UnicodeSegmentation;

use super::normalization::{normalize, Locale};
use crate::verse::VerseRecord;

/// Distinct tokens of one verse in first-occurrence order
pub type TokenSet = IndexSet<String>;

/// A verse id paired with its distinct tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseTokens {
    pub id: String,
    pub tokens: TokenSet,
}

/// Split normalized text into distinct word tokens
///
/// Segmentation follows UAX #29 word boundaries; anything the segmenter does
/// not consider a word (including retained symbols like `×`) is dropped.
/// Repeats within the text collapse onto their first occurrence.
pub fn tokenize(normalized: &str) -> TokenSet {
    normalized.unicode_words().map(str::to_owned).collect()
}

/// Normalize and tokenize one verse
pub fn tokenize_verse(record: &VerseRecord, locale: &Locale) -> VerseTokens {
    VerseTokens {
        id: record.id.clone(),
        tokens: tokenize(&normalize(&record.text, locale)),
    }
}
