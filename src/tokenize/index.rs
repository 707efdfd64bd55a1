use indexmap::{IndexMap, IndexSet};

use super::stopwords::StopwordSet;
use super::tokenizer::VerseTokens;

/// Token to the ids of the verses containing it
///
/// Tokens keep first-seen order; each token's ids keep first-seen order and
/// hold every verse id at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    entries: IndexMap<String, IndexSet<String>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one verse into the index, skipping stopwords
    pub fn add_verse<'t, I>(&mut self, verse_id: &str, tokens: I, stopwords: &StopwordSet)
    where
        I: IntoIterator<Item = &'t str>,
    {
        for token in tokens {
            if stopwords.contains(token) {
                continue;
            }
            let ids = self.entries.entry(token.to_owned()).or_default();
            // Already-present ids keep their first-seen position
            if !ids.contains(verse_id) {
                ids.insert(verse_id.to_owned());
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<&IndexSet<String>> {
        self.entries.get(token)
    }

    /// Number of distinct verses containing `token`
    pub fn verse_count(&self, token: &str) -> usize {
        self.get(token).map_or(0, IndexSet::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IndexSet<String>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for InvertedIndex {
    type Item = (String, IndexSet<String>);
    type IntoIter = indexmap::map::IntoIter<String, IndexSet<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build the index over a whole tokenized corpus in one pass
pub fn index<'v, I>(verses: I, stopwords: &StopwordSet) -> InvertedIndex
where
    I: IntoIterator<Item = &'v VerseTokens>,
{
    let mut index = InvertedIndex::new();
    for verse in verses {
        index.add_verse(&verse.id, verse.tokens.iter().map(String::as_str), stopwords);
    }
    index
}
