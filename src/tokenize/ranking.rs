use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::index::InvertedIndex;

/// Ordering among tokens with the same verse count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Keep the order tokens were first encountered in the corpus
    #[default]
    FirstSeen,
    /// Ascending token order
    Lexical,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-seen" => Ok(TieBreak::FirstSeen),
            "lexical" => Ok(TieBreak::Lexical),
            other => Err(format!("unknown tie-break {other:?} (expected first-seen or lexical)")),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TieBreak::FirstSeen => "first-seen",
            TieBreak::Lexical => "lexical",
        })
    }
}

/// One output row: a token and the verses containing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub token: String,
    pub verse_ids: Vec<String>,
}

impl RankedEntry {
    pub fn count(&self) -> usize {
        self.verse_ids.len()
    }
}

/// Order index entries by descending verse count
pub fn rank(index: InvertedIndex, tie_break: TieBreak) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = index
        .into_iter()
        .map(|(token, ids)| RankedEntry {
            token,
            verse_ids: ids.into_iter().collect(),
        })
        .collect();

    // sort_by is stable, so FirstSeen falls out of the index's insertion order
    match tie_break {
        TieBreak::FirstSeen => entries.sort_by(|a, b| b.count().cmp(&a.count())),
        TieBreak::Lexical => entries.sort_by(|a, b| {
            b.count().cmp(&a.count()).then_with(|| a.token.cmp(&b.token))
        }),
    }
    entries
}
