// WHY: ordered, two-pass modernization over a whole corpus
// One pass applies every phrase rule, then every token rule, then errata, then
// extra. The pass runs twice so errata and extra rules can fix text that only
// became matchable after phrase/token substitutions in the first pass.

use std::borrow::Cow;
use tracing::{debug, info};

pub mod registry;
pub mod substitution;

pub use registry::{Category, PatternRegistry, RuleTable, SubstitutionRule, EMBEDDED_RULES};
pub use substitution::replace_case;

use crate::verse::VerseRecord;

/// Number of full four-category passes per verse
pub const PASSES: usize = 2;

/// Applies a borrowed registry to verse text
#[derive(Debug, Clone, Copy)]
pub struct Modernizer<'r> {
    registry: &'r PatternRegistry,
}

impl<'r> Modernizer<'r> {
    pub fn new(registry: &'r PatternRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r PatternRegistry {
        self.registry
    }

    /// Run one ordered pass of all four categories over `text`
    pub fn apply_pass(&self, text: &str) -> String {
        let mut result = text.to_owned();
        for category in Category::ORDER {
            for rule in self.registry.rules(category) {
                let replaced = match rule.apply(&result) {
                    Cow::Borrowed(_) => continue,
                    Cow::Owned(replaced) => replaced,
                };
                result = replaced;
            }
        }
        result
    }

    /// Fully modernize one text: `PASSES` ordered passes
    pub fn modernize_text(&self, text: &str) -> String {
        let mut result = self.apply_pass(text);
        for _ in 1..PASSES {
            result = self.apply_pass(&result);
        }
        result
    }

    /// Modernize one record, keeping its id (empty ids included)
    pub fn modernize_record(&self, record: VerseRecord) -> VerseRecord {
        let text = self.modernize_text(&record.text);
        VerseRecord { id: record.id, text }
    }

    /// Apply one pass across every record of the corpus
    pub fn corpus_pass<I>(&self, records: I) -> Vec<VerseRecord>
    where
        I: IntoIterator<Item = VerseRecord>,
    {
        records
            .into_iter()
            .map(|record| {
                let text = self.apply_pass(&record.text);
                VerseRecord { id: record.id, text }
            })
            .collect()
    }

    /// Modernize a whole corpus: `PASSES` corpus-wide passes, order preserved
    pub fn modernize(&self, records: Vec<VerseRecord>) -> Vec<VerseRecord> {
        self.modernize_with(records, |_, pass_input| pass_input)
    }

    /// Like [`Modernizer::modernize`], with `wrap` adapting each pass's input
    ///
    /// `wrap` receives the 1-based pass number and the records entering that
    /// pass; the binary uses it to attach a progress bar.
    pub fn modernize_with<F, I>(&self, records: Vec<VerseRecord>, mut wrap: F) -> Vec<VerseRecord>
    where
        F: FnMut(usize, std::vec::IntoIter<VerseRecord>) -> I,
        I: Iterator<Item = VerseRecord>,
    {
        info!("Modernizing {} verses with {} rules", records.len(), self.registry.len());
        let mut records = records;
        for pass in 1..=PASSES {
            records = self.corpus_pass(wrap(pass, records.into_iter()));
            debug!("Completed modernization pass {}/{}", pass, PASSES);
        }
        records
    }
}

/// Convenience wrapper over [`Modernizer::modernize`]
pub fn modernize(records: Vec<VerseRecord>, registry: &PatternRegistry) -> Vec<VerseRecord> {
    Modernizer::new(registry).modernize(records)
}
