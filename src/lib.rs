pub mod error;
pub mod modernize;
pub mod reader;
pub mod stats;
pub mod tokenize;
pub mod verse;
pub mod writer;

// Re-export main types for convenient access
pub use error::{Error, Result};
pub use verse::VerseRecord;

// Re-export the two pipelines
pub use modernize::{modernize, Category, Modernizer, PatternRegistry, RuleTable};
pub use tokenize::{tokenize_corpus, Locale, RankedEntry, StopwordSet, TieBreak, TokenIndexer, TokenizeConfig};

// Re-export I/O boundary helpers
pub use reader::{parse_verses, read_verses_async, AsyncVerseReader, ReaderConfig};
pub use writer::{format_modernized_csv, format_token_csv, write_output};
