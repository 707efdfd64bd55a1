// WHY: typed failures at the library boundary; the binary wraps these in anyhow
// Every variant is fatal for a run: configuration errors surface before any
// record is processed, input and output errors abort before output is renamed
// into place.

use std::path::PathBuf;

use crate::modernize::Category;

/// Library result alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A substitution or stopword table could not be parsed
    #[error("invalid {table} table: {message}")]
    Config { table: &'static str, message: String },

    /// A substitution key did not compile into a word-boundary pattern
    #[error("{category} rule {index} ({key:?}) does not compile: {source}")]
    Pattern {
        category: Category,
        index: usize,
        key: String,
        #[source]
        source: Box<regex_automata::meta::BuildError>,
    },

    /// The input corpus violates the two-column record shape
    #[error("malformed CSV at line {line}: {message}")]
    Csv { line: u64, message: String },

    /// An in-memory value could not be rendered as JSON
    #[error("failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A corpus, table or output file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn config(table: &'static str, message: impl Into<String>) -> Self {
        Error::Config {
            table,
            message: message.into(),
        }
    }

    pub(crate) fn csv(line: u64, message: impl Into<String>) -> Self {
        Error::Csv {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialize(what: &'static str, source: serde_json::Error) -> Self {
        Error::Serialize { what, source }
    }
}
