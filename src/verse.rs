use serde::{Deserialize, Serialize};

/// One identified unit of prose: the atomic record both pipelines consume
///
/// An empty `id` marks a record that is carried through transformation but
/// dropped when modernized output is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub id: String,
    pub text: String,
}

impl VerseRecord {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Whether this record survives serialization
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

impl<I: Into<String>, T: Into<String>> From<(I, T)> for VerseRecord {
    fn from((id, text): (I, T)) -> Self {
        Self::new(id, text)
    }
}
