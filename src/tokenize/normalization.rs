// WHY: canonical form every verse passes through before segmentation
// Stages run in a fixed order: NFD, strip U+0300..=U+036F, locale case folding,
// drop everything but ASCII alphanumerics, whitespace and U+00C0..=U+017F,
// collapse whitespace. The retained Latin-1/Latin Extended-A range also keeps
// non-letters such as `×` and `÷`; the tokenizer drops those later.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::UnicodeNormalization;

/// Locale applied when none is configured
pub const DEFAULT_LOCALE: &str = "en-gb";

/// Lowercasing capability, swappable independently of the pipeline
pub trait CaseFolder {
    fn fold(&self, text: &str) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Folding {
    Default,
    /// Dotted and dotless i are distinct letters
    Turkic,
}

/// A locale tag and the case-folding rules it selects
///
/// Only the primary language subtag matters: `tr` and `az` fold `I` to `ı`
/// and `İ` to `i`; every other language uses Unicode default lowercasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    folding: Folding,
}

impl Locale {
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase().replace('_', "-");
        let folding = match tag.split('-').next().unwrap_or_default() {
            "tr" | "az" => Folding::Turkic,
            _ => Folding::Default,
        };
        Self { tag, folding }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::parse(DEFAULT_LOCALE)
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl CaseFolder for Locale {
    fn fold(&self, text: &str) -> String {
        match self.folding {
            Folding::Default => text.to_lowercase(),
            Folding::Turkic => text
                .chars()
                .map(|c| match c {
                    'I' => 'ı',
                    'İ' => 'i',
                    other => other,
                })
                .collect::<String>()
                .to_lowercase(),
        }
    }
}

/// Combining diacritical marks removed after decomposition
fn is_stripped_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Whitespace class used for word separation
///
/// Unicode `White_Space` minus NEL (U+0085), plus ZERO WIDTH NO-BREAK SPACE
/// (U+FEFF). NEL is dropped as a symbol; a stray U+FEFF separates words.
fn is_separator(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Characters that survive symbol removal (whitespace handled separately)
fn is_retained(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('\u{00C0}'..='\u{017F}').contains(&c)
}

/// Normalize `text` using the case-folding rules of `locale`
pub fn normalize(text: &str, locale: &Locale) -> String {
    normalize_with(text, locale)
}

/// Normalize `text` with an arbitrary case folder
pub fn normalize_with<F: CaseFolder + ?Sized>(text: &str, folder: &F) -> String {
    let stripped: String = text.nfd().filter(|c| !is_stripped_mark(*c)).collect();
    let folded = folder.fold(&stripped);

    let mut result = String::with_capacity(folded.len());
    let mut pending_space = false;
    for ch in folded.chars() {
        if is_separator(ch) {
            pending_space = true;
        } else if is_retained(ch) {
            if pending_space && !result.is_empty() {
                result.push(' ');
            }
            pending_space = false;
            result.push(ch);
        }
    }
    result
}
