// WHY: the four ordered substitution tables, compiled once and shared read-only
// Table data lives in TOML (embedded default or a user-supplied file); every
// pattern is compiled up front so a bad rule fails the run before any verse
// is touched.

use regex_automata::meta::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use super::substitution::replace_case;
use crate::error::{Error, Result};

/// Default tables shipped with the binary
pub const EMBEDDED_RULES: &str = include_str!("../../data/archaisms.toml");

/// Rule groups in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Multi-word spans; must run before single tokens fragment them
    Phrases,
    /// Single archaic words
    Tokens,
    /// Corrections for overshoot introduced by phrases and tokens
    Errata,
    /// Grammar and stylistic fixes
    Extra,
}

impl Category {
    /// Fixed application order of one modernization pass
    pub const ORDER: [Category; 4] = [
        Category::Phrases,
        Category::Tokens,
        Category::Errata,
        Category::Extra,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Phrases => "phrases",
            Category::Tokens => "tokens",
            Category::Errata => "errata",
            Category::Extra => "extra",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uncompiled rule data as it appears in a rules file
///
/// Each table is a list of `[key, replacement]` pairs kept in file order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleTable {
    #[serde(default)]
    pub phrases: Vec<(String, String)>,
    #[serde(default)]
    pub tokens: Vec<(String, String)>,
    #[serde(default)]
    pub errata: Vec<(String, String)>,
    #[serde(default)]
    pub extra: Vec<(String, String)>,
}

impl RuleTable {
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::config("substitution", e.to_string()))
    }

    /// Parse the tables compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED_RULES)
    }

    /// Read a rules file from disk
    pub async fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io(path, e))?;
        Self::from_toml(&source)
    }

    pub fn rules(&self, category: Category) -> &[(String, String)] {
        match category {
            Category::Phrases => &self.phrases,
            Category::Tokens => &self.tokens,
            Category::Errata => &self.errata,
            Category::Extra => &self.extra,
        }
    }

    /// Append a rule to one table, keeping insertion order
    pub fn push(&mut self, category: Category, key: impl Into<String>, replacement: impl Into<String>) -> &mut Self {
        let entry = (key.into(), replacement.into());
        match category {
            Category::Phrases => self.phrases.push(entry),
            Category::Tokens => self.tokens.push(entry),
            Category::Errata => self.errata.push(entry),
            Category::Extra => self.extra.push(entry),
        }
        self
    }
}

/// One compiled (matcher, replacement) pair
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    key: String,
    pattern: Regex,
    replacement: String,
}

impl SubstitutionRule {
    /// Compile `key` into a case-insensitive, multiline, word-bounded matcher
    ///
    /// `key` is a pattern fragment; plain words and phrases match literally.
    pub fn new(category: Category, index: usize, key: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"(?im)\b(?:{key})\b")).map_err(|source| Error::Pattern {
            category,
            index,
            key: key.to_string(),
            source: Box::new(source),
        })?;
        Ok(Self {
            key: key.to_string(),
            pattern,
            replacement: replacement.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        replace_case(text, &self.pattern, &self.replacement)
    }
}

/// Compiled substitution tables, immutable once built
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    categories: [Vec<SubstitutionRule>; 4],
}

impl PatternRegistry {
    /// Compile every rule of `table`, preserving per-table order
    pub fn compile(table: &RuleTable) -> Result<Self> {
        let mut registry = Self::default();
        for category in Category::ORDER {
            let rules = table
                .rules(category)
                .iter()
                .enumerate()
                .map(|(index, (key, replacement))| SubstitutionRule::new(category, index, key, replacement))
                .collect::<Result<Vec<_>>>()?;
            debug!("Compiled {} {} rules", rules.len(), category);
            registry.categories[category.slot()] = rules;
        }
        info!("Pattern registry ready: {} rules", registry.len());
        Ok(registry)
    }

    /// Registry built from the embedded default tables
    pub fn embedded() -> Result<Self> {
        Self::compile(&RuleTable::embedded()?)
    }

    /// Registry built from a rules file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::compile(&RuleTable::read(path).await?)
    }

    pub fn rules(&self, category: Category) -> &[SubstitutionRule] {
        &self.categories[category.slot()]
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_compile() {
        let registry = PatternRegistry::embedded().expect("embedded rules should compile");
        for category in Category::ORDER {
            assert!(!registry.rules(category).is_empty(), "{category} table should not be empty");
        }
    }

    #[test]
    fn test_compile_preserves_table_order() {
        let table = RuleTable::from_toml(
            r#"
            tokens = [["zeta", "z"], ["alpha", "a"], ["mu", "m"]]
            "#,
        )
        .unwrap();
        let registry = PatternRegistry::compile(&table).unwrap();
        let keys: Vec<_> = registry.rules(Category::Tokens).iter().map(|r| r.key()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mu"]);
        assert!(registry.rules(Category::Phrases).is_empty());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_bad_pattern_is_config_error() {
        let mut table = RuleTable::default();
        table.push(Category::Errata, "fine", "ok").push(Category::Errata, "(unclosed", "x");
        let err = PatternRegistry::compile(&table).unwrap_err();
        match err {
            Error::Pattern { category, index, key, .. } => {
                assert_eq!(category, Category::Errata);
                assert_eq!(index, 1);
                assert_eq!(key, "(unclosed");
            }
            other => panic!("expected pattern error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_table_rejected() {
        let err = RuleTable::from_toml(r#"phrase = [["a", "b"]]"#).unwrap_err();
        assert!(matches!(err, Error::Config { table: "substitution", .. }));
    }

    #[test]
    fn test_malformed_pair_rejected() {
        assert!(RuleTable::from_toml(r#"tokens = [["only-key"]]"#).is_err());
    }

    #[test]
    fn test_rule_apply() {
        let rule = SubstitutionRule::new(Category::Tokens, 0, "hath", "has").unwrap();
        assert_eq!(rule.apply("He hath spoken"), "He has spoken");
        assert_eq!(rule.replacement(), "has");
    }

    #[test]
    fn test_category_order_and_names() {
        let names: Vec<_> = Category::ORDER.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["phrases", "tokens", "errata", "extra"]);
    }
}
