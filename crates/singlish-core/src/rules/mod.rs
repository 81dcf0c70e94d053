//! Rule Table: romanized phoneme clusters mapped to Sinhala graphemes.
//!
//! Rules are parsed from TOML and stored in a character trie that answers
//! longest-prefix queries with priority tie-breaking.

mod config;
mod table;
mod trie;

pub use config::{parse_rules_toml, RuleConfigError};
pub use trie::{PrefixMatch, RuleTrie, TrieLookupResult};

/// Composition role of a rule's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// `output` is the independent vowel; `sign` follows a consonant.
    Vowel { sign: String },
    Consonant,
    /// Joined to the preceding bare consonant (yansaya, rakaransaya).
    Conjunct,
    /// Syllable-final mark (anusvara, visarga).
    Modifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    pub pattern: String,
    pub output: String,
    pub priority: i32,
    pub kind: RuleKind,
}

impl RuleEntry {
    pub fn is_vowel(&self) -> bool {
        matches!(self.kind, RuleKind::Vowel { .. })
    }
}

/// Returns the embedded default rule table TOML.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
