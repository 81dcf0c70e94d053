use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_LEXICON_TOML: &str = include_str!("default_lexicon.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

#[derive(Deserialize)]
struct LexiconConfig {
    #[serde(default)]
    words: BTreeMap<String, String>,
    #[serde(default)]
    roots: BTreeMap<String, String>,
    #[serde(default)]
    foreign: ForeignSection,
}

#[derive(Deserialize, Default)]
struct ForeignSection {
    #[serde(default)]
    terms: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("key must be ASCII letters: {0:?}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

/// Whole-word renderings, verb roots and foreign terms.
#[derive(Debug)]
pub struct Lexicon {
    words: HashMap<String, String>,
    roots: HashMap<String, String>,
    foreign: HashSet<String>,
    longest_root: usize,
}

impl Lexicon {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LexiconError> {
        Lexicon::from_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LexiconError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_LEXICON_TOML);
            Lexicon::from_toml(toml_str).expect("lexicon TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, LexiconError> {
        let config: LexiconConfig =
            toml::from_str(toml_str).map_err(|e| LexiconError::Parse(e.to_string()))?;

        for (key, value) in config.words.iter().chain(config.roots.iter()) {
            check_key(key)?;
            if value.is_empty() {
                return Err(LexiconError::EmptyValue(key.clone()));
            }
        }
        for term in &config.foreign.terms {
            if term.is_empty() {
                return Err(LexiconError::InvalidKey(term.clone()));
            }
        }

        let longest_root = config.roots.keys().map(|k| k.len()).max().unwrap_or(0);
        Ok(Lexicon {
            words: config.words.into_iter().collect(),
            roots: config.roots.into_iter().collect(),
            foreign: config
                .foreign
                .terms
                .into_iter()
                .map(|t| t.to_lowercase())
                .collect(),
            longest_root,
        })
    }

    /// Whole-word rendering, exact match only.
    pub fn word(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    /// Rendering of a verb root, exact match only.
    pub fn root(&self, root: &str) -> Option<&str> {
        self.roots.get(root).map(String::as_str)
    }

    /// Length in bytes of the longest root.
    pub fn longest_root(&self) -> usize {
        self.longest_root
    }

    pub fn is_foreign(&self, word: &str) -> bool {
        self.foreign.contains(&word.to_lowercase())
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn foreign_count(&self) -> usize {
        self.foreign.len()
    }
}

/// Returns the embedded default lexicon TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_LEXICON_TOML
}

fn check_key(key: &str) -> Result<(), LexiconError> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(LexiconError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let lex = Lexicon::from_toml(DEFAULT_LEXICON_TOML).unwrap();
        assert!(lex.word_count() >= 10);
        assert!(lex.root_count() >= 15);
        assert!(lex.foreign_count() >= 50);
        assert_eq!(lex.longest_root(), "kiyava".len());
    }

    #[test]
    fn test_word_lookup() {
        let lex = Lexicon::global();
        assert_eq!(lex.word("machan"), Some("මචං"));
        assert_eq!(lex.word("Machan"), None);
        assert_eq!(lex.word("MACHAN"), None);
        assert_eq!(lex.word("gedhara"), None);
    }

    #[test]
    fn test_word_lookup_keeps_inner_capitals() {
        let lex = Lexicon::global();
        assert_eq!(lex.word("karuNaakara"), Some("කරුණාකර"));
        assert_eq!(lex.word("karunaakara"), None);
    }

    #[test]
    fn test_root_lookup() {
        let lex = Lexicon::global();
        assert_eq!(lex.root("ya"), Some("ය"));
        assert_eq!(lex.root("kara"), Some("කර"));
        assert_eq!(lex.root("Kara"), None);
    }

    #[test]
    fn test_foreign_case_insensitive() {
        let lex = Lexicon::global();
        assert!(lex.is_foreign("Zoom"));
        assert!(lex.is_foreign("MEETING"));
        assert!(lex.is_foreign("school"));
        assert!(!lex.is_foreign("gedhara"));
    }

    #[test]
    fn empty_toml_is_valid() {
        let lex = Lexicon::from_toml("").unwrap();
        assert_eq!(lex.word_count(), 0);
        assert_eq!(lex.longest_root(), 0);
    }

    #[test]
    fn error_invalid_key() {
        let err = Lexicon::from_toml("[roots]\n\"ya1\" = \"ය\"\n").unwrap_err();
        assert!(matches!(err, LexiconError::InvalidKey(_)));
    }

    #[test]
    fn error_empty_value() {
        let err = Lexicon::from_toml("[words]\nmama = \"\"\n").unwrap_err();
        assert!(matches!(err, LexiconError::EmptyValue(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = Lexicon::from_toml("[words\n").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }
}
