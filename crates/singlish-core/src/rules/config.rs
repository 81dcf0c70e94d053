use std::collections::BTreeMap;

use serde::Deserialize;

use super::{RuleEntry, RuleKind};

#[derive(Deserialize)]
struct RuleConfig {
    #[serde(default)]
    vowels: BTreeMap<String, VowelSpec>,
    #[serde(default)]
    consonants: BTreeMap<String, OutputSpec>,
    #[serde(default)]
    conjuncts: BTreeMap<String, OutputSpec>,
    #[serde(default)]
    modifiers: BTreeMap<String, OutputSpec>,
}

#[derive(Deserialize)]
struct VowelSpec {
    independent: String,
    sign: String,
    #[serde(default)]
    priority: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OutputSpec {
    Plain(String),
    Weighted {
        output: String,
        #[serde(default)]
        priority: i32,
    },
}

impl OutputSpec {
    fn into_parts(self) -> (String, i32) {
        match self {
            OutputSpec::Plain(output) => (output, 0),
            OutputSpec::Weighted { output, priority } => (output, priority),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("rule table is empty")]
    Empty,
    #[error("key must be ASCII letters: {0:?}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("rule table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into rule entries.
///
/// Entries come out grouped by section (modifiers, conjuncts, consonants,
/// vowels) and sorted by pattern within a section.
pub fn parse_rules_toml(toml_str: &str) -> Result<Vec<RuleEntry>, RuleConfigError> {
    let config: RuleConfig =
        toml::from_str(toml_str).map_err(|e| RuleConfigError::Parse(e.to_string()))?;

    let mut entries = Vec::new();
    for (section, kind) in [
        (config.modifiers, RuleKind::Modifier),
        (config.conjuncts, RuleKind::Conjunct),
        (config.consonants, RuleKind::Consonant),
    ] {
        for (pattern, spec) in section {
            let (output, priority) = spec.into_parts();
            entries.push(RuleEntry {
                pattern,
                output,
                priority,
                kind: kind.clone(),
            });
        }
    }
    for (pattern, spec) in config.vowels {
        entries.push(RuleEntry {
            pattern,
            output: spec.independent,
            priority: spec.priority,
            kind: RuleKind::Vowel { sign: spec.sign },
        });
    }

    if entries.is_empty() {
        return Err(RuleConfigError::Empty);
    }

    for entry in &entries {
        // Digits are reserved: numerals always pass through untouched.
        if entry.pattern.is_empty() || !entry.pattern.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(RuleConfigError::InvalidKey(entry.pattern.clone()));
        }
        if entry.output.is_empty() {
            return Err(RuleConfigError::EmptyValue(entry.pattern.clone()));
        }
    }

    Ok(entries)
}
