//! Morphological Suffix Handler.
//!
//! Splits a word into a lexicon root and a chain of tense, aspect and
//! negation suffixes from a closed set. Each suffix renders to its standard
//! Sinhala spelling whichever colloquial romanization was typed, so
//! "yanawa", "yanava" and "yanavaa" all become යනවා.

mod lexicon;

use serde::Serialize;
use tracing::debug;

pub use lexicon::{default_toml, Lexicon, LexiconError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuffixKind {
    HabitualPresent,
    SimplePast,
    Perfective,
    Future,
    NegativeContinuous,
    Imperative,
    Conditional,
    Interrogative,
}

struct SuffixRule {
    kind: SuffixKind,
    variants: &'static [&'static str],
    sinhala: &'static str,
}

const SUFFIXES: &[SuffixRule] = &[
    SuffixRule {
        kind: SuffixKind::HabitualPresent,
        variants: &["navaa", "nawaa", "nava", "nawa"],
        sinhala: "නවා",
    },
    SuffixRule {
        kind: SuffixKind::HabitualPresent,
        variants: &["nnavaa", "nnawaa", "nnava", "nnawa"],
        sinhala: "න්නවා",
    },
    SuffixRule {
        kind: SuffixKind::SimplePast,
        variants: &["yaa"],
        sinhala: "යා",
    },
    SuffixRule {
        kind: SuffixKind::Perfective,
        variants: &["laa"],
        sinhala: "ලා",
    },
    SuffixRule {
        kind: SuffixKind::Future,
        variants: &["nnam"],
        sinhala: "න්නම්",
    },
    SuffixRule {
        kind: SuffixKind::NegativeContinuous,
        variants: &["nnee", "nne"],
        sinhala: "න්නේ",
    },
    SuffixRule {
        kind: SuffixKind::Imperative,
        variants: &["nna"],
        sinhala: "න්න",
    },
    SuffixRule {
        kind: SuffixKind::Conditional,
        variants: &["nam"],
        sinhala: "නම්",
    },
    SuffixRule {
        kind: SuffixKind::Interrogative,
        variants: &["dha"],
        sinhala: "ද",
    },
];

/// A word resolved as root + suffixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub root: String,
    pub suffixes: Vec<SuffixKind>,
    pub rendering: String,
}

pub struct SuffixHandler<'a> {
    lexicon: &'a Lexicon,
    max_chain: usize,
}

impl<'a> SuffixHandler<'a> {
    pub fn new(lexicon: &'a Lexicon, max_chain: usize) -> Self {
        Self { lexicon, max_chain }
    }

    /// Analyze `word` as root + suffix chain.
    ///
    /// Roots are tried longest first. A root whose tail does not parse
    /// completely is discarded. Returns `None` when no root leaves a fully
    /// parsed tail; bare roots without a suffix are not analyses.
    pub fn analyze(&self, word: &str) -> Option<Analysis> {
        if !word.is_ascii() {
            return None;
        }
        let max_root = self.lexicon.longest_root().min(word.len().saturating_sub(1));
        for root_len in (1..=max_root).rev() {
            let (root, tail) = word.split_at(root_len);
            let Some(root_sinhala) = self.lexicon.root(root) else {
                continue;
            };
            let mut chain = Vec::new();
            if !parse_chain(tail, self.max_chain, &mut chain) {
                debug!(root, tail, "suffix tail unmatched, analysis discarded");
                continue;
            }
            let mut rendering = root_sinhala.to_string();
            for rule in &chain {
                rendering.push_str(rule.sinhala);
            }
            return Some(Analysis {
                root: root.to_string(),
                suffixes: chain.iter().map(|r| r.kind).collect(),
                rendering,
            });
        }
        None
    }
}

/// Parse `tail` completely as at most `remaining` suffixes, longest variant
/// first, backtracking to shorter variants on failure.
fn parse_chain(tail: &str, remaining: usize, chain: &mut Vec<&'static SuffixRule>) -> bool {
    if tail.is_empty() {
        return !chain.is_empty();
    }
    if remaining == 0 {
        return false;
    }
    let mut candidates: Vec<(usize, &'static SuffixRule)> = SUFFIXES
        .iter()
        .flat_map(|rule| rule.variants.iter().map(move |v| (v.len(), rule, *v)))
        .filter(|(_, _, v)| tail.starts_with(v))
        .map(|(len, rule, _)| (len, rule))
        .collect();
    candidates.sort_by(|a, b| b.0.cmp(&a.0));

    for (len, rule) in candidates {
        chain.push(rule);
        if parse_chain(&tail[len..], remaining - 1, chain) {
            return true;
        }
        chain.pop();
    }
    false
}
