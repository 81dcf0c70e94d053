//! Transliteration Matcher: longest-prefix segmentation of a romanized word
//! into rule units, with backtracking on dead ends.
//!
//! A word either segments completely or not at all; callers never see a
//! partial result.

mod render;

use std::collections::HashSet;

use tracing::debug;

use crate::rules::{RuleEntry, RuleKind, RuleTrie};

pub use render::render;

/// One matched rule and the span of the word it consumed (in characters).
#[derive(Debug, Clone, Copy)]
pub struct Unit<'a> {
    pub start: usize,
    pub len: usize,
    pub entry: &'a RuleEntry,
}

/// What the previous unit leaves behind, which decides whether conjuncts and
/// modifiers may attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Context {
    Start,
    /// Consonant (or conjunct cluster) still waiting for its vowel.
    Bare,
    Syllable,
    Modifier,
}

impl Context {
    fn advance(self, kind: &RuleKind) -> Option<Context> {
        match kind {
            RuleKind::Consonant => Some(Context::Bare),
            RuleKind::Vowel { .. } => Some(Context::Syllable),
            RuleKind::Conjunct => (self == Context::Bare).then_some(Context::Bare),
            RuleKind::Modifier => {
                matches!(self, Context::Bare | Context::Syllable).then_some(Context::Modifier)
            }
        }
    }
}

pub struct Matcher<'a> {
    rules: &'a RuleTrie,
}

impl<'a> Matcher<'a> {
    pub fn new(rules: &'a RuleTrie) -> Self {
        Self { rules }
    }

    /// Segment `word` into rule units covering every character.
    ///
    /// At each position the longest pattern is tried first; when the rest of
    /// the word cannot be completed the next shorter pattern is tried.
    /// Returns `None` if no complete segmentation exists.
    pub fn segment(&self, word: &str) -> Option<Vec<Unit<'a>>> {
        let chars: Vec<char> = word.chars().collect();
        let first = *chars.first()?;
        if !self.rules.can_start(first) {
            return None;
        }
        let mut units = Vec::with_capacity(chars.len());
        let mut failed = HashSet::new();
        if self.extend(&chars, 0, Context::Start, &mut failed, &mut units) {
            Some(units)
        } else {
            None
        }
    }

    /// Transliterate a whole word, or `None` if any part of it is unmatched.
    pub fn transliterate(&self, word: &str) -> Option<String> {
        match self.segment(word) {
            Some(units) => Some(render(&units)),
            None => {
                debug!(word, "no complete segmentation");
                None
            }
        }
    }

    fn extend(
        &self,
        chars: &[char],
        pos: usize,
        ctx: Context,
        failed: &mut HashSet<(usize, Context)>,
        units: &mut Vec<Unit<'a>>,
    ) -> bool {
        if pos == chars.len() {
            return true;
        }
        if failed.contains(&(pos, ctx)) {
            return false;
        }
        for m in self.rules.prefix_matches(&chars[pos..]) {
            let Some(next) = ctx.advance(&m.entry.kind) else {
                continue;
            };
            units.push(Unit {
                start: pos,
                len: m.len,
                entry: m.entry,
            });
            if self.extend(chars, pos + m.len, next, failed, units) {
                return true;
            }
            units.pop();
        }
        failed.insert((pos, ctx));
        false
    }
}
