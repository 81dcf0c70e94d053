//! Conversion pipeline: tokenize, route each word through the lexicon, the
//! suffix handler and the phonetic matcher, then compose.
//!
//! Each word is resolved completely before anything is committed for it, so
//! an unmatched word is passed through whole rather than half-translated.

mod explain;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::composer::{compose, Segment};
use crate::matcher::Matcher;
use crate::morphology::{Lexicon, SuffixHandler};
use crate::passthrough::{is_inert, PassThroughDetector};
use crate::rules::RuleTrie;
use crate::settings::{settings, Settings};
use crate::tokenizer::{tokenize, Token, TokenKind};

pub use explain::{format_text, ExplainResult, ExplainToken, Route};

/// The conversion engine over a rule table, lexicon and settings.
///
/// Holds only shared references to immutable data, so it is `Copy` and can
/// be used from any number of threads.
#[derive(Clone, Copy)]
pub struct Engine<'a> {
    rules: &'a RuleTrie,
    lexicon: &'a Lexicon,
    settings: &'a Settings,
}

impl Engine<'static> {
    /// Engine over the global rule table, lexicon and settings.
    pub fn global() -> Self {
        Self::new(RuleTrie::global(), Lexicon::global(), settings())
    }
}

impl<'a> Engine<'a> {
    pub fn new(rules: &'a RuleTrie, lexicon: &'a Lexicon, settings: &'a Settings) -> Self {
        Self {
            rules,
            lexicon,
            settings,
        }
    }

    pub fn settings(&self) -> &'a Settings {
        self.settings
    }

    /// Convert Singlish text to Sinhala.
    ///
    /// Total over all input: never fails. Output that would consist only of
    /// whitespace is returned as the empty string.
    pub fn convert(&self, input: &str) -> String {
        finish_output(compose(&self.convert_segments(input)))
    }

    /// One segment per token, in input order. Empty for inert input.
    pub fn convert_segments(&self, input: &str) -> Vec<Segment> {
        self.route_tokens(input)
            .into_iter()
            .map(|(_, segment, _)| segment)
            .collect()
    }

    /// Full per-token trace of a conversion.
    pub fn explain(&self, input: &str) -> ExplainResult {
        explain::explain(self, input)
    }

    fn route_tokens<'i>(&self, input: &'i str) -> Vec<(Token<'i>, Segment, Route)> {
        let _span = debug_span!("convert", chars = input.chars().count()).entered();
        if is_inert(input) {
            debug!("inert input, nothing to convert");
            return Vec::new();
        }

        let detector = PassThroughDetector::new(self.lexicon, &self.settings.engine);
        let routed: Vec<_> = tokenize(input)
            .into_iter()
            .map(|token| {
                let (segment, route) = self.route(&detector, &token);
                (token, segment, route)
            })
            .collect();
        debug!(tokens = routed.len());
        routed
    }

    fn route(&self, detector: &PassThroughDetector<'_>, token: &Token<'_>) -> (Segment, Route) {
        if let Some((segment, reason)) = detector.precheck(token) {
            return (segment, Route::PassThrough { reason });
        }
        match token.kind {
            TokenKind::Word => self.route_word(detector, token.text),
            _ => (Segment::Literal(token.text.to_string()), Route::Literal),
        }
    }

    fn route_word(&self, detector: &PassThroughDetector<'_>, word: &str) -> (Segment, Route) {
        let _span = debug_span!("word", word).entered();

        // Every route sees the same spelling; only pass-through keeps the
        // word as typed.
        let folded = sentence_case_fold(word);
        let key = folded.as_deref().unwrap_or(word);

        if let Some(sinhala) = self.lexicon.word(key) {
            return (Segment::Translated(sinhala.to_string()), Route::Lexicon);
        }

        let suffixes = SuffixHandler::new(self.lexicon, self.settings.engine.max_suffix_chain);
        if let Some(analysis) = suffixes.analyze(key) {
            return (
                Segment::Translated(analysis.rendering),
                Route::Morphology {
                    root: analysis.root,
                    suffixes: analysis.suffixes,
                },
            );
        }

        if let Some(sinhala) = Matcher::new(self.rules).transliterate(key) {
            return (Segment::Translated(sinhala), Route::Phonetic);
        }

        let (segment, reason) = detector.unmatched(word);
        debug!(?reason, "word passed through");
        (segment, Route::PassThrough { reason })
    }
}

/// Output that is nothing but whitespace is no output.
fn finish_output(composed: String) -> String {
    if composed.trim().is_empty() {
        String::new()
    } else {
        composed
    }
}

/// Lower a leading capital when the rest of the word is lowercase
/// ("Mama" → "mama"), so that sentence-initial capitals do not select
/// retroflex consonants. Words with inner capitals are left alone.
fn sentence_case_fold(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let first = chars.next()?;
    if !first.is_ascii_uppercase() || chars.any(|c| c.is_ascii_uppercase()) {
        return None;
    }
    let mut folded = String::with_capacity(word.len());
    folded.push(first.to_ascii_lowercase());
    folded.push_str(&word[first.len_utf8()..]);
    Some(folded)
}

/// Convert with the global engine.
pub fn convert(input: &str) -> String {
    Engine::global().convert(input)
}

/// Segments from the global engine.
pub fn convert_segments(input: &str) -> Vec<Segment> {
    Engine::global().convert_segments(input)
}
