//! Output Composer: reassembles per-token segments into the result string.

use serde::Serialize;

/// The rendering of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    /// Sinhala produced by the lexicon, suffix handler or matcher.
    Translated(String),
    /// Emitted exactly as typed.
    PassThrough(String),
    /// Whitespace or punctuation, copied unchanged.
    Literal(String),
    /// Renders as nothing (symbols, run-on words).
    Dropped,
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Translated(s) | Segment::PassThrough(s) | Segment::Literal(s) => s,
            Segment::Dropped => "",
        }
    }
}

/// Concatenate segment texts in order. No separators are added.
pub fn compose(segments: &[Segment]) -> String {
    let len = segments.iter().map(|s| s.text().len()).sum();
    let mut out = String::with_capacity(len);
    for segment in segments {
        out.push_str(segment.text());
    }
    out
}
