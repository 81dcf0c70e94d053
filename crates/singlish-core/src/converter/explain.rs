use std::fmt;

use serde::Serialize;

use crate::composer::{compose, Segment};
use crate::morphology::SuffixKind;
use crate::passthrough::PassReason;
use crate::tokenizer::TokenKind;

use super::{finish_output, Engine};

/// How a token reached its segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// Whitespace or punctuation.
    Literal,
    /// Whole-word lexicon entry.
    Lexicon,
    Morphology {
        root: String,
        suffixes: Vec<SuffixKind>,
    },
    /// Rule table segmentation.
    Phonetic,
    PassThrough {
        reason: PassReason,
    },
}

/// Diagnostic trace of one conversion.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub output: String,
    pub tokens: Vec<ExplainToken>,
}

#[derive(Debug, Serialize)]
pub struct ExplainToken {
    pub text: String,
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub segment: Segment,
    pub route: Route,
}

pub(super) fn explain(engine: &Engine<'_>, input: &str) -> ExplainResult {
    let routed = engine.route_tokens(input);
    let segments: Vec<Segment> = routed.iter().map(|(_, s, _)| s.clone()).collect();
    let output = finish_output(compose(&segments));

    ExplainResult {
        input: input.to_string(),
        output,
        tokens: routed
            .into_iter()
            .map(|(token, segment, route)| ExplainToken {
                text: token.text.to_string(),
                kind: token.kind,
                start: token.start,
                end: token.end,
                segment,
                route,
            })
            .collect(),
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Literal => f.write_str("literal"),
            Route::Lexicon => f.write_str("lexicon"),
            Route::Morphology { root, suffixes } => {
                write!(f, "morphology root={root}")?;
                for s in suffixes {
                    write!(f, " +{s:?}")?;
                }
                Ok(())
            }
            Route::Phonetic => f.write_str("phonetic"),
            Route::PassThrough { reason } => write!(f, "pass-through ({reason:?})"),
        }
    }
}

/// Format an ExplainResult as human-readable text.
///
/// Whitespace tokens are left out; everything else gets one aligned row.
pub fn format_text(result: &ExplainResult) -> String {
    use unicode_width::UnicodeWidthStr;
    const PAD: usize = 16;

    fn pad(s: &str) -> String {
        let width = UnicodeWidthStr::width(s);
        if width < PAD {
            format!("{s}{}", " ".repeat(PAD - width))
        } else {
            s.to_string()
        }
    }

    let mut out = String::new();
    out.push_str(&format!("=== \"{}\" ===\n", result.input));
    out.push_str(&format!("  -> {}\n", result.output));

    let rows: Vec<&ExplainToken> = result
        .tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .collect();
    if rows.is_empty() {
        out.push_str("\nNothing to convert.\n");
        return out;
    }

    out.push('\n');
    for t in rows {
        let rendered = match &t.segment {
            Segment::Dropped => "(dropped)".to_string(),
            other => other.text().to_string(),
        };
        out.push_str(&format!(
            "  [{:>3},{:>3}] {} {} {}\n",
            t.start,
            t.end,
            pad(&t.text),
            pad(&rendered),
            t.route,
        ));
    }
    out
}
