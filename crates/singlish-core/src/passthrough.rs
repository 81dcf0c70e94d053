//! Mixed-Language Pass-Through Detector.
//!
//! Decides which tokens are emitted as typed (foreign terms, names, other
//! scripts, numerals), which vanish (symbol runs, run-on words), and which
//! go on to transliteration.

use serde::Serialize;

use crate::composer::Segment;
use crate::morphology::Lexicon;
use crate::settings::{EngineSettings, NumeralPolicy};
use crate::tokenizer::{Token, TokenKind};
use crate::unicode::is_word_char;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassReason {
    /// Listed in the foreign-term lexicon.
    Foreign,
    /// Contains letters outside ASCII (Sinhala, accented Latin, other scripts).
    NativeScript,
    /// ASCII letters mixed with digits ("mp3", "4G").
    Alphanumeric,
    /// No complete transliteration exists.
    Unmatched,
    /// Longer than any plausible word; treated as run-on input.
    Overlong,
    Numeral,
    Symbol,
}

/// True if the input has nothing to convert: empty, whitespace, digits or
/// symbols only.
pub fn is_inert(input: &str) -> bool {
    !input.chars().any(is_word_char)
}

pub struct PassThroughDetector<'a> {
    lexicon: &'a Lexicon,
    settings: &'a EngineSettings,
}

impl<'a> PassThroughDetector<'a> {
    pub fn new(lexicon: &'a Lexicon, settings: &'a EngineSettings) -> Self {
        Self { lexicon, settings }
    }

    /// Classify a token before transliteration.
    ///
    /// Returns `None` for Latin words that should be transliterated, and for
    /// whitespace and punctuation, which the composer keeps as literals.
    pub fn precheck(&self, token: &Token<'_>) -> Option<(Segment, PassReason)> {
        match token.kind {
            TokenKind::Whitespace | TokenKind::Punctuation => None,
            TokenKind::Symbol => Some((Segment::Dropped, PassReason::Symbol)),
            TokenKind::Number => Some((self.numeral(token.text), PassReason::Numeral)),
            TokenKind::Word => self.precheck_word(token),
        }
    }

    fn precheck_word(&self, token: &Token<'_>) -> Option<(Segment, PassReason)> {
        if !token.is_latin_word() {
            let reason = if token.text.is_ascii() {
                PassReason::Alphanumeric
            } else {
                PassReason::NativeScript
            };
            return Some((Segment::PassThrough(token.text.to_string()), reason));
        }
        if token.text.chars().count() > self.settings.max_word_chars {
            return Some((Segment::Dropped, PassReason::Overlong));
        }
        if self.lexicon.is_foreign(token.text) {
            return Some((
                Segment::PassThrough(token.text.to_string()),
                PassReason::Foreign,
            ));
        }
        None
    }

    fn numeral(&self, text: &str) -> Segment {
        match self.settings.numerals {
            NumeralPolicy::Verbatim => Segment::PassThrough(text.to_string()),
            NumeralPolicy::Drop => Segment::Dropped,
        }
    }

    /// Segment for a word no transliteration route could resolve: emitted as
    /// typed, casing intact.
    pub fn unmatched(&self, word: &str) -> (Segment, PassReason) {
        (Segment::PassThrough(word.to_string()), PassReason::Unmatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::settings;
    use crate::tokenizer::tokenize;

    fn detector() -> PassThroughDetector<'static> {
        PassThroughDetector::new(Lexicon::global(), &settings().engine)
    }

    fn precheck(input: &str) -> Option<(Segment, PassReason)> {
        let tokens = tokenize(input);
        assert_eq!(tokens.len(), 1, "expected a single token for {input:?}");
        detector().precheck(&tokens[0])
    }

    #[test]
    fn test_inert_inputs() {
        assert!(is_inert(""));
        assert!(is_inert("     "));
        assert!(is_inert("@@@###$$$"));
        assert!(is_inert("1234567890"));
        assert!(is_inert(" 12, 34! "));
        assert!(!is_inert("mama"));
        assert!(!is_inert("මම"));
        assert!(!is_inert("1 a"));
    }

    #[test]
    fn test_foreign_term_keeps_case() {
        assert_eq!(
            precheck("Zoom"),
            Some((Segment::PassThrough("Zoom".into()), PassReason::Foreign))
        );
        assert_eq!(
            precheck("MEETING"),
            Some((Segment::PassThrough("MEETING".into()), PassReason::Foreign))
        );
    }

    #[test]
    fn test_native_script() {
        assert_eq!(
            precheck("ගෙදර"),
            Some((Segment::PassThrough("ගෙදර".into()), PassReason::NativeScript))
        );
    }

    #[test]
    fn test_mixed_words_pass_whole() {
        assert_eq!(
            precheck("Zürich"),
            Some((Segment::PassThrough("Zürich".into()), PassReason::NativeScript))
        );
        assert_eq!(
            precheck("mp3"),
            Some((Segment::PassThrough("mp3".into()), PassReason::Alphanumeric))
        );
        assert_eq!(
            precheck("430k"),
            Some((Segment::PassThrough("430k".into()), PassReason::Alphanumeric))
        );
    }

    #[test]
    fn test_overlong_word_dropped() {
        let word = "mamagedharayanavaaekaharignanaehaemakaranneepahasunavaedhayata";
        assert_eq!(precheck(word), Some((Segment::Dropped, PassReason::Overlong)));
    }

    #[test]
    fn test_singlish_word_goes_on() {
        assert_eq!(precheck("gedhara"), None);
        assert_eq!(precheck("Lamayi"), None);
    }

    #[test]
    fn test_separators_are_not_classified() {
        assert_eq!(precheck(" "), None);
        assert_eq!(precheck("."), None);
    }

    #[test]
    fn test_symbols_dropped() {
        assert_eq!(precheck("@#$"), Some((Segment::Dropped, PassReason::Symbol)));
    }

    #[test]
    fn test_numeral_policies() {
        assert_eq!(
            precheck("430"),
            Some((Segment::PassThrough("430".into()), PassReason::Numeral))
        );

        let lexicon = Lexicon::global();
        let drop = EngineSettings {
            numerals: NumeralPolicy::Drop,
            ..settings().engine.clone()
        };
        let detector = PassThroughDetector::new(lexicon, &drop);
        let tokens = tokenize("430");
        assert_eq!(
            detector.precheck(&tokens[0]),
            Some((Segment::Dropped, PassReason::Numeral))
        );
    }

    #[test]
    fn test_unmatched_keeps_original() {
        assert_eq!(
            detector().unmatched("Xerox"),
            (Segment::PassThrough("Xerox".into()), PassReason::Unmatched)
        );
    }
}
