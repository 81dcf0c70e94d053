//! Character-level Unicode classification for Sinhala and romanized input.

/// Virama (hal kirima). Kills the inherent vowel of the preceding consonant.
pub const HAL_KIRIMA: char = '\u{0DCA}';
pub const ZWJ: char = '\u{200D}';
pub const ZWNJ: char = '\u{200C}';
pub const RAYANNA: char = '\u{0DBB}';

/// Check the Sinhala block (U+0D80..U+0DFF).
pub fn is_sinhala(c: char) -> bool {
    ('\u{0D80}'..='\u{0DFF}').contains(&c)
}

/// Dependent vowel signs (pili), including the two rare long vocalic signs.
pub fn is_vowel_sign(c: char) -> bool {
    ('\u{0DCF}'..='\u{0DDF}').contains(&c) || c == '\u{0DF2}' || c == '\u{0DF3}'
}

pub fn is_joiner(c: char) -> bool {
    c == ZWJ || c == ZWNJ
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Sentence punctuation that survives conversion unchanged.
pub fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | '!'
            | '?'
            | ';'
            | ':'
            | '\''
            | '"'
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '-'
            | '…'
            | '‘'
            | '’'
            | '“'
            | '”'
    )
}

/// Letters of any script plus the marks and joiners that attach to them.
///
/// Sinhala vowel signs are category Mc/Mn; most carry the Alphabetic
/// property, but the virama does not, so the block is accepted wholesale.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || is_sinhala(c) || is_joiner(c)
}
