//! Splits raw input into words, numerals, punctuation, symbols and whitespace.
//!
//! Only whitespace, punctuation and symbols separate words; a digit-only run
//! is a numeral.
//!
//! Every byte of the input belongs to exactly one token, so joining the token
//! texts in order reproduces the input exactly.

use serde::Serialize;

use crate::unicode::{is_latin, is_punctuation, is_word_char};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Word,
    Number,
    Punctuation,
    Whitespace,
    Symbol,
}

/// A maximal run of input characters sharing one character class.
///
/// `start` and `end` are byte offsets into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    /// True for words made of ASCII letters only, the only tokens the rule
    /// table can translate.
    pub fn is_latin_word(&self) -> bool {
        self.kind == TokenKind::Word && self.text.chars().all(is_latin)
    }
}

/// Letters of every script, digits and combining marks form a single class,
/// so a word such as "mp3", "Zürich" or "4G" is one token and is either
/// converted whole or passed through whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Punct,
    Symbol,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_ascii_digit() || is_word_char(c) {
            CharClass::Word
        } else if c.is_whitespace() {
            CharClass::Space
        } else if is_punctuation(c) {
            CharClass::Punct
        } else {
            CharClass::Symbol
        }
    }

    fn kind(self, text: &str) -> TokenKind {
        match self {
            CharClass::Word if text.bytes().all(|b| b.is_ascii_digit()) => TokenKind::Number,
            CharClass::Word => TokenKind::Word,
            CharClass::Space => TokenKind::Whitespace,
            CharClass::Punct => TokenKind::Punctuation,
            CharClass::Symbol => TokenKind::Symbol,
        }
    }
}

pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let class = CharClass::of(c);
        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if CharClass::of(next) != class {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }
        let text = &input[start..end];
        tokens.push(Token {
            text,
            kind: class.kind(text),
            start,
            end,
        });
    }

    tokens
}
