//! Token types for address strings.
//!
//! Tokens are the output of the tokenizer and input to the grammar engine.

use std::fmt;

use crate::morph::{Grammeme, Parse};
use crate::span::Span;

/// Lexical class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of letters like `Ленина`.
    Word,
    /// Run of digits like `64`.
    Integer,
    /// Up to three digits, a hyphen and letters: `50-летия`, `1-ая`.
    AlphaNumeric,
    /// Letters, a hyphen and letters: `пр-кт`, `б-р`.
    Dashed,
    /// `/` or `-`.
    Punct,
}

impl TokenKind {
    /// Returns true for kinds that carry morphological readings.
    #[must_use]
    pub const fn is_wordlike(self) -> bool {
        matches!(self, Self::Word | Self::AlphaNumeric | Self::Dashed)
    }
}

/// A token of an address string.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Lexical class.
    pub kind: TokenKind,
    /// Raw text as written.
    pub text: String,
    /// Source location.
    pub span: Span,
    /// Morphological readings; empty for numbers and punctuation.
    pub parses: Vec<Parse>,
}

impl Token {
    /// Creates a token without readings.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
            parses: Vec::new(),
        }
    }

    /// Attaches morphological readings.
    #[must_use]
    pub fn with_parses(mut self, parses: Vec<Parse>) -> Self {
        self.parses = parses;
        self
    }

    /// Numeric value of an integer token. `None` for other kinds and for
    /// values that do not fit a `u64`.
    #[must_use]
    pub fn value(&self) -> Option<u64> {
        match self.kind {
            TokenKind::Integer => self.text.parse().ok(),
            _ => None,
        }
    }

    /// Returns true if any reading carries `grammeme`.
    #[must_use]
    pub fn has_grammeme(&self, grammeme: Grammeme) -> bool {
        self.parses.iter().any(|p| p.tags.contains(grammeme))
    }

    /// Returns true if any reading has `lemma`.
    #[must_use]
    pub fn has_lemma(&self, lemma: &str) -> bool {
        self.parses.iter().any(|p| p.lemma == lemma)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
