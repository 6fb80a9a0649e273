//! Address tokenization.
//!
//! Converts a raw address string into a stream of tagged tokens. At every
//! position the first matching class wins:
//!
//! 1. alphanumeric compound (`50-летия`): one to three digits, `-`, letters
//! 2. dashed compound (`пр-кт`): letters, `-`, letters
//! 3. word: a run of letters
//! 4. integer: a run of digits
//! 5. `/` or `-`
//!
//! Every other character separates tokens and is dropped. Tokenization never
//! fails.

use std::sync::Arc;

use crate::morph::{DictionaryTagger, Tagger};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Splits address strings into tokens and tags the word-like ones.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    tagger: Arc<dyn Tagger>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Arc::new(DictionaryTagger::standard()))
    }
}

impl Tokenizer {
    /// Creates a tokenizer that tags words with `tagger`.
    #[must_use]
    pub fn new(tagger: Arc<dyn Tagger>) -> Self {
        Self { tagger }
    }

    /// The tagger in use.
    #[must_use]
    pub fn tagger(&self) -> &dyn Tagger {
        self.tagger.as_ref()
    }

    /// Tokenizes `input`.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let chars: Vec<(usize, char)> = input.char_indices().collect();
        let byte_at = |i: usize| chars.get(i).map_or(input.len(), |&(b, _)| b);
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i].1;
            let (kind, end) = if let Some(end) = scan_compound(&chars, i, is_digit, 3) {
                (TokenKind::AlphaNumeric, end)
            } else if let Some(end) = scan_compound(&chars, i, is_letter, usize::MAX) {
                (TokenKind::Dashed, end)
            } else if is_letter(ch) {
                (TokenKind::Word, run(&chars, i, is_letter))
            } else if is_digit(ch) {
                (TokenKind::Integer, run(&chars, i, is_digit))
            } else if ch == '/' || ch == '-' {
                (TokenKind::Punct, i + 1)
            } else {
                i += 1;
                continue;
            };

            let span = Span::new(byte_at(i), byte_at(end));
            let token = Token::new(kind, span.text(input), span);
            let token = if kind.is_wordlike() {
                let parses = self.tagger.analyze(&token.text);
                token.with_parses(parses)
            } else {
                token
            };
            tokens.push(token);
            i = end;
        }

        tokens
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_alphabetic()
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Index just past the run of `class` characters starting at `from`.
fn run(chars: &[(usize, char)], from: usize, class: fn(char) -> bool) -> usize {
    let mut end = from;
    while end < chars.len() && class(chars[end].1) {
        end += 1;
    }
    end
}

/// Scans `head-letters` where `head` is a run of `class` characters no
/// longer than `max_head`. Returns the index past the compound.
fn scan_compound(
    chars: &[(usize, char)],
    from: usize,
    class: fn(char) -> bool,
    max_head: usize,
) -> Option<usize> {
    let head_end = run(chars, from, class);
    let head_len = head_end - from;
    if head_len == 0 || head_len > max_head {
        return None;
    }
    let dash = chars.get(head_end)?.1;
    let first = chars.get(head_end + 1)?.1;
    if dash != '-' || !is_letter(first) {
        return None;
    }
    Some(run(chars, head_end + 1, is_letter))
}
