//! Grammar-driven parser for Cherepovets address strings.
//!
//! This crate turns free-form input like "г. Череповец, ул. Ленина, д. 5,
//! кв. 7" into an [`AddressFact`] with named parts.
//!
//! # Architecture
//!
//! ```text
//! "ул. Ленина, д. 5, кв. 7"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → [Word(ул), Word(Ленина), Word(д), Int(5), Word(кв), Int(7)]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MORPHOLOGY      │  → Ленина: NOUN,Surn (ленин); ул: NOUN (ул)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GRAMMAR         │  → STREET(TYPE=УЛ., NAME) BUILDING(HOUSE, FLAT)
//! │ MATCHING        │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ADDRESS FACT    │  → { street: Ленина/УЛ., house: 5, flat: 7 }
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`span`] - Source locations
//! - [`token`] - Token types
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`morph`] - Morphological readings and the [`Tagger`] seam
//! - [`lexicon`] - Static lexicon for the default tagger
//! - [`grammar`] - Rule combinators and the backtracking matcher
//! - [`rules`] - The address and street type grammars
//! - [`fact`] - Parse output
//! - [`parser`] - Pipeline orchestration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fact;
pub mod grammar;
pub mod lexicon;
pub mod morph;
pub mod parser;
pub mod rules;
pub mod span;
pub mod token;
pub mod tokenizer;

// Re-export main types for convenience
pub use fact::{AddressFact, AddressSlot, StreetFact};
pub use grammar::{Capture, Match, Predicate, Rule};
pub use morph::{DictionaryTagger, Grammeme, Parse, TagSet, Tagger};
pub use parser::AddressParser;
pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
