//! Integration tests for the streetlink_parser crate.
//!
//! Tests for the address parsing pipeline:
//! - Tokenization
//! - Grammar combinators
//! - Full address parsing

mod address_tests;
mod grammar_tests;
mod tokenizer_tests;
