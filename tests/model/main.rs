//! Integration tests for Layer 2: Model
//!
//! Tests for street types, streets and addresses parsed from raw text.

mod addresses;
mod street_types;
