//! Streetlink - address parsing and linking for Cherepovets
//!
//! This crate re-exports all layers of the Streetlink system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: streetlink_linker     — Abbreviations, similarity, reference linking, batches
//! Layer 2: streetlink_model      — StreetType, Street, Address
//! Layer 1: streetlink_parser     — Tokenizer, morphology, grammar engine, address grammar
//! Layer 0: streetlink_foundation — Error types, case policy, text helpers
//! ```

pub use streetlink_foundation as foundation;
pub use streetlink_linker as linker;
pub use streetlink_model as model;
pub use streetlink_parser as parser;
