//! Street normalization and reference linking for Streetlink.
//!
//! A [`Linker`] holds a reference dataset of canonical rows. Given an
//! [`Address`](streetlink_model::Address) it finds the canonical streets
//! whose spelling is closest to the written name ([`StreetsFinder`]), then
//! narrows the rows by house, street type and flat range until one key is
//! left or a typed error says why none is.
//!
//! # Example
//!
//! ```
//! use streetlink_linker::{Linker, LinkerConfig, ReferenceRow};
//! use streetlink_model::StreetType;
//!
//! let linker = Linker::from_rows(
//!     [
//!         ReferenceRow::new(Some(StreetType::Street), "МЕТАЛЛУРГОВ", "2", 101).with_flats(1, 48),
//!         ReferenceRow::new(Some(StreetType::Square), "МЕТАЛЛУРГОВ", "5", 202).with_flats(1, 60),
//!     ],
//!     LinkerConfig::default(),
//! );
//! let resolution = linker.resolve("Металлургов 2 48", true).unwrap();
//! assert_eq!(resolution.key, 101);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod abbreviations;
pub mod batch;
pub mod config;
pub mod finder;
pub mod linker;
pub mod reference;
pub mod similarity;

pub use abbreviations::Abbreviations;
pub use batch::{BatchProcessor, Failure, ProcessingStats, RecordOutcome};
pub use config::{BatchConfig, ErrorMode, LinkerConfig};
pub use finder::StreetsFinder;
pub use linker::{Linker, Resolution};
pub use reference::{COLUMNS, Cell, Key, ReferenceRow, ReferenceTable, Table};
pub use similarity::{
    JaroWinkler, Metric, NormalizedLevenshtein, SequenceRatio, SimilarityScorer, close_matches,
};
