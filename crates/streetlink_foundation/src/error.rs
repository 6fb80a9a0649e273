//! Why an address could not be parsed or linked.
//!
//! An [`Error`] pairs an [`ErrorKind`] with an optional [`ErrorContext`]
//! naming the record, row or column it came from. Every kind except
//! [`ErrorKind::MalformedReference`] is a per-record outcome: batch callers
//! tally them by [`ErrorCategory`] and carry on.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Streetlink operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unparseable address error.
    #[must_use]
    pub fn unparseable(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unparseable {
            input: input.into(),
        })
    }

    /// Creates an unrecognized street type error.
    #[must_use]
    pub fn unrecognized_street_type(input: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnrecognizedStreetType {
            input: input.into(),
        })
    }

    /// Creates an error for a type keyword that matched but maps to no variant.
    #[must_use]
    pub fn unmapped_street_type(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnmappedStreetType {
            value: value.into(),
        })
    }

    /// Creates an incomplete address error.
    #[must_use]
    pub fn incomplete_address(missing: &'static str) -> Self {
        Self::new(ErrorKind::IncompleteAddress { missing })
    }

    /// Creates a normalization failure for the given street name.
    #[must_use]
    pub fn normalization_failed(street: impl Into<String>) -> Self {
        Self::new(ErrorKind::NormalizationFailed {
            street: street.into(),
        })
    }

    /// Creates a not-in-reference error.
    #[must_use]
    pub fn not_in_reference() -> Self {
        Self::new(ErrorKind::NotInReference)
    }

    /// Creates an error for a flat that fits no range of the matched rows.
    #[must_use]
    pub fn no_suitable_flat_range(flat: u32) -> Self {
        Self::new(ErrorKind::NoSuitableFlatRange { flat })
    }

    /// Creates an unresolved ambiguity error.
    #[must_use]
    pub fn unresolved_ambiguity(candidates: usize) -> Self {
        Self::new(ErrorKind::UnresolvedAmbiguity { candidates })
    }

    /// Creates a malformed reference dataset error.
    #[must_use]
    pub fn malformed_reference(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedReference {
            reason: reason.into(),
        })
    }

    /// Returns the coarse category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The raw text does not match the address grammar at all.
    #[error("cannot parse address: {input:?}")]
    Unparseable {
        /// The raw input.
        input: String,
    },

    /// A type-like token exists but does not map to any street type.
    #[error("unrecognized street type: {input:?}")]
    UnrecognizedStreetType {
        /// The raw type text.
        input: String,
    },

    /// The type grammar produced a value that no variant carries.
    #[error("street type keyword {value:?} has no variant")]
    UnmappedStreetType {
        /// The canonical value produced by the grammar.
        value: String,
    },

    /// The address lacks a street name or a house.
    #[error("address has no {missing}")]
    IncompleteAddress {
        /// Which part is missing.
        missing: &'static str,
    },

    /// The street name is not close enough to any known spelling.
    #[error("cannot normalize street name {street:?}")]
    NormalizationFailed {
        /// The street name as given.
        street: String,
    },

    /// Normalization succeeded but no reference row matches.
    #[error("address not found in reference dataset")]
    NotInReference,

    /// Rows matched the street and house, but no flat range holds the flat.
    #[error("address found, but flat {flat} fits no flat range")]
    NoSuitableFlatRange {
        /// The flat that was looked for.
        flat: u32,
    },

    /// Several reference candidates match equally well.
    #[error("unresolved ambiguity between {candidates} candidates")]
    UnresolvedAmbiguity {
        /// How many candidates were left.
        candidates: usize,
    },

    /// The reference dataset lacks required columns or holds bad cells.
    #[error("malformed reference dataset: {reason}")]
    MalformedReference {
        /// What is wrong with the dataset.
        reason: String,
    },
}

impl ErrorKind {
    /// Returns the coarse category of this kind.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Unparseable { .. } => ErrorCategory::Unparseable,
            Self::UnrecognizedStreetType { .. } | Self::UnmappedStreetType { .. } => {
                ErrorCategory::UnrecognizedStreetType
            }
            Self::IncompleteAddress { .. } => ErrorCategory::IncompleteAddress,
            Self::NormalizationFailed { .. } => ErrorCategory::NormalizationFailed,
            Self::NotInReference | Self::NoSuitableFlatRange { .. } => {
                ErrorCategory::NotInReference
            }
            Self::UnresolvedAmbiguity { .. } => ErrorCategory::UnresolvedAmbiguity,
            Self::MalformedReference { .. } => ErrorCategory::MalformedReference,
        }
    }

    /// Returns true for kinds meaning "no reference row matched".
    #[must_use]
    pub fn is_not_in_reference(&self) -> bool {
        self.category() == ErrorCategory::NotInReference
    }
}

/// Coarse error categories used for per-batch tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// No recognizable street/house pattern.
    Unparseable,
    /// Street type text maps to no variant.
    UnrecognizedStreetType,
    /// Street name or house missing.
    IncompleteAddress,
    /// No spelling within the similarity cutoff.
    NormalizationFailed,
    /// No reference row matched.
    NotInReference,
    /// More than one reference row matched.
    UnresolvedAmbiguity,
    /// Reference dataset could not be loaded.
    MalformedReference,
}

impl ErrorCategory {
    /// All categories in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Unparseable,
        Self::UnrecognizedStreetType,
        Self::IncompleteAddress,
        Self::NormalizationFailed,
        Self::NotInReference,
        Self::UnresolvedAmbiguity,
        Self::MalformedReference,
    ];

    /// Short stable label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unparseable => "unparseable",
            Self::UnrecognizedStreetType => "unrecognized-street-type",
            Self::IncompleteAddress => "incomplete-address",
            Self::NormalizationFailed => "normalization-failed",
            Self::NotInReference => "not-in-reference",
            Self::UnresolvedAmbiguity => "unresolved-ambiguity",
            Self::MalformedReference => "malformed-reference",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source text, file or table name.
    pub source: Option<String>,
    /// Row (record) number, 1-based.
    pub row: Option<usize>,
    /// Column name.
    pub column: Option<String>,
    /// Stack of processing stages the error passed through.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            row: None,
            column: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the row number.
    #[must_use]
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Sets the column name.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if let Some(row) = self.row {
            write!(f, " row {row}")?;
        }
        if let Some(column) = &self.column {
            write!(f, " column {column}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
