//! Resolving many raw addresses in one pass.
//!
//! The processor owns no I/O: records come from any iterator, outcomes go to
//! a sink closure, and the failure report is written to any [`io::Write`].

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io;

use streetlink_foundation::{Error, ErrorCategory, Result};
use tracing::{info, warn};

use crate::config::{BatchConfig, ErrorMode};
use crate::linker::{Linker, Resolution};

/// The result of resolving one record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordOutcome {
    /// Position of the record in the input, from 0.
    pub index: usize,
    /// The raw text.
    pub raw: String,
    /// The resolution or the reason there is none.
    pub result: Result<Resolution>,
}

/// One failed record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Failure {
    /// The raw text.
    pub raw: String,
    /// The error message.
    pub message: String,
    /// The error category.
    pub category: ErrorCategory,
}

/// Counts of a batch run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessingStats {
    /// Records seen.
    pub processed: usize,
    /// Records linked to a key.
    pub succeeded: usize,
    /// Records that failed.
    pub failed: usize,
    /// Every failure, in input order.
    pub failures: Vec<Failure>,
    /// Failures per category.
    pub by_category: BTreeMap<ErrorCategory, usize>,
}

impl ProcessingStats {
    /// Counts a linked record.
    pub fn record_success(&mut self) {
        self.processed += 1;
        self.succeeded += 1;
    }

    /// Counts a failed record.
    pub fn record_failure(&mut self, raw: &str, error: &Error) {
        self.processed += 1;
        self.failed += 1;
        let category = error.category();
        *self.by_category.entry(category).or_default() += 1;
        self.failures.push(Failure {
            raw: raw.to_string(),
            message: error.to_string(),
            category,
        });
    }

    /// Failures in `category`.
    #[must_use]
    pub fn count(&self, category: ErrorCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    /// A human-readable summary, one line per non-zero category.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = format!(
            "processed {}: {} linked, {} failed",
            self.processed, self.succeeded, self.failed
        );
        for (category, count) in &self.by_category {
            let _ = write!(out, "\n  {category}: {count}");
        }
        out
    }

    /// Writes the failures as CSV with an `Address,Error` header.
    ///
    /// # Errors
    ///
    /// Any error of the writer.
    pub fn write_report<W: io::Write>(&self, writer: W) -> io::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Address", "Error"])?;
        for failure in &self.failures {
            csv.write_record([failure.raw.as_str(), failure.message.as_str()])?;
        }
        csv.flush()
    }
}

/// Resolves records with a [`Linker`].
pub struct BatchProcessor<'a> {
    linker: &'a Linker,
    config: BatchConfig,
    progress: Option<Box<dyn FnMut(usize) + 'a>>,
}

impl<'a> BatchProcessor<'a> {
    /// Creates a processor with the default configuration.
    #[must_use]
    pub fn new(linker: &'a Linker) -> Self {
        Self::with_config(linker, BatchConfig::default())
    }

    /// Creates a processor.
    #[must_use]
    pub fn with_config(linker: &'a Linker, config: BatchConfig) -> Self {
        Self {
            linker,
            config,
            progress: None,
        }
    }

    /// Calls `callback` with the number of records seen every
    /// `progress_interval` records.
    #[must_use]
    pub fn on_progress(mut self, callback: impl FnMut(usize) + 'a) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Resolves every record, passing each outcome to `sink`.
    ///
    /// # Errors
    ///
    /// In [`ErrorMode::Stop`], the first record error, with the record's
    /// position and text in its context. The failing outcome still reaches
    /// `sink` first.
    pub fn run<I, R, S>(&mut self, records: I, mut sink: S) -> Result<ProcessingStats>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<str>,
        S: FnMut(RecordOutcome),
    {
        let mut stats = ProcessingStats::default();
        for (index, record) in records.into_iter().enumerate() {
            let raw = record.as_ref();
            let result = self
                .linker
                .resolve(raw, self.config.require_flat_check);

            let stop = match &result {
                Ok(_) => {
                    stats.record_success();
                    None
                }
                Err(err) => {
                    stats.record_failure(raw, err);
                    warn!(index, raw, error = %err, "record not linked");
                    (self.config.error_mode == ErrorMode::Stop).then(|| annotate(err, index, raw))
                }
            };

            sink(RecordOutcome {
                index,
                raw: raw.to_string(),
                result,
            });
            if let Some(err) = stop {
                return Err(err);
            }

            let seen = index + 1;
            if self.config.progress_interval > 0 && seen % self.config.progress_interval == 0 {
                if let Some(progress) = self.progress.as_mut() {
                    progress(seen);
                }
            }
        }

        info!(
            processed = stats.processed,
            succeeded = stats.succeeded,
            failed = stats.failed,
            "batch finished"
        );
        Ok(stats)
    }
}

impl std::fmt::Debug for BatchProcessor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchProcessor")
            .field("config", &self.config)
            .field("progress", &self.progress.is_some())
            .finish_non_exhaustive()
    }
}

fn annotate(err: &Error, index: usize, raw: &str) -> Error {
    let mut context = err.context.clone().unwrap_or_default();
    if context.source.is_none() {
        context = context.with_source(raw);
    }
    let context = context.with_row(index + 1).with_frame("batch");
    err.clone().with_context(context)
}
