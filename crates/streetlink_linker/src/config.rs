//! Configuration for linking and batch runs.

use streetlink_foundation::CasePolicy;

use crate::similarity::Metric;

/// Default minimum similarity for a spelling to count as a match.
pub const DEFAULT_CUTOFF: f64 = 0.55;

/// Default number of close spellings considered per lookup.
pub const DEFAULT_MAX_MATCHES: usize = 5;

/// Configuration for a [`Linker`](crate::Linker).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinkerConfig {
    /// Case convention of the reference dataset.
    pub case_policy: CasePolicy,

    /// Minimum similarity score, in `[0, 1]`.
    pub cutoff: f64,

    /// How many close spellings are ranked per lookup.
    pub max_matches: usize,

    /// Similarity measure.
    pub metric: Metric,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            case_policy: CasePolicy::Upper,
            cutoff: DEFAULT_CUTOFF,
            max_matches: DEFAULT_MAX_MATCHES,
            metric: Metric::SequenceRatio,
        }
    }
}

impl LinkerConfig {
    /// Builder method to set the case policy.
    #[must_use]
    pub fn with_case_policy(mut self, case_policy: CasePolicy) -> Self {
        self.case_policy = case_policy;
        self
    }

    /// Builder method to set the similarity cutoff, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff.clamp(0.0, 1.0);
        self
    }

    /// Builder method to set how many close spellings are ranked.
    #[must_use]
    pub fn with_max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = max_matches;
        self
    }

    /// Builder method to set the similarity measure.
    #[must_use]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }
}

/// What a batch does when a record fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ErrorMode {
    /// Record the failure and carry on.
    #[default]
    Skip,
    /// Stop at the first failure.
    Stop,
}

/// Configuration for a [`BatchProcessor`](crate::BatchProcessor).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BatchConfig {
    /// Failure handling.
    pub error_mode: ErrorMode,

    /// Records between progress reports; 0 disables them.
    pub progress_interval: usize,

    /// Whether a parsed flat must fall inside a row's flat range.
    pub require_flat_check: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Skip,
            progress_interval: 100,
            require_flat_check: true,
        }
    }
}

impl BatchConfig {
    /// Builder method to set the error mode.
    #[must_use]
    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    /// Builder method to set the progress interval.
    #[must_use]
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Builder method to enable/disable the flat range check.
    #[must_use]
    pub fn with_require_flat_check(mut self, require: bool) -> Self {
        self.require_flat_check = require;
        self
    }
}
