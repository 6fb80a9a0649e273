//! Fuzzy lookup from written street names to canonical streets.
//!
//! The finder keeps a bank of spellings. Each canonical street is filed
//! under its own name and under every spelling reachable through the
//! abbreviation table, so "ИМ. КАРЛА МАРКСА" and "КАРЛА МАРКСА" both lead to
//! the same street. A query is scored against every spelling and the streets
//! behind the single best one are returned.

use std::sync::Arc;

use im::OrdMap;
use streetlink_foundation::{CasePolicy, collapse_whitespace};
use streetlink_model::Street;
use tracing::{debug, trace};

use crate::abbreviations::Abbreviations;
use crate::config::LinkerConfig;
use crate::similarity::{SimilarityScorer, close_matches};

/// Spelling bank with similarity lookup.
#[derive(Clone, Debug)]
pub struct StreetsFinder {
    bank: OrdMap<String, Vec<Street>>,
    abbreviations: Arc<Abbreviations>,
    scorer: Arc<dyn SimilarityScorer>,
    case_policy: CasePolicy,
    cutoff: f64,
    max_matches: usize,
}

impl StreetsFinder {
    /// Creates an empty finder using the standard abbreviation table.
    #[must_use]
    pub fn new(config: &LinkerConfig) -> Self {
        Self::with_abbreviations(config, Arc::new(Abbreviations::standard().clone()))
    }

    /// Creates an empty finder with a custom abbreviation table.
    #[must_use]
    pub fn with_abbreviations(config: &LinkerConfig, abbreviations: Arc<Abbreviations>) -> Self {
        Self {
            bank: OrdMap::new(),
            abbreviations,
            scorer: config.metric.scorer(),
            case_policy: config.case_policy,
            cutoff: config.cutoff,
            max_matches: config.max_matches,
        }
    }

    /// Replaces the similarity scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: Arc<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Files `street` under its name and every abbreviation spelling.
    pub fn append(&mut self, street: &Street) {
        let name = collapse_whitespace(&street.name);
        let spellings = std::iter::once(name.clone())
            .chain(self.abbreviations.spellings(&name))
            .map(|s| self.case_policy.apply(&s))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        for spelling in spellings {
            match self.bank.get_mut(&spelling) {
                Some(streets) => {
                    if !streets.contains(street) {
                        streets.push(street.clone());
                    }
                }
                None => {
                    self.bank.insert(spelling, vec![street.clone()]);
                }
            }
        }
    }

    /// Removes `street` from every spelling. Returns true if it was filed.
    pub fn remove(&mut self, street: &Street) -> bool {
        let keys: Vec<String> = self.bank.keys().cloned().collect();
        let mut removed = false;
        for key in keys {
            if let Some(streets) = self.bank.get_mut(&key) {
                let before = streets.len();
                streets.retain(|s| s != street);
                removed |= streets.len() != before;
                if streets.is_empty() {
                    self.bank.remove(&key);
                }
            }
        }
        removed
    }

    /// Spellings closest to `query`, best first, with their scores.
    #[must_use]
    pub fn closest(&self, query: &str, case_policy: CasePolicy) -> Vec<(f64, String)> {
        let query = case_policy.apply(&collapse_whitespace(query));
        close_matches(
            self.scorer.as_ref(),
            &query,
            self.bank.keys().map(String::as_str),
            self.max_matches,
            self.cutoff,
        )
        .into_iter()
        .map(|(score, key)| (score, key.to_string()))
        .collect()
    }

    /// Streets filed under the spelling closest to `query`, regardless of
    /// type. Empty if nothing reaches the cutoff.
    #[must_use]
    pub fn get_variants(&self, query: &str, case_policy: CasePolicy) -> Vec<Street> {
        let closest = self.closest(query, case_policy);
        let Some((score, key)) = closest.first() else {
            debug!(query, "no spelling above cutoff");
            return Vec::new();
        };
        trace!(query, spelling = %key, score, "closest spelling");
        self.bank.get(key).cloned().unwrap_or_default()
    }

    /// Canonical streets for `query`.
    ///
    /// A typed query narrows several candidates to those of its type, which
    /// may leave none. A single candidate is returned whatever its type.
    #[must_use]
    pub fn find(&self, query: &Street, case_policy: CasePolicy) -> Vec<Street> {
        let streets = self.get_variants(&query.name, case_policy);
        match query.street_type {
            Some(street_type) if streets.len() > 1 => streets
                .into_iter()
                .filter(|s| s.street_type == Some(street_type))
                .collect(),
            _ => streets,
        }
    }

    /// Every filed spelling, in order.
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        self.bank.keys().map(String::as_str)
    }

    /// Number of spellings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bank.len()
    }

    /// Returns true if nothing is filed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }

    /// Case convention of the filed spellings.
    #[must_use]
    pub fn case_policy(&self) -> CasePolicy {
        self.case_policy
    }
}

impl Default for StreetsFinder {
    fn default() -> Self {
        Self::new(&LinkerConfig::default())
    }
}
