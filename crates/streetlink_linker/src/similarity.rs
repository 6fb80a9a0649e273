//! String similarity for street-name lookup.
//!
//! [`SequenceRatio`] is the Ratcliff/Obershelp measure: twice the number of
//! characters in matching blocks over the total length. It is computed the
//! same way as the classic longest-matching-block algorithm, so scores agree
//! with other implementations of that algorithm to the last digit.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Scores how close a known spelling is to a query, in `[0, 1]`.
pub trait SimilarityScorer: Send + Sync + fmt::Debug {
    /// Similarity of `candidate` to `query`; 1.0 means identical.
    fn score(&self, candidate: &str, query: &str) -> f64;

    /// A cheap value never below [`score`](Self::score). Lookups skip the
    /// full score when this is already under the cutoff.
    fn upper_bound(&self, _candidate: &str, _query: &str) -> f64 {
        1.0
    }
}

/// Which scorer a linker uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Metric {
    /// [`SequenceRatio`]
    #[default]
    SequenceRatio,
    /// [`JaroWinkler`]
    JaroWinkler,
    /// [`NormalizedLevenshtein`]
    NormalizedLevenshtein,
}

impl Metric {
    /// Returns a shared scorer for this metric.
    #[must_use]
    pub fn scorer(self) -> Arc<dyn SimilarityScorer> {
        match self {
            Self::SequenceRatio => Arc::new(SequenceRatio),
            Self::JaroWinkler => Arc::new(JaroWinkler),
            Self::NormalizedLevenshtein => Arc::new(NormalizedLevenshtein),
        }
    }
}

/// Ratcliff/Obershelp similarity over characters.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceRatio;

impl SimilarityScorer for SequenceRatio {
    fn score(&self, candidate: &str, query: &str) -> f64 {
        let a: Vec<char> = candidate.chars().collect();
        let b: Vec<char> = query.chars().collect();
        ratio(matching_characters(&a, &b), a.len() + b.len())
    }

    fn upper_bound(&self, candidate: &str, query: &str) -> f64 {
        let a: Vec<char> = candidate.chars().collect();
        let b: Vec<char> = query.chars().collect();
        let mut available: HashMap<char, usize> = HashMap::new();
        for &ch in &b {
            *available.entry(ch).or_default() += 1;
        }
        let mut common = 0;
        for ch in &a {
            if let Some(count) = available.get_mut(ch) {
                if *count > 0 {
                    *count -= 1;
                    common += 1;
                }
            }
        }
        ratio(common, a.len() + b.len())
    }
}

/// Jaro-Winkler similarity, favouring shared prefixes.
#[derive(Clone, Copy, Debug, Default)]
pub struct JaroWinkler;

impl SimilarityScorer for JaroWinkler {
    fn score(&self, candidate: &str, query: &str) -> f64 {
        strsim::jaro_winkler(candidate, query)
    }
}

/// One minus the Levenshtein distance over the longer length.
#[derive(Clone, Copy, Debug, Default)]
pub struct NormalizedLevenshtein;

impl SimilarityScorer for NormalizedLevenshtein {
    fn score(&self, candidate: &str, query: &str) -> f64 {
        strsim::normalized_levenshtein(candidate, query)
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(matches: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matches as f64 / total as f64
    }
}

/// Sequences at least this long ignore characters that are too frequent.
const POPULAR_MIN_LEN: usize = 200;

/// Positions of every character of `b`, with popular characters removed from
/// long sequences.
fn index_positions(b: &[char]) -> HashMap<char, Vec<usize>> {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        positions.entry(ch).or_default().push(j);
    }
    if b.len() >= POPULAR_MIN_LEN {
        let limit = b.len() / 100 + 1;
        positions.retain(|_, js| js.len() <= limit);
    }
    positions
}

/// Longest block `a[i..i+k] == b[j..j+k]` inside the given bounds, earliest
/// in `a` and then in `b` on ties.
fn longest_match(
    a: &[char],
    b: &[char],
    positions: &HashMap<char, Vec<usize>>,
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);
    let mut run: HashMap<usize, usize> = HashMap::new();
    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next = HashMap::new();
        if let Some(js) = positions.get(ch) {
            for &j in js {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j.checked_sub(1).and_then(|p| run.get(&p)).copied().unwrap_or(0) + 1;
                next.insert(j, k);
                if k > best_len {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_len = k;
                }
            }
        }
        run = next;
    }

    // Popular characters are missing from the index; grow over them.
    while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
        best_i -= 1;
        best_j -= 1;
        best_len += 1;
    }
    while best_i + best_len < ahi
        && best_j + best_len < bhi
        && a[best_i + best_len] == b[best_j + best_len]
    {
        best_len += 1;
    }
    (best_i, best_j, best_len)
}

/// Total size of the matching blocks found by recursive longest-match
/// splitting.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let positions = index_positions(b);
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut total = 0;
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, &positions, (alo, ahi), (blo, bhi));
        if k == 0 {
            continue;
        }
        total += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    total
}

/// Up to `n` keys scoring at least `cutoff` against `query`, best first.
/// Equal scores put the lexicographically greater key first.
pub fn close_matches<'a, I>(
    scorer: &dyn SimilarityScorer,
    query: &str,
    keys: I,
    n: usize,
    cutoff: f64,
) -> Vec<(f64, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &str)> = keys
        .into_iter()
        .filter(|key| scorer.upper_bound(key, query) >= cutoff)
        .filter_map(|key| {
            let score = scorer.score(key, query);
            (score >= cutoff).then_some((score, key))
        })
        .collect();
    scored.sort_by(|x, y| y.0.total_cmp(&x.0).then_with(|| y.1.cmp(x.1)));
    scored.truncate(n);
    scored
}
