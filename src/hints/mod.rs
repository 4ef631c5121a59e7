//! "Did you mean" suggestions based on edit distance
//!
//! Hints are only ever computed on a failure path, so a grammar that parses
//! successfully pays nothing for them.

pub mod keyword;

use serde::Deserialize;

pub use keyword::{KeywordParser, any_keyword_with_hints, keyword_with_hints, string_with_hints};

/// Tuning for hint generation
///
/// Loadable from any serde format; missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HintOptions {
    /// Largest edit distance still worth suggesting
    pub max_distance: usize,
    /// Number of suggestions to keep
    pub max_hints: usize,
}

impl Default for HintOptions {
    fn default() -> Self {
        HintOptions {
            max_distance: 2,
            max_hints: 3,
        }
    }
}

impl HintOptions {
    pub fn hints<S: AsRef<str>>(&self, found: &str, candidates: &[S]) -> Vec<String> {
        generate_hints(found, candidates, self.max_distance, self.max_hints)
    }
}

/// Edit distance between two strings, counted in chars
///
/// Insertions, deletions and substitutions all cost one.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + substitution);
        }
    }

    table[a.len()][b.len()]
}

/// Candidates close to `found`, nearest first
///
/// Exact matches (distance 0) are not suggestions. Candidates at the same
/// distance keep their original order.
pub fn generate_hints<S: AsRef<str>>(
    found: &str,
    candidates: &[S],
    max_distance: usize,
    max_hints: usize,
) -> Vec<String> {
    let mut scored: Vec<(usize, &str)> = candidates
        .iter()
        .map(|candidate| {
            let candidate = candidate.as_ref();
            (levenshtein_distance(found, candidate), candidate)
        })
        .filter(|(distance, _)| *distance > 0 && *distance <= max_distance)
        .collect();

    scored.sort_by_key(|(distance, _)| *distance);
    scored
        .into_iter()
        .take(max_hints)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
