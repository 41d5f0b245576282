// Ranking, length filtering, and percentage annotation.
//
// Ranking is a total order: count in the requested direction, then token
// ascending. Percentages are computed after filtering, over the retained
// rows only.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::FreqError;

use super::tokenizer::TokenCounts;

/// Direction of the count comparison. Ties are always broken by token
/// ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

/// One row of the frequency table.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRow {
    pub token: String,
    pub count: u64,
    /// Share of the retained total, 0.0 to 100.0
    pub percentage: f64,
}

/// Compare two (token, count) pairs in ranking order.
pub fn compare_ranked(a: &(String, u64), b: &(String, u64), order: SortOrder) -> Ordering {
    let by_count = match order {
        SortOrder::Descending => b.1.cmp(&a.1),
        SortOrder::Ascending => a.1.cmp(&b.1),
    };
    by_count.then_with(|| a.0.cmp(&b.0))
}

/// Turn a count map into a ranked list of (token, count) pairs.
pub fn rank_token_counts(counts: TokenCounts, order: SortOrder) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| compare_ranked(a, b, order));
    ranked
}

/// Keep only tokens of at least `min_length` characters, preserving order.
pub fn filter_token_counts(ranked: Vec<(String, u64)>, min_length: usize) -> Vec<(String, u64)> {
    let before = ranked.len();
    let kept: Vec<(String, u64)> = ranked
        .into_iter()
        .filter(|(token, _)| token.chars().count() >= min_length)
        .collect();
    debug!(before, after = kept.len(), min_length, "Filtered tokens by length");
    kept
}

/// Annotate each pair with its percentage of the total count.
///
/// Fails with `EmptyFrequencySet` when the total is zero, which includes
/// the case where filtering removed every token.
pub fn calculate_percentages(ranked: &[(String, u64)]) -> Result<Vec<FrequencyRow>, FreqError> {
    let total: u64 = ranked.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Err(FreqError::EmptyFrequencySet);
    }

    Ok(ranked
        .iter()
        .map(|(token, count)| FrequencyRow {
            token: token.clone(),
            count: *count,
            percentage: (*count as f64 / total as f64) * 100.0,
        })
        .collect())
}
