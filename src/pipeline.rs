// Frequency-count pipeline: load -> count -> rank -> filter -> annotate -> save.
//
// All computation happens in memory before the output file is created, so
// a run that fails (for example because nothing survived filtering) leaves
// no output file behind.

use tracing::info;

use crate::config::CountConfig;
use crate::error::FreqError;
use crate::tokens::ranking::{
    calculate_percentages, filter_token_counts, rank_token_counts, FrequencyRow,
};
use crate::tokens::table::save_token_counts;
use crate::tokens::tokenizer::{calculate_token_counts, load_text};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct FrequencySummary {
    /// Lines read from the input file
    pub lines: usize,
    /// Distinct tokens before length filtering
    pub distinct_tokens: usize,
    /// Sum of counts over the retained rows
    pub retained_total: u64,
    /// The rows written to the output file, in file order
    pub rows: Vec<FrequencyRow>,
}

/// Compute the frequency table for in-memory lines.
pub fn build_frequency_table<I, S>(
    lines: I,
    config: &CountConfig,
) -> Result<FrequencySummary, FreqError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line_count = 0;
    let counts = calculate_token_counts(lines.into_iter().inspect(|_| line_count += 1));
    let distinct_tokens = counts.len();

    let ranked = rank_token_counts(counts, config.order);
    let retained = filter_token_counts(ranked, config.min_length);
    let rows = calculate_percentages(&retained)?;
    let retained_total = rows.iter().map(|r| r.count).sum();

    info!(
        lines = line_count,
        distinct = distinct_tokens,
        retained = rows.len(),
        total = retained_total,
        "Computed frequency table"
    );

    Ok(FrequencySummary {
        lines: line_count,
        distinct_tokens,
        retained_total,
        rows,
    })
}

/// Run the whole pipeline from `config.input` to `config.output`.
pub fn token_count(config: &CountConfig) -> Result<FrequencySummary, FreqError> {
    let lines = load_text(&config.input)?;
    let summary = build_frequency_table(&lines, config)?;
    save_token_counts(&config.output, &summary.rows)?;
    Ok(summary)
}
