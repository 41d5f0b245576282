// Colored terminal summaries printed after a successful run.
//
// The files on disk are the real output; this is only what the user sees
// on stdout. Suppressed entirely by --quiet.

use std::path::Path;

use colored::Colorize;

use crate::config::RandomConfig;
use crate::pipeline::FrequencySummary;
use crate::tokens::ranking::FrequencyRow;

const BAR_WIDTH: usize = 20;
const TOKEN_DISPLAY_CHARS: usize = 24;

/// Build a bar scaled against the largest percentage shown.
pub fn frequency_bar(percentage: f64, max_percentage: f64) -> String {
    let filled = if max_percentage > 0.0 {
        ((percentage / max_percentage) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

/// Print the run totals and the top `top` rows.
pub fn display_frequency_summary(summary: &FrequencySummary, output: &Path, top: usize) {
    println!(
        "\n{}",
        format!(
            "=== Token Frequencies ({} tokens, {} distinct) ===",
            summary.retained_total,
            summary.rows.len()
        )
        .bold()
    );
    println!(
        "  Read {} lines, {} distinct tokens before filtering",
        summary.lines, summary.distinct_tokens
    );

    if top > 0 {
        display_top_rows(&summary.rows[..top.min(summary.rows.len())]);
    }

    println!("\n{}", format!("Frequency table saved to: {}", output.display()).bold());
}

fn display_top_rows(rows: &[FrequencyRow]) {
    let max_percentage = rows
        .iter()
        .map(|r| r.percentage)
        .fold(0.0_f64, f64::max);

    println!();
    println!(
        "  {:>4}  {:<24} {:>8}  {:>8}",
        "Rank".dimmed(),
        "Token".dimmed(),
        "Count".dimmed(),
        "Percent".dimmed(),
    );
    println!("  {}", "-".repeat(72).dimmed());

    for (i, row) in rows.iter().enumerate() {
        let bar = frequency_bar(row.percentage, max_percentage);
        let colored_bar = if row.percentage >= 10.0 {
            bar.bright_green()
        } else if row.percentage >= 1.0 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };
        println!(
            "  {:>4}. {:<24} {:>8}  {:>7.2}%  {}",
            i + 1,
            super::truncate_chars(&row.token, TOKEN_DISPLAY_CHARS),
            row.count,
            row.percentage,
            colored_bar,
        );
    }
}

/// Print where the random values went.
pub fn display_random_summary(config: &RandomConfig) {
    let seed = match config.seed {
        Some(seed) => format!("seed {seed}"),
        None => "unseeded".dimmed().to_string(),
    };
    println!(
        "{} {} values in [0, {}] ({}) to {}",
        "Wrote".bold(),
        config.count,
        config.max_value,
        seed,
        config.output.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_largest() {
        assert_eq!(frequency_bar(50.0, 50.0), format!("[{}]", "=".repeat(20)));
        assert_eq!(
            frequency_bar(25.0, 50.0),
            format!("[{}{}]", "=".repeat(10), " ".repeat(10))
        );
        assert_eq!(frequency_bar(1.0, 0.0), format!("[{}]", " ".repeat(20)));
    }
}
