use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::{debug, info};

use tokfreq::config::CountConfig;
use tokfreq::error::{FreqError, USAGE_EXIT_CODE};
use tokfreq::tokens::ranking::SortOrder;

/// Count token frequencies in a text file.
///
/// Writes OUTPUT_FILE as a table of `token count percentage` rows, most
/// frequent first. If MINIMUM_LENGTH is given, only tokens at least that
/// many characters long are counted towards the table and its percentages.
#[derive(Parser)]
#[command(name = "count-frequency", version, about)]
struct Cli {
    /// Text file to read
    #[arg(value_name = "INPUT_FILE")]
    input: Option<PathBuf>,

    /// Frequency table to write
    #[arg(value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Drop tokens shorter than this many characters (default: 1)
    #[arg(value_name = "MINIMUM_LENGTH", allow_negative_numbers = true)]
    min_length: Option<String>,

    /// Rank by increasing count instead of decreasing
    #[arg(long)]
    ascending: bool,

    /// Rows to show in the terminal summary (0 hides them)
    #[arg(long, default_value = "10")]
    top: usize,

    /// Don't print a summary after writing the table
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    tokfreq::logging::init("count_frequency");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and go to stdout
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(USAGE_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.downcast_ref::<FreqError>().map_or(1, FreqError::exit_code);
            debug!(error = %e, code, "count-frequency failed");
            if matches!(
                e.downcast_ref::<FreqError>(),
                Some(FreqError::MissingInput | FreqError::MissingOutput)
            ) {
                eprintln!("{}", Cli::command().render_usage());
            }
            eprintln!("Error: {e:#}");
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = CountConfig::from_args(cli.input, cli.output, cli.min_length.as_deref())?;
    if cli.ascending {
        config.order = SortOrder::Ascending;
    }

    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        min_length = config.min_length,
        "Counting token frequencies"
    );

    let summary = tokfreq::pipeline::token_count(&config)
        .with_context(|| format!("counting tokens in {}", config.input.display()))?;

    if !cli.quiet {
        tokfreq::output::terminal::display_frequency_summary(&summary, &config.output, cli.top);
    }

    Ok(())
}
