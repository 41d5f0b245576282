use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use tokfreq::config::RandomConfig;
use tokfreq::error::{FreqError, USAGE_EXIT_CODE};

/// Create a file of random numbers.
///
/// Writes MAX_VALUES integers to FILE, one per line, each drawn uniformly
/// from 0 to MAX_RANDOM inclusive. Giving SEED makes the file reproducible.
#[derive(Parser)]
#[command(name = "randoms", version, about)]
struct Cli {
    /// File to write
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Largest value that may be generated
    #[arg(value_name = "MAX_RANDOM", allow_negative_numbers = true)]
    max_random: String,

    /// Number of values to generate
    #[arg(value_name = "MAX_VALUES", allow_negative_numbers = true)]
    max_values: String,

    /// Seed for a reproducible sequence
    #[arg(value_name = "SEED", allow_negative_numbers = true)]
    seed: Option<String>,

    /// Don't print a summary or progress bar
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    tokfreq::logging::init("randoms");

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
            debug!(error = %e, code, "randoms failed");
            eprintln!("Error: {e:#}");
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RandomConfig::from_args(
        cli.file,
        &cli.max_random,
        &cli.max_values,
        cli.seed.as_deref(),
    )?;

    info!(
        output = %config.output.display(),
        max = config.max_value,
        count = config.count,
        "Generating random values"
    );

    let pb = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(config.count);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Values [{bar:30}] {pos}/{len} ({eta})")
                .context("building progress bar style")?,
        );
        pb
    };

    tokfreq::randoms::generate_random_file(&config, &pb)
        .with_context(|| format!("writing random values to {}", config.output.display()))?;
    pb.finish_and_clear();

    if !cli.quiet {
        tokfreq::output::terminal::display_random_summary(&config);
    }

    Ok(())
}
