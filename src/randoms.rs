// Random number file generation.
//
// Values are uniform over [0, max_value] inclusive and written one per line
// as they are drawn. A seed gives a reproducible file; without one the
// generator is seeded from the operating system.

use std::fs::File;
use std::io::{BufWriter, Write};

use indicatif::ProgressBar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::RandomConfig;
use crate::error::FreqError;

/// Build the generator for a run.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Draw `count` values in [0, max_value] and write each on its own line.
pub fn write_random_values<W: Write, R: Rng>(
    writer: &mut W,
    rng: &mut R,
    max_value: u64,
    count: u64,
    progress: &ProgressBar,
) -> std::io::Result<()> {
    for _ in 0..count {
        let value = rng.random_range(0..=max_value);
        writeln!(writer, "{value}")?;
        progress.inc(1);
    }
    writer.flush()
}

/// Create `config.output` and fill it with random values.
pub fn generate_random_file(config: &RandomConfig, progress: &ProgressBar) -> Result<(), FreqError> {
    let path = &config.output;
    let file = File::create(path).map_err(|e| FreqError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut rng = make_rng(config.seed);

    write_random_values(
        &mut writer,
        &mut rng,
        config.max_value,
        config.count,
        progress,
    )
    .map_err(|e| FreqError::io(path, e))?;

    info!(
        path = %path.display(),
        values = config.count,
        max = config.max_value,
        seeded = config.seed.is_some(),
        "Wrote random values"
    );
    Ok(())
}
