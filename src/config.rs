// Validated run configuration for both tools.
//
// The binaries collect raw strings from the command line; everything here
// turns those strings into typed settings or an InvalidArgument error.

use std::path::PathBuf;

use crate::error::FreqError;
use crate::tokens::ranking::SortOrder;

/// Minimum token length used when none is given.
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Settings for one frequency-count run.
#[derive(Debug, Clone, PartialEq)]
pub struct CountConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Tokens shorter than this (in characters) are dropped
    pub min_length: usize,
    pub order: SortOrder,
}

impl CountConfig {
    /// Build a config from the positional arguments.
    ///
    /// A missing input file and a missing output file are distinct usage
    /// errors so the binary can exit with different codes for each.
    pub fn from_args(
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        min_length: Option<&str>,
    ) -> Result<Self, FreqError> {
        let input = input.ok_or(FreqError::MissingInput)?;
        let output = output.ok_or(FreqError::MissingOutput)?;
        let min_length = match min_length {
            Some(raw) => parse_min_length(raw)?,
            None => DEFAULT_MIN_LENGTH,
        };
        Ok(Self {
            input,
            output,
            min_length,
            order: SortOrder::Descending,
        })
    }
}

/// Settings for one random-file run.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomConfig {
    pub output: PathBuf,
    /// Inclusive upper bound of each value
    pub max_value: u64,
    /// How many values to write
    pub count: u64,
    /// Seed for a reproducible sequence; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl RandomConfig {
    pub fn from_args(
        output: PathBuf,
        max_random: &str,
        max_values: &str,
        seed: Option<&str>,
    ) -> Result<Self, FreqError> {
        Ok(Self {
            output,
            max_value: parse_count("MAX_RANDOM", max_random)?,
            count: parse_count("MAX_VALUES", max_values)?,
            seed: seed.map(parse_seed).transpose()?,
        })
    }
}

/// Parse MINIMUM_LENGTH: an integer of at least 1.
pub fn parse_min_length(raw: &str) -> Result<usize, FreqError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| FreqError::invalid("MINIMUM_LENGTH", raw, "not an integer"))?;
    if value < 1 {
        return Err(FreqError::invalid(
            "MINIMUM_LENGTH",
            raw,
            "must be at least 1",
        ));
    }
    usize::try_from(value).map_err(|_| FreqError::invalid("MINIMUM_LENGTH", raw, "too large"))
}

/// Parse a non-negative integer argument such as MAX_RANDOM or MAX_VALUES.
pub fn parse_count(name: &'static str, raw: &str) -> Result<u64, FreqError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u64>() {
        return Ok(value);
    }
    match trimmed.parse::<i128>() {
        Ok(v) if v < 0 => Err(FreqError::invalid(name, raw, "must be non-negative")),
        Ok(_) => Err(FreqError::invalid(name, raw, "too large")),
        Err(_) => Err(FreqError::invalid(name, raw, "not an integer")),
    }
}

/// Parse SEED. Any 64-bit integer is accepted; negative seeds map onto
/// their two's-complement bit pattern.
pub fn parse_seed(raw: &str) -> Result<u64, FreqError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u64>()
        .or_else(|_| trimmed.parse::<i64>().map(|v| v as u64))
        .map_err(|_| FreqError::invalid("SEED", raw, "not a 64-bit integer"))
}
