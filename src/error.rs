// Error taxonomy shared by both tools.
//
// Every failure is fatal to the run. The binaries map each variant to a
// process exit code so scripts can tell usage mistakes from bad input.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for command lines clap itself rejects (unknown flags, extra
/// or missing required positionals). Distinct from every `FreqError` code.
pub const USAGE_EXIT_CODE: u8 = 64;

/// Errors raised while counting tokens or generating random files.
#[derive(Debug, Error)]
pub enum FreqError {
    /// No input file was given on the command line.
    #[error("missing INPUT_FILE argument")]
    MissingInput,

    /// An input file was given but no output file.
    #[error("missing OUTPUT_FILE argument")]
    MissingOutput,

    /// A numeric argument failed to parse or is out of range.
    #[error("invalid {name} '{value}': {reason}")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// Reading or writing a file failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A frequency table line could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Nothing survived filtering, so percentages are undefined.
    #[error("empty or zero-total frequency set")]
    EmptyFrequencySet,
}

impl FreqError {
    /// Build an `InvalidArgument` error.
    pub fn invalid(name: &'static str, value: &str, reason: impl Into<String>) -> Self {
        FreqError::InvalidArgument {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FreqError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            FreqError::MissingInput => 1,
            FreqError::MissingOutput => 2,
            FreqError::InvalidArgument { .. } => 3,
            FreqError::Io { .. } => 4,
            FreqError::Parse { .. } => 5,
            FreqError::EmptyFrequencySet => 6,
        }
    }
}
