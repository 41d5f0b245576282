// Frequency table file format.
//
//   # Frequency data
//   # Format: token count percentage
//   the 120 6.0
//   ...
//
// Readers skip `#` lines. Every other line, blank ones included, needs at
// least three whitespace-separated fields.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::FreqError;

use super::ranking::FrequencyRow;

pub const HEADER: [&str; 2] = ["# Frequency data", "# Format: token count percentage"];

/// Render a percentage in shortest round-trip form, always with a
/// fractional part or exponent (100.0, not 100).
pub fn format_percentage(value: f64) -> String {
    format!("{value:?}")
}

impl fmt::Display for FrequencyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.token,
            self.count,
            format_percentage(self.percentage)
        )
    }
}

/// Write the header and one line per row.
pub fn write_token_counts<W: Write>(writer: &mut W, rows: &[FrequencyRow]) -> std::io::Result<()> {
    for line in HEADER {
        writeln!(writer, "{line}")?;
    }
    for row in rows {
        writeln!(writer, "{row}")?;
    }
    writer.flush()
}

/// Create (or truncate) `path` and write the table to it.
pub fn save_token_counts(path: &Path, rows: &[FrequencyRow]) -> Result<(), FreqError> {
    let file = File::create(path).map_err(|e| FreqError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_token_counts(&mut writer, rows).map_err(|e| FreqError::io(path, e))?;
    info!(path = %path.display(), rows = rows.len(), "Saved frequency table");
    Ok(())
}

/// Parse one data line. `line_no` is 1-based and only used in errors.
fn parse_row(line: &str, line_no: usize) -> Result<FrequencyRow, FreqError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(FreqError::Parse {
            line: line_no,
            reason: format!("expected 3 fields, found {}", fields.len()),
        });
    }
    let count = fields[1].parse::<u64>().map_err(|_| FreqError::Parse {
        line: line_no,
        reason: format!("invalid count '{}'", fields[1]),
    })?;
    let percentage = fields[2].parse::<f64>().map_err(|_| FreqError::Parse {
        line: line_no,
        reason: format!("invalid percentage '{}'", fields[2]),
    })?;
    Ok(FrequencyRow {
        token: fields[0].to_string(),
        count,
        percentage,
    })
}

/// Read rows from any buffered source. `source` names where the rows come
/// from and is reported when reading fails.
pub fn read_token_counts<R: BufRead>(
    reader: R,
    source: &Path,
) -> Result<Vec<FrequencyRow>, FreqError> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| FreqError::io(source, e))?;
        if line.starts_with('#') {
            continue;
        }
        rows.push(parse_row(&line, idx + 1)?);
    }
    Ok(rows)
}

/// Load a table previously written by `save_token_counts`.
pub fn load_token_counts(path: &Path) -> Result<Vec<FrequencyRow>, FreqError> {
    let file = File::open(path).map_err(|e| FreqError::io(path, e))?;
    read_token_counts(BufReader::new(file), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_keeps_fraction() {
        assert_eq!(format_percentage(100.0), "100.0");
        assert_eq!(format_percentage(50.0), "50.0");
        assert_eq!(format_percentage(100.0 / 3.0), "33.333333333333336");
    }

    #[test]
    fn row_display_matches_file_format() {
        let row = FrequencyRow {
            token: "dog".to_string(),
            count: 3,
            percentage: 100.0,
        };
        assert_eq!(row.to_string(), "dog 3 100.0");
    }

    #[test]
    fn writes_header_then_rows() {
        let rows = vec![FrequencyRow {
            token: "cat".to_string(),
            count: 3,
            percentage: 100.0,
        }];
        let mut buf = Vec::new();
        write_token_counts(&mut buf, &rows).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "# Frequency data\n# Format: token count percentage\ncat 3 100.0\n"
        );
    }

    fn read(text: &str) -> Result<Vec<FrequencyRow>, FreqError> {
        read_token_counts(text.as_bytes(), Path::new("table.dat"))
    }

    #[test]
    fn reader_skips_comments() {
        let text = "# Frequency data\n# anything\nthe 2 66.66\nof 1 33.33 extra\n";
        let rows = read(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].token, "the");
        assert_eq!(rows[1].count, 1);
        assert!((rows[1].percentage - 33.33).abs() < 1e-9);
    }

    #[test]
    fn reader_rejects_short_lines() {
        let err = read("# h\nthe 2\n").unwrap_err();
        assert!(matches!(err, FreqError::Parse { line: 2, .. }));
    }

    #[test]
    fn reader_rejects_blank_lines() {
        let err = read("# Frequency data\nthe 2 50.0\n\nof 2 50.0\n").unwrap_err();
        assert!(matches!(err, FreqError::Parse { line: 3, .. }));
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let bytes: &[u8] = b"# Frequency data\nthe 2 \xff\xfe\n";
        let err = read_token_counts(bytes, Path::new("broken.dat")).unwrap_err();
        assert!(matches!(err, FreqError::Io { .. }));
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().starts_with("broken.dat: "));
    }

    #[test]
    fn reader_rejects_bad_numbers() {
        assert!(read("the two 50.0\n").is_err());
        assert!(read("the 2 half\n").is_err());
    }
}
