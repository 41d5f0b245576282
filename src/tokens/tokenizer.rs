// Line tokenizer and count aggregation.
//
// Delimiter characters act exactly like whitespace: they separate tokens
// and never appear inside one. Tokens are lower-cased so "Cat" and "CAT"
// land in the same bucket.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::FreqError;

/// Punctuation treated as token separators.
pub const DELIMITERS: [char; 27] = [
    '.', ',', ';', ':', '?', '$', '@', '^', '<', '>', '#', '%', '`', '!', '*', '+', '-', '=', '(',
    ')', '[', ']', '{', '}', '/', '"', '\'',
];

/// Map from lower-cased token to number of occurrences.
pub type TokenCounts = HashMap<String, u64>;

fn is_separator(c: char) -> bool {
    // U+001C..U+001F count as whitespace for splitting too
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c) || DELIMITERS.contains(&c)
}

/// Split a line into lower-cased tokens.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(is_separator)
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.trim().to_lowercase())
}

/// Tokenize one line and add its tokens to `counts`.
pub fn update_token_counts(line: &str, counts: &mut TokenCounts) {
    for token in tokenize(line) {
        *counts.entry(token).or_insert(0) += 1;
    }
}

/// Build a fresh count map from a sequence of lines.
pub fn calculate_token_counts<I, S>(lines: I) -> TokenCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = TokenCounts::new();
    for line in lines {
        update_token_counts(line.as_ref(), &mut counts);
    }
    counts
}

/// Read a UTF-8 text file and return its lines without terminators.
pub fn load_text(path: &Path) -> Result<Vec<String>, FreqError> {
    let contents = std::fs::read_to_string(path).map_err(|e| FreqError::io(path, e))?;
    let lines: Vec<String> = contents.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "Loaded input text");
    Ok(lines)
}
