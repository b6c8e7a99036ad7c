//! Corpus reading and segmentation
//!
//! A corpus is a UTF-8 text file with one word or morpheme per line. Segments
//! are separated by whitespace. Some corpora carry extra tab-delimited fields
//! (glosses, frequencies) after the segment sequence.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::error::Result;

/// Open a corpus file for line-by-line reading
pub fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), "opened corpus");
    Ok(BufReader::new(file))
}

/// Read every line of a corpus, newline stripped
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let lines = open(path)?.lines().collect::<std::io::Result<Vec<_>>>()?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "read corpus");
    Ok(lines)
}

/// Segments of the first tab-delimited field (the whole line if it has no tab)
pub fn leading_segments(line: &str) -> impl Iterator<Item = &str> {
    let field = line.split('\t').next().unwrap_or("");
    field.split_whitespace()
}

/// Segments of the whole line, every field included
pub fn all_segments(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}
