//! CV skeleton counting
//!
//! Every word is reduced to its consonant/vowel pattern (`p a t` -> `C V C`)
//! and the patterns are tallied over the whole corpus.

pub mod tally;

pub use tally::SkeletonTally;

use std::io::{BufRead, Write};
use std::path::Path;

use crate::core::config::SkeletonConfig;
use crate::core::error::Result;
use crate::core::types::SegmentSet;
use crate::corpus;

/// Reduce a segment sequence to its space-joined CV skeleton
pub fn skeleton_of<'a>(segments: impl Iterator<Item = &'a str>, vowels: &SegmentSet) -> String {
    segments
        .map(|s| if vowels.contains(s) { "V" } else { "C" })
        .collect::<Vec<_>>()
        .join(" ")
}

impl SkeletonTally {
    /// Tally skeleta from any line source
    ///
    /// Only the first tab-delimited field of a line is segmented.
    pub fn from_reader<R: BufRead>(reader: R, config: &SkeletonConfig) -> Result<Self> {
        let mut tally = SkeletonTally::new();
        for line in reader.lines() {
            let line = line?;
            tally.add(skeleton_of(corpus::leading_segments(&line), &config.vowels));
        }
        Ok(tally)
    }

    /// Write `skeleton<TAB>count` lines, most frequent first
    pub fn write_sorted<W: Write>(&self, out: &mut W) -> Result<()> {
        for (skeleton, count) in self.sorted() {
            writeln!(out, "{}\t{}", skeleton, count)?;
        }
        Ok(())
    }
}

/// Tally the CV skeleta of a corpus file
pub fn tally_corpus(path: &Path, config: &SkeletonConfig) -> Result<SkeletonTally> {
    let tally = SkeletonTally::from_reader(corpus::open(path)?, config)?;
    tracing::info!(
        path = %path.display(),
        lines = tally.total(),
        skeleta = tally.len(),
        "tallied skeleta"
    );
    Ok(tally)
}
