//! Run configuration with documented defaults
//!
//! The tools used to rely on implicit keyword defaults (vowel set, sample
//! size, trial count). Those now live in these structs and are passed
//! explicitly to every call that needs them.

use serde::{Deserialize, Serialize};

use crate::core::error::{PhonoError, Result};
use crate::core::types::{SegmentSet, Universe};

/// The five cardinal vowels
pub const DEFAULT_VOWELS: &str = "a e i o u";

/// Number of affixes attested in the Quechua newspaper corpus
pub const DEFAULT_SAMPLE_SIZE: usize = 76;

pub const DEFAULT_TRIALS: usize = 1_000_000;

/// Configuration for CV skeleton counting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonConfig {
    /// Segments classified as `V`; everything else is `C`
    pub vowels: SegmentSet,
}

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            vowels: SegmentSet::from_listing(DEFAULT_VOWELS),
        }
    }
}

impl SkeletonConfig {
    /// Override the vowel set from a space-separated listing
    pub fn with_vowel_listing(listing: &str) -> Self {
        Self {
            vowels: SegmentSet::from_listing(listing),
        }
    }
}

/// Configuration for the natural-class resampler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResampleConfig {
    /// Entries drawn (with replacement) per trial
    ///
    /// Proportions are `members / sample_size`, so this must be at least 1.
    pub sample_size: usize,

    /// Number of independent trials
    ///
    /// Each trial contributes one proportion to the interval estimate.
    pub trials: usize,

    /// Whether repeated corpus lines count once or once per occurrence
    pub universe: Universe,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            trials: DEFAULT_TRIALS,
            universe: Universe::UniqueLines,
        }
    }
}

impl ResampleConfig {
    /// Validate configuration before any sampling happens
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(PhonoError::InvalidConfig(
                "sample_size must be at least 1 (proportions divide by it)".into(),
            ));
        }
        if self.trials == 0 {
            return Err(PhonoError::InvalidConfig(
                "trials must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
