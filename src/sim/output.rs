//! Simulation output and serialization

use std::path::PathBuf;

use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::Universe;
use crate::natclass::LexicalCounts;
use crate::resample::ConfidenceInterval;

/// Complete output of a natural-class run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutput {
    pub corpus: PathBuf,
    pub seed: u64,
    pub sample_size: usize,
    pub trials: usize,
    pub universe: Universe,
    pub classes: Vec<ClassOutcome>,
}

/// Results for one natural class
#[derive(Debug, Clone, Serialize)]
pub struct ClassOutcome {
    pub name: String,
    pub segments: Vec<String>,
    pub lexical: LexicalCounts,
    /// Distinct entries in the sampling universe
    pub universe_size: usize,
    /// Absent in counts-only runs
    pub resample: Option<ResampleSummary>,
}

/// Resampling counts without the per-trial proportions
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResampleSummary {
    pub natclass: u64,
    pub no_natclass: u64,
    pub interval: ConfidenceInterval,
}

impl SimulationOutput {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        let resampled = self.classes.iter().filter(|c| c.resample.is_some()).count();
        format!(
            "{} classes over {} ({} resampled, {} trials of {} draws, seed {})",
            self.classes.len(),
            self.corpus.display(),
            resampled,
            self.trials,
            self.sample_size,
            self.seed,
        )
    }
}
