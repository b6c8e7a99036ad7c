//! Monte Carlo resampling over a labeled corpus

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::Serialize;

use crate::core::config::ResampleConfig;
use crate::core::error::{PhonoError, Result};
use crate::core::types::Universe;
use crate::natclass::Labeling;
use crate::resample::interval::{confidence_interval, ConfidenceInterval};
use crate::resample::observer::SampleObserver;

/// The pool of labeled entries a run draws from
#[derive(Debug, Clone, Default)]
pub struct SamplingUniverse<'a> {
    entries: Vec<(&'a str, bool)>,
}

impl<'a> SamplingUniverse<'a> {
    pub fn new(entries: Vec<(&'a str, bool)>) -> Self {
        Self { entries }
    }

    /// Build the universe from a labeling
    ///
    /// `UniqueLines` uses the membership map (one entry per distinct line);
    /// `AllLines` uses every corpus line.
    pub fn from_labeling(labeling: &'a Labeling, universe: Universe) -> Self {
        let entries = match universe {
            Universe::UniqueLines => labeling.membership.iter().collect(),
            Universe::AllLines => labeling
                .lines
                .iter()
                .map(|(line, member)| (line.as_str(), *member))
                .collect(),
        };
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries labeled as class members
    pub fn member_count(&self) -> usize {
        self.entries.iter().filter(|(_, m)| *m).count()
    }
}

/// Outcome of a resampling run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResampleResult {
    /// Trials whose sample held at least one member
    pub natclass: u64,
    /// Trials whose sample held no member
    pub no_natclass: u64,
    /// Member share of each sample, in trial order
    pub proportions: Vec<f64>,
}

impl ResampleResult {
    pub fn trials(&self) -> u64 {
        self.natclass + self.no_natclass
    }

    pub fn interval(&self) -> Result<ConfidenceInterval> {
        confidence_interval(&self.proportions)
    }
}

/// Draw `config.trials` samples of `config.sample_size` entries with replacement
pub fn resample<R: Rng + ?Sized>(
    universe: &SamplingUniverse<'_>,
    config: &ResampleConfig,
    rng: &mut R,
    observer: &mut dyn SampleObserver,
) -> Result<ResampleResult> {
    config.validate()?;
    if universe.is_empty() {
        return Err(PhonoError::EmptyUniverse);
    }

    let pick = Uniform::new(0, universe.len());
    let materialize = observer.wants_samples();
    let mut drawn: Vec<&str> = Vec::new();
    let mut members: Vec<&str> = Vec::new();

    let mut result = ResampleResult {
        proportions: Vec::with_capacity(config.trials),
        ..ResampleResult::default()
    };

    for trial in 0..config.trials {
        drawn.clear();
        members.clear();
        let mut hits = 0usize;

        for _ in 0..config.sample_size {
            let (line, member) = universe.entries[pick.sample(rng)];
            if member {
                hits += 1;
            }
            if materialize {
                drawn.push(line);
                if member {
                    members.push(line);
                }
            }
        }

        if materialize {
            observer.on_sample(trial, &drawn, &members)?;
        }

        if hits > 0 {
            result.natclass += 1;
        } else {
            result.no_natclass += 1;
        }
        result
            .proportions
            .push(hits as f64 / config.sample_size as f64);
    }

    tracing::debug!(
        trials = config.trials,
        natclass = result.natclass,
        no_natclass = result.no_natclass,
        "resampling finished"
    );
    Ok(result)
}
