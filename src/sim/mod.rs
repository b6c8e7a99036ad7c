//! Natural-class simulation driver
//!
//! For each selected class: label the corpus, report the lexical
//! distribution, then resample and summarize with a confidence interval.

pub mod output;

pub use output::{ClassOutcome, ResampleSummary, SimulationOutput};

use std::io::Write;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::ResampleConfig;
use crate::core::error::Result;
use crate::corpus;
use crate::natclass::{label_lines, ClassInventory, NaturalClass};
use crate::plot;
use crate::resample::{resample, SampleObserver, SamplingUniverse};

/// Default corpus file, relative to the working directory
pub const DEFAULT_CORPUS: &str = "quechua_morphemes.txt";

/// Configuration for a natural-class run
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub corpus: PathBuf,
    pub resample: ResampleConfig,
    /// Class names to run; empty means the inventory's default selection
    pub classes: Vec<String>,
    /// Report lexical distributions only, skipping resampling
    pub counts_only: bool,
    pub seed: u64,
    /// Directory for per-class histogram PNGs
    pub plot_dir: Option<PathBuf>,
    pub bins: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            corpus: PathBuf::from(DEFAULT_CORPUS),
            resample: ResampleConfig::default(),
            classes: Vec::new(),
            counts_only: false,
            seed: 12345,
            plot_dir: None,
            bins: plot::DEFAULT_BINS,
        }
    }
}

/// Run every selected class against the corpus, writing the report to `out`
pub fn simulate<W: Write>(
    config: &SimConfig,
    inventory: &ClassInventory,
    out: &mut W,
    observer: &mut dyn SampleObserver,
) -> Result<SimulationOutput> {
    if !config.counts_only {
        config.resample.validate()?;
    }

    let classes = inventory.select(&config.classes)?;
    let lines = corpus::read_lines(&config.corpus)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

    if let Some(dir) = &config.plot_dir {
        std::fs::create_dir_all(dir)?;
    }

    tracing::info!(
        corpus = %config.corpus.display(),
        lines = lines.len(),
        classes = classes.len(),
        seed = config.seed,
        "starting natural-class run"
    );

    let mut outcomes = Vec::with_capacity(classes.len());
    for class in classes {
        outcomes.push(run_class(config, class, &lines, &mut rng, out, observer)?);
    }

    Ok(SimulationOutput {
        corpus: config.corpus.clone(),
        seed: config.seed,
        sample_size: config.resample.sample_size,
        trials: config.resample.trials,
        universe: config.resample.universe,
        classes: outcomes,
    })
}

fn run_class<W: Write>(
    config: &SimConfig,
    class: &NaturalClass,
    lines: &[String],
    rng: &mut ChaCha8Rng,
    out: &mut W,
    observer: &mut dyn SampleObserver,
) -> Result<ClassOutcome> {
    tracing::debug!(class = %class.name, segments = %class.segments, "labeling corpus");

    writeln!(out, "{}: {}", class.name, class.segments)?;
    let labeling = label_lines(lines.iter().cloned(), &class.segments);

    writeln!(out, "lexical distribution of your natural class in roots\n")?;
    labeling.counts.write_report(out)?;

    let universe = SamplingUniverse::from_labeling(&labeling, config.resample.universe);
    let mut outcome = ClassOutcome {
        name: class.name.clone(),
        segments: class.segments.iter().map(str::to_string).collect(),
        lexical: labeling.counts,
        universe_size: universe.len(),
        resample: None,
    };

    if config.counts_only {
        return Ok(outcome);
    }

    let result = resample(&universe, &config.resample, rng, observer)?;
    let interval = result.interval()?;

    writeln!(out, "natclass\t{}\n", result.natclass)?;
    writeln!(out, "no_natclass\t{}\n", result.no_natclass)?;
    writeln!(out, "{}\n", interval)?;

    if let Some(dir) = &config.plot_dir {
        let path = dir.join(format!("{}.png", class.name));
        plot::render_histogram(&result.proportions, &interval, config.bins, &path)?;
    }

    outcome.resample = Some(ResampleSummary {
        natclass: result.natclass,
        no_natclass: result.no_natclass,
        interval,
    });
    Ok(outcome)
}
