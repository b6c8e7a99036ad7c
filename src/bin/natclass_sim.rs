//! Natural-class resampler
//!
//! Prints, for each natural class, how often its segments occur in the corpus
//! and how often a random sample of morphemes contains at least one of them.
//! The default sample size (76) is the number of affixes attested in the
//! Quechua newspaper corpus.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use phonotactics::core::config::{ResampleConfig, DEFAULT_SAMPLE_SIZE, DEFAULT_TRIALS};
use phonotactics::core::error::Result;
use phonotactics::core::types::Universe;
use phonotactics::natclass::ClassInventory;
use phonotactics::plot::DEFAULT_BINS;
use phonotactics::resample::{NoopObserver, SampleObserver, WriterObserver};
use phonotactics::significance::run_battery;
use phonotactics::sim::{simulate, SimConfig, DEFAULT_CORPUS};

/// Natural-class resampling over a morpheme list
#[derive(Parser, Debug)]
#[command(name = "natclass_sim")]
#[command(about = "Estimate how often random morpheme samples contain a natural class")]
struct Args {
    /// Morpheme list, one whitespace-segmented entry per line
    #[arg(default_value = DEFAULT_CORPUS)]
    corpus: PathBuf,

    /// Entries drawn (with replacement) per trial
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Number of trials per class
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Only print lexical distributions, no resampling
    #[arg(long)]
    counts: bool,

    /// Run the Fisher / chi-square battery afterwards
    #[arg(long)]
    chisq: bool,

    /// Print every drawn sample and its class members
    #[arg(long)]
    print: bool,

    /// Restrict the run to these classes (repeatable)
    #[arg(long = "class")]
    classes: Vec<String>,

    /// TOML file replacing the built-in Quechua inventory
    #[arg(long = "classes")]
    class_file: Option<PathBuf>,

    /// Sampling universe: "unique" lines or "all" lines
    #[arg(long, default_value_t = Universe::UniqueLines)]
    universe: Universe,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Write one histogram PNG per class into this directory
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Histogram bin count
    #[arg(long, default_value_t = DEFAULT_BINS)]
    bins: usize,

    /// Write a JSON summary of the run to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("phonotactics=info")
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    if args.seed.is_none() {
        tracing::info!(seed, "no seed given, drew one from entropy");
    }

    let inventory = match &args.class_file {
        Some(path) => ClassInventory::load_from_toml(path)?,
        None => ClassInventory::quechua(),
    };

    let config = SimConfig {
        corpus: args.corpus,
        resample: ResampleConfig {
            sample_size: args.sample_size,
            trials: args.trials,
            universe: args.universe,
        },
        classes: args.classes,
        counts_only: args.counts,
        seed,
        plot_dir: args.plot_dir,
        bins: args.bins,
    };

    println!(
        "\nFor each natural class, prints how often its segments occur in the corpus \
         and how often a random sample of {} morphemes contains one of them.\n",
        config.resample.sample_size
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut printer;
    let mut noop = NoopObserver;
    let observer: &mut dyn SampleObserver = if args.print {
        printer = WriterObserver::new(io::stdout());
        &mut printer
    } else {
        &mut noop
    };

    let output = simulate(&config, &inventory, &mut out, observer)?;
    tracing::info!("{}", output.summary());

    if let Some(path) = &args.json {
        std::fs::write(path, output.to_json()?)?;
        tracing::info!(path = %path.display(), "wrote JSON summary");
    }

    if args.chisq {
        writeln!(out, "contingency tests: roots vs. affixes\n")?;
        run_battery(&mut out)?;
    }

    out.flush()?;
    Ok(())
}
