//! CV skeleton counter
//!
//! Reduces every word of a corpus to its consonant/vowel skeleton and prints
//! `skeleton<TAB>count` lines, most frequent first.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use phonotactics::core::config::SkeletonConfig;
use phonotactics::core::error::Result;
use phonotactics::skeleton::tally_corpus;

/// Count CV skeleton types in a word list
#[derive(Parser, Debug)]
#[command(name = "cvcounts")]
#[command(about = "Reduce words to CV skeleta and count skeleton types")]
struct Args {
    /// Word list, one whitespace-segmented word per line
    input: PathBuf,

    /// Space-separated vowel list overriding "a e i o u"
    vowels: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("phonotactics=info")
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.vowels {
        Some(listing) => SkeletonConfig::with_vowel_listing(listing),
        None => SkeletonConfig::default(),
    };

    let tally = tally_corpus(&args.input, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tally.write_sorted(&mut out)?;
    out.flush()?;
    Ok(())
}
