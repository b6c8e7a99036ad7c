//! Integration tests for the CV skeleton counter
//!
//! These tests run the counter over corpus files on disk:
//! - Plain and tab-delimited word lists
//! - Vowel set overrides
//! - Tally invariants (line totals, skeleton length)

use std::path::PathBuf;

use phonotactics::core::config::SkeletonConfig;
use phonotactics::core::error::PhonoError;
use phonotactics::corpus;
use phonotactics::skeleton::{skeleton_of, tally_corpus};
use proptest::prelude::*;

fn write_corpus(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("phonotactics_skeleton_{}.txt", name));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_pat_is_cvc() {
    let path = write_corpus("pat", "p a t\n");
    let tally = tally_corpus(&path, &SkeletonConfig::default()).unwrap();
    assert_eq!(tally.get("C V C"), 1);
    assert_eq!(tally.total(), 1);
}

#[test]
fn test_custom_vowels_scenario() {
    let path = write_corpus("custom_vowels", "p a\nt a\nk i\n");
    let config = SkeletonConfig::with_vowel_listing("a i");
    let tally = tally_corpus(&path, &config).unwrap();

    assert_eq!(tally.len(), 1);
    assert_eq!(tally.get("C V"), 3);
}

#[test]
fn test_vowel_override_changes_classification() {
    let path = write_corpus("override", "ɨ p\n");
    let default = tally_corpus(&path, &SkeletonConfig::default()).unwrap();
    assert_eq!(default.get("C C"), 1);

    let custom = tally_corpus(&path, &SkeletonConfig::with_vowel_listing("a i u ɨ")).unwrap();
    assert_eq!(custom.get("V C"), 1);
}

#[test]
fn test_tab_delimited_corpus_output() {
    let path = write_corpus(
        "tabbed",
        "w a s i\thouse\nk a\tthis\nm a y u\triver\nɲ a\talready\n\n",
    );
    let tally = tally_corpus(&path, &SkeletonConfig::default()).unwrap();

    let mut out = Vec::new();
    tally.write_sorted(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text, "C V C V\t2\nC V\t2\n\t1\n");
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("phonotactics_skeleton_missing.txt");
    let err = tally_corpus(&path, &SkeletonConfig::default());
    assert!(matches!(err, Err(PhonoError::Io(_))));
}

proptest! {
    #[test]
    fn prop_total_equals_line_count(
        words in prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!["p", "t", "a", "i", "q'", "u"]), 0..6),
            1..40,
        )
    ) {
        let content: String = words.iter().map(|w| format!("{}\n", w.join(" "))).collect();
        let tally = phonotactics::skeleton::SkeletonTally::from_reader(
            std::io::Cursor::new(content),
            &SkeletonConfig::default(),
        ).unwrap();
        prop_assert_eq!(tally.total(), words.len() as u64);
    }

    #[test]
    fn prop_skeleton_length_matches_segments(
        word in prop::collection::vec(prop::sample::select(vec!["p", "t", "a", "e", "kʰ"]), 0..10)
    ) {
        let line = word.join(" ");
        let config = SkeletonConfig::default();
        let skeleton = skeleton_of(corpus::leading_segments(&line), &config.vowels);
        prop_assert_eq!(skeleton.split_whitespace().count(), word.len());
    }
}
