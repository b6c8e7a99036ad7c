//! Integration tests for natural-class labeling and resampling
//!
//! These tests exercise the labeler -> universe -> resampler -> interval
//! pipeline over corpus files, including the duplicate-line universe choice.

use std::path::PathBuf;

use phonotactics::core::config::ResampleConfig;
use phonotactics::core::types::{SegmentSet, Universe};
use phonotactics::natclass::{label_corpus, label_lines};
use phonotactics::resample::{
    confidence_interval, resample, NoopObserver, SampleObserver, SamplingUniverse,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn write_corpus(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("phonotactics_resample_{}.txt", name));
    std::fs::write(&path, content).unwrap();
    path
}

fn config(sample_size: usize, trials: usize, universe: Universe) -> ResampleConfig {
    ResampleConfig {
        sample_size,
        trials,
        universe,
    }
}

/// Records whether a given line was drawn in each trial
struct DrawRecorder {
    target: &'static str,
    seen: Vec<bool>,
}

impl SampleObserver for DrawRecorder {
    fn on_sample(
        &mut self,
        _trial: usize,
        drawn: &[&str],
        _members: &[&str],
    ) -> phonotactics::core::error::Result<()> {
        self.seen.push(drawn.contains(&self.target));
        Ok(())
    }
}

#[test]
fn test_single_trial_matches_draw() {
    let path = write_corpus("single_trial", "p a t\nt k\nk i p\n");
    let class = SegmentSet::from_listing("a");
    let labeling = label_corpus(&path, &class).unwrap();

    let labels: Vec<_> = labeling.membership.iter().map(|(_, m)| m).collect();
    assert_eq!(labels, vec![true, false, false]);

    let universe = SamplingUniverse::from_labeling(&labeling, Universe::UniqueLines);
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut recorder = DrawRecorder {
            target: "p a t",
            seen: Vec::new(),
        };
        let result = resample(
            &universe,
            &config(3, 1, Universe::UniqueLines),
            &mut rng,
            &mut recorder,
        )
        .unwrap();

        assert!(result.natclass <= 1);
        assert_eq!(result.natclass == 1, recorder.seen[0]);
    }
}

#[test]
fn test_universe_choice_with_duplicates() {
    let path = write_corpus("duplicates", "q' a\nq' a\nq' a\nm a\n");
    let class = SegmentSet::from_listing("q'");
    let labeling = label_corpus(&path, &class).unwrap();

    assert_eq!(labeling.counts.natclass, 3);
    assert_eq!(labeling.counts.no_natclass, 1);

    let unique = SamplingUniverse::from_labeling(&labeling, Universe::UniqueLines);
    let all = SamplingUniverse::from_labeling(&labeling, Universe::AllLines);
    assert_eq!(unique.len(), 2);
    assert_eq!(unique.member_count(), 1);
    assert_eq!(all.len(), 4);
    assert_eq!(all.member_count(), 3);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let unique_result = resample(
        &unique,
        &config(1, 20_000, Universe::UniqueLines),
        &mut rng,
        &mut NoopObserver,
    )
    .unwrap();
    let all_result = resample(
        &all,
        &config(1, 20_000, Universe::AllLines),
        &mut rng,
        &mut NoopObserver,
    )
    .unwrap();

    let unique_mean = unique_result.interval().unwrap().mean;
    let all_mean = all_result.interval().unwrap().mean;
    assert!((unique_mean - 0.5).abs() < 0.03);
    assert!((all_mean - 0.75).abs() < 0.03);
}

#[test]
fn test_interval_covers_true_rate() {
    let lines: Vec<String> = (0..10)
        .map(|i| if i < 2 { format!("t' a {}", i) } else { format!("t a {}", i) })
        .collect();
    let labeling = label_lines(lines, &SegmentSet::from_listing("t'"));
    let universe = SamplingUniverse::from_labeling(&labeling, Universe::UniqueLines);

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let result = resample(
        &universe,
        &config(10, 5_000, Universe::UniqueLines),
        &mut rng,
        &mut NoopObserver,
    )
    .unwrap();
    let interval = result.interval().unwrap();

    // True member share is 0.2; the interval is tight at 5000 trials
    assert!((interval.mean - 0.2).abs() < 0.01);
    assert!(interval.lower <= interval.mean && interval.mean <= interval.upper);
    assert!(interval.half_width() < 0.01);
}

#[test]
fn test_empty_corpus_cannot_be_sampled() {
    let path = write_corpus("empty", "");
    let labeling = label_corpus(&path, &SegmentSet::from_listing("a")).unwrap();
    let universe = SamplingUniverse::from_labeling(&labeling, Universe::UniqueLines);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert!(resample(
        &universe,
        &config(3, 3, Universe::UniqueLines),
        &mut rng,
        &mut NoopObserver
    )
    .is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_trial_counts_and_proportions(
        labels in prop::collection::vec(any::<bool>(), 1..20),
        sample_size in 1usize..15,
        trials in 1usize..60,
        seed in any::<u64>(),
    ) {
        let names: Vec<String> = (0..labels.len()).map(|i| format!("w{}", i)).collect();
        let entries: Vec<(&str, bool)> = names.iter().map(String::as_str).zip(labels.iter().copied()).collect();
        let universe = SamplingUniverse::new(entries);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let result = resample(&universe, &config(sample_size, trials, Universe::UniqueLines), &mut rng, &mut NoopObserver).unwrap();

        prop_assert_eq!(result.natclass + result.no_natclass, trials as u64);
        prop_assert!(result.proportions.iter().all(|p| (0.0..=1.0).contains(p)));
        if labels.iter().all(|&m| m) {
            prop_assert_eq!(result.no_natclass, 0);
        }
        if labels.iter().all(|&m| !m) {
            prop_assert_eq!(result.natclass, 0);
            prop_assert!(result.proportions.iter().all(|&p| p == 0.0));
        }
    }

    #[test]
    fn prop_interval_brackets_mean(values in prop::collection::vec(0.0f64..=1.0, 1..200)) {
        let ci = confidence_interval(&values).unwrap();
        prop_assert!(ci.lower <= ci.mean + 1e-12);
        prop_assert!(ci.mean <= ci.upper + 1e-12);
    }
}
