//! Skeleton tally - skeleton pattern -> occurrence count

use ahash::AHashMap;
use serde::Serialize;

/// Counts of each CV skeleton seen in a corpus
///
/// Entries are stored in first-occurrence order, which is also the tie order
/// when sorting by count.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkeletonTally {
    entries: Vec<(String, u64)>,
    #[serde(skip)]
    index: AHashMap<String, usize>,
}

impl SkeletonTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a skeleton
    pub fn add(&mut self, skeleton: String) {
        match self.index.get(&skeleton) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(skeleton.clone(), self.entries.len());
                self.entries.push((skeleton, 1));
            }
        }
    }

    /// Count for a skeleton (0 if never seen)
    pub fn get(&self, skeleton: &str) -> u64 {
        self.index
            .get(skeleton)
            .map(|&i| self.entries[i].1)
            .unwrap_or(0)
    }

    /// Number of distinct skeleta
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences across all skeleta
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// Entries sorted by descending count, ties in first-occurrence order
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}
