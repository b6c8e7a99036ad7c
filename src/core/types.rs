//! Core type definitions used throughout the codebase

use std::fmt;
use std::str::FromStr;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// A set of phonetic segments (vowels, or a natural class)
///
/// Membership lookups go through a hash set; the original listing order is kept
/// for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SegmentSet {
    ordered: Vec<String>,
    lookup: AHashSet<String>,
}

impl SegmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a space-separated listing such as `"pʰ tʰ kʰ"`
    pub fn from_listing(listing: &str) -> Self {
        listing.split(' ').filter(|s| !s.is_empty()).collect()
    }

    /// Add a segment, ignoring repeats
    pub fn insert(&mut self, segment: impl Into<String>) -> bool {
        let segment = segment.into();
        if self.lookup.insert(segment.clone()) {
            self.ordered.push(segment);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, segment: &str) -> bool {
        self.lookup.contains(segment)
    }

    /// True if any of the given segments belongs to this set
    pub fn intersects<'a>(&self, mut segments: impl Iterator<Item = &'a str>) -> bool {
        segments.any(|s| self.contains(s))
    }

    /// Union of two sets, keeping `self`'s order first
    pub fn union(&self, other: &SegmentSet) -> SegmentSet {
        self.iter().chain(other.iter()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SegmentSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SegmentSet::new();
        for segment in iter {
            set.insert(segment);
        }
        set
    }
}

impl From<Vec<String>> for SegmentSet {
    fn from(segments: Vec<String>) -> Self {
        segments.into_iter().collect()
    }
}

impl From<SegmentSet> for Vec<String> {
    fn from(set: SegmentSet) -> Self {
        set.ordered
    }
}

impl PartialEq for SegmentSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && other.iter().all(|s| self.contains(s))
    }
}

impl fmt::Display for SegmentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ordered.join(" "))
    }
}

/// Which corpus entries the resampler draws from
///
/// `UniqueLines` keys entries by their text, so repeated lines count once.
/// `AllLines` keeps every line, duplicates included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Universe {
    #[default]
    UniqueLines,
    AllLines,
}

impl FromStr for Universe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unique" | "unique_lines" => Ok(Universe::UniqueLines),
            "all" | "all_lines" => Ok(Universe::AllLines),
            other => Err(format!("unknown universe '{}' (expected 'unique' or 'all')", other)),
        }
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Universe::UniqueLines => write!(f, "unique"),
            Universe::AllLines => write!(f, "all"),
        }
    }
}
