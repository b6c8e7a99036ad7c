//! Natural-class membership labeling
//!
//! Each corpus line is labeled by whether any of its segments belongs to a
//! natural class. The labels feed both the lexical distribution report and
//! the resampler's universe.

use std::io::Write;
use std::path::Path;

use ahash::AHashMap;
use serde::Serialize;

use crate::core::error::{PhonoError, Result};
use crate::core::types::SegmentSet;
use crate::corpus;

/// Line text -> membership label
///
/// Repeated lines collapse to one entry; the last label written wins. Keys keep
/// their first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct MembershipMap {
    keys: Vec<String>,
    labels: Vec<bool>,
    index: AHashMap<String, usize>,
}

impl MembershipMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, line: String, member: bool) {
        match self.index.get(&line) {
            Some(&i) => self.labels[i] = member,
            None => {
                self.index.insert(line.clone(), self.keys.len());
                self.keys.push(line);
                self.labels.push(member);
            }
        }
    }

    pub fn get(&self, line: &str) -> Option<bool> {
        self.index.get(line).map(|&i| self.labels[i])
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.keys.iter().map(String::as_str).zip(self.labels.iter().copied())
    }
}

/// How many corpus lines do and do not contain a class member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LexicalCounts {
    pub natclass: u64,
    pub no_natclass: u64,
}

impl LexicalCounts {
    pub fn total(&self) -> u64 {
        self.natclass + self.no_natclass
    }

    /// Share of lines with (`true`) or without (`false`) a class member
    ///
    /// An empty corpus has no proportion and yields `PhonoError::EmptyInput`.
    pub fn proportion(&self, member: bool) -> Result<f64> {
        let total = self.total();
        if total == 0 {
            return Err(PhonoError::EmptyInput);
        }
        let count = if member { self.natclass } else { self.no_natclass };
        Ok(count as f64 / total as f64)
    }

    /// Write the `label<TAB>count<TAB>proportion<TAB>p` report, one blank
    /// line after each row
    pub fn write_report<W: Write>(&self, out: &mut W) -> Result<()> {
        for (label, member, count) in [
            ("natclass", true, self.natclass),
            ("no_natclass", false, self.no_natclass),
        ] {
            writeln!(
                out,
                "{}\t{}\tproportion\t{}\n",
                label,
                count,
                self.proportion(member)?
            )?;
        }
        Ok(())
    }
}

/// A corpus labeled against one natural class
#[derive(Debug, Clone, Default)]
pub struct Labeling {
    /// Every line in corpus order, duplicates kept
    pub lines: Vec<(String, bool)>,
    pub membership: MembershipMap,
    pub counts: LexicalCounts,
}

/// True if any segment of the line belongs to the class
pub fn line_has_member(line: &str, class: &SegmentSet) -> bool {
    class.intersects(corpus::all_segments(line))
}

/// Label lines already in memory
pub fn label_lines<I>(lines: I, class: &SegmentSet) -> Labeling
where
    I: IntoIterator<Item = String>,
{
    let mut labeling = Labeling::default();
    for line in lines {
        let member = line_has_member(&line, class);
        if member {
            labeling.counts.natclass += 1;
        } else {
            labeling.counts.no_natclass += 1;
        }
        labeling.membership.insert(line.clone(), member);
        labeling.lines.push((line, member));
    }
    labeling
}

/// Read and label a corpus file
pub fn label_corpus(path: &Path, class: &SegmentSet) -> Result<Labeling> {
    let labeling = label_lines(corpus::read_lines(path)?, class);
    tracing::debug!(
        path = %path.display(),
        natclass = labeling.counts.natclass,
        no_natclass = labeling.counts.no_natclass,
        unique = labeling.membership.len(),
        "labeled corpus"
    );
    Ok(labeling)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_label_lines_membership() {
        let class = SegmentSet::from_listing("a");
        let labeling = label_lines(lines(&["p a t", "t k", "k i p"]), &class);

        assert_eq!(labeling.membership.get("p a t"), Some(true));
        assert_eq!(labeling.membership.get("t k"), Some(false));
        assert_eq!(labeling.membership.get("k i p"), Some(false));
        assert_eq!(labeling.counts, LexicalCounts { natclass: 1, no_natclass: 2 });
    }

    #[test]
    fn test_duplicates_counted_but_collapsed() {
        let class = SegmentSet::from_listing("q'");
        let labeling = label_lines(lines(&["q' a", "m a", "q' a"]), &class);

        assert_eq!(labeling.counts.natclass, 2);
        assert_eq!(labeling.counts.total(), 3);
        assert_eq!(labeling.membership.len(), 2);
        assert_eq!(labeling.lines.len(), 3);
        let keys: Vec<_> = labeling.membership.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["q' a", "m a"]);
    }

    #[test]
    fn test_membership_last_write_wins() {
        let mut map = MembershipMap::new();
        map.insert("x".into(), true);
        map.insert("x".into(), false);
        assert_eq!(map.get("x"), Some(false));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_repeated_segment_in_line() {
        let class = SegmentSet::from_listing("kʰ");
        assert!(line_has_member("kʰ a kʰ a", &class));
        assert!(!line_has_member("k a k a", &class));
    }

    #[test]
    fn test_report_format() {
        let counts = LexicalCounts { natclass: 1, no_natclass: 3 };
        let mut out = Vec::new();
        counts.write_report(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "natclass\t1\tproportion\t0.25\n\nno_natclass\t3\tproportion\t0.75\n\n"
        );
    }

    #[test]
    fn test_empty_counts_proportion() {
        let counts = LexicalCounts::default();
        assert!(matches!(counts.proportion(true), Err(PhonoError::EmptyInput)));
        assert!(matches!(
            counts.write_report(&mut Vec::new()),
            Err(PhonoError::EmptyInput)
        ));
    }
}
