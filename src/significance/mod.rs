//! Contingency-table significance tests
//!
//! Stateless wrappers around `statrs` distributions, plus the fixed battery of
//! root/affix tables from the Quechua laryngeal study.

pub mod chisq;
pub mod fisher;
pub mod table;

pub use chisq::{chi_square, ChiSquareResult};
pub use fisher::{fisher_exact, FisherResult};
pub use table::ContingencyTable;

use std::io::Write;

use serde::Serialize;

use crate::core::error::Result;

/// Roots in the Quechua lexicon
pub const ROOT_COUNT: u64 = 2479;

/// Affixes attested in the newspaper corpus
pub const AFFIX_COUNT: u64 = 76;

/// One labeled table of the battery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatteryCase {
    pub label: &'static str,
    pub table: ContingencyTable,
}

impl BatteryCase {
    /// `[[roots without, roots with], [affixes without, affixes with]]`
    fn roots_vs_affixes(label: &'static str, roots_with: u64, affixes_with: u64) -> Self {
        Self {
            label,
            table: ContingencyTable::two_by_two(
                ROOT_COUNT - roots_with,
                roots_with,
                AFFIX_COUNT - affixes_with,
                affixes_with,
            ),
        }
    }
}

/// The six study tables, in presentation order
pub fn battery() -> Vec<BatteryCase> {
    vec![
        BatteryCase::roots_vs_affixes("laryngeals, minus h", 1169, 0),
        BatteryCase::roots_vs_affixes("uvulars", 726, 20),
        BatteryCase::roots_vs_affixes("affricates", 501, 14),
        BatteryCase::roots_vs_affixes("nasals", 818, 29),
        BatteryCase::roots_vs_affixes("nat class: (h)", 144, 0),
        BatteryCase::roots_vs_affixes("nat class: all the laryngeals plus [h]", 1255, 0),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatteryOutcome {
    pub label: &'static str,
    pub fisher: FisherResult,
    pub chi_square: ChiSquareResult,
}

/// Run Fisher's test and the chi-square test on every battery table
pub fn run_battery<W: Write>(out: &mut W) -> Result<Vec<BatteryOutcome>> {
    let mut outcomes = Vec::new();
    for case in battery() {
        writeln!(out, "{}\n", case.label)?;
        let fisher = fisher_exact(&case.table)?;
        writeln!(out, "{}", fisher)?;
        let chi_square = chi_square(&case.table)?;
        writeln!(out, "{}", chi_square)?;
        outcomes.push(BatteryOutcome {
            label: case.label,
            fisher,
            chi_square,
        });
    }
    tracing::info!(tables = outcomes.len(), "significance battery finished");
    Ok(outcomes)
}
