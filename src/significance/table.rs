//! Contingency tables

use serde::Serialize;

use crate::core::error::{PhonoError, Result};

/// Rectangular table of non-negative counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContingencyTable {
    rows: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Build a table; rows must be non-empty and of equal length
    pub fn new(rows: Vec<Vec<u64>>) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(PhonoError::TableShape("table has no cells".into()));
        }
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(PhonoError::TableShape(format!(
                "row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                width
            )));
        }
        Ok(Self { rows })
    }

    /// Shorthand for `[[a, b], [c, d]]`
    pub fn two_by_two(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self {
            rows: vec![vec![a, b], vec![c, d]],
        }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Vec<u64>] {
        &self.rows
    }

    pub fn row_sums(&self) -> Vec<u64> {
        self.rows.iter().map(|r| r.iter().sum()).collect()
    }

    pub fn col_sums(&self) -> Vec<u64> {
        (0..self.n_cols())
            .map(|c| self.rows.iter().map(|r| r[c]).sum())
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.rows.iter().flatten().sum()
    }

    /// The four cells of a 2x2 table, or a shape error
    pub fn as_two_by_two(&self) -> Result<[u64; 4]> {
        if self.n_rows() != 2 || self.n_cols() != 2 {
            return Err(PhonoError::TableShape(format!(
                "expected 2x2, got {}x{}",
                self.n_rows(),
                self.n_cols()
            )));
        }
        Ok([self.get(0, 0), self.get(0, 1), self.get(1, 0), self.get(1, 1)])
    }
}
