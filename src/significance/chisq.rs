//! Chi-square test of independence

use std::fmt;

use serde::Serialize;
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::core::error::{PhonoError, Result};
use crate::significance::table::ContingencyTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChiSquareResult {
    pub statistic: f64,
    pub p_value: f64,
    pub dof: usize,
    /// Expected frequencies under independence
    pub expected: Vec<Vec<f64>>,
}

impl fmt::Display for ChiSquareResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X2{} = {}, p={}", self.dof, self.statistic, self.p_value)
    }
}

/// Pearson chi-square test on an r x c table
///
/// With one degree of freedom the Yates continuity correction is applied:
/// each observed count moves toward its expectation by at most 0.5.
pub fn chi_square(table: &ContingencyTable) -> Result<ChiSquareResult> {
    let row_sums = table.row_sums();
    let col_sums = table.col_sums();
    let total = table.total() as f64;

    let expected: Vec<Vec<f64>> = row_sums
        .iter()
        .map(|&r| {
            col_sums
                .iter()
                .map(|&c| if total > 0.0 { r as f64 * c as f64 / total } else { 0.0 })
                .collect()
        })
        .collect();

    if expected.iter().flatten().any(|&e| e == 0.0) {
        return Err(PhonoError::ZeroExpected);
    }

    let dof = (table.n_rows() - 1) * (table.n_cols() - 1);
    if dof == 0 {
        return Ok(ChiSquareResult {
            statistic: 0.0,
            p_value: 1.0,
            dof,
            expected,
        });
    }

    let yates = dof == 1;
    let mut statistic = 0.0;
    for (row, exp_row) in table.rows().iter().zip(&expected) {
        for (&obs, &exp) in row.iter().zip(exp_row) {
            let mut obs = obs as f64;
            if yates {
                let diff = exp - obs;
                obs += diff.signum() * diff.abs().min(0.5);
            }
            statistic += (obs - exp).powi(2) / exp;
        }
    }

    let dist = ChiSquared::new(dof as f64).map_err(|e| PhonoError::Distribution(e.to_string()))?;
    let p_value = dist.sf(statistic).clamp(0.0, 1.0);

    Ok(ChiSquareResult {
        statistic,
        p_value,
        dof,
        expected,
    })
}
