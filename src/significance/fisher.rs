//! Fisher's exact test for 2x2 tables

use std::fmt;

use serde::Serialize;
use statrs::distribution::{Discrete, Hypergeometric};

use crate::core::error::{PhonoError, Result};
use crate::significance::table::ContingencyTable;

/// Relative tolerance when comparing table probabilities
const PMF_TOLERANCE: f64 = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FisherResult {
    /// Sample odds ratio `ad / bc`
    pub odds_ratio: f64,
    /// Two-sided p-value
    pub p_value: f64,
}

impl fmt::Display for FisherResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fishers test: {}, p = {:.6}", self.odds_ratio, self.p_value)
    }
}

/// Two-sided Fisher exact test on `[[a, b], [c, d]]`
///
/// Conditioning on the margins, the top-left cell follows a hypergeometric
/// distribution. The p-value sums the probability of every table no more
/// likely than the observed one.
pub fn fisher_exact(table: &ContingencyTable) -> Result<FisherResult> {
    let [a, b, c, d] = table.as_two_by_two()?;

    let row0 = a + b;
    let row1 = c + d;
    let col0 = a + c;
    let col1 = b + d;
    if row0 == 0 || row1 == 0 || col0 == 0 || col1 == 0 {
        return Ok(FisherResult {
            odds_ratio: f64::NAN,
            p_value: 1.0,
        });
    }

    let odds_ratio = if b > 0 && c > 0 {
        (a as f64 * d as f64) / (b as f64 * c as f64)
    } else {
        f64::INFINITY
    };

    let total = row0 + row1;
    let dist = Hypergeometric::new(total, row0, col0)
        .map_err(|e| PhonoError::Distribution(e.to_string()))?;

    // Corpus-sized margins overflow the binomial coefficients, so compare
    // and accumulate table probabilities in log space.
    let ln_observed = dist.ln_pmf(a);
    let ln_threshold = ln_observed + PMF_TOLERANCE.ln_1p();
    let lo = col0.saturating_sub(row1);
    let hi = row0.min(col0);
    let scaled: f64 = (lo..=hi)
        .map(|k| dist.ln_pmf(k))
        .filter(|&ln_p| ln_p <= ln_threshold)
        .map(|ln_p| (ln_p - ln_observed).exp())
        .sum();
    let p_value = scaled * ln_observed.exp();

    Ok(FisherResult {
        odds_ratio,
        p_value: p_value.min(1.0),
    })
}
