//! Normal-approximation confidence interval for a sequence of proportions
//!
//! `mean ± 1.96 * std / sqrt(N)` with the population standard deviation
//! (divide by N). No finite-sample correction.

use std::fmt;

use serde::Serialize;

use crate::core::error::{PhonoError, Result};

/// Two-sided 95% normal quantile
pub const Z_95: f64 = 1.96;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
    pub lower: f64,
    pub upper: f64,
    pub n: usize,
}

impl ConfidenceInterval {
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn half_width(&self) -> f64 {
        (self.upper - self.lower) / 2.0
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean {:.6}, 95% CI ({:.6}, {:.6})",
            self.mean, self.lower, self.upper
        )
    }
}

/// Compute the interval; an empty sequence is an error
pub fn confidence_interval(values: &[f64]) -> Result<ConfidenceInterval> {
    if values.is_empty() {
        return Err(PhonoError::EmptyInput);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    let margin = Z_95 * (std / n.sqrt());

    Ok(ConfidenceInterval {
        mean,
        std,
        lower: mean - margin,
        upper: mean + margin,
        n: values.len(),
    })
}
