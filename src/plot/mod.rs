//! Histogram rendering for resampled proportions
//!
//! Charts are written as PNG files through the [`plotters`] bitmap backend.
//! No font backend is compiled in, so the chart carries bars and interval
//! markers but no text.

use std::path::Path;

use plotters::prelude::*;

use crate::core::error::{PhonoError, Result};
use crate::resample::ConfidenceInterval;

pub const DEFAULT_BINS: usize = 30;

const PLOT_SIZE: (u32, u32) = (1200, 800);

/// Equal-width bin counts over the range of the data
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Bin the values; the maximum lands in the last bin
    ///
    /// A constant sequence is binned over `[v - 0.5, v + 0.5]`.
    pub fn new(values: &[f64], bins: usize) -> Result<Self> {
        if values.is_empty() {
            return Err(PhonoError::EmptyInput);
        }
        if bins == 0 {
            return Err(PhonoError::InvalidConfig("histogram needs at least one bin".into()));
        }

        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0u64; bins];
        for &v in values {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Self { lo, hi, counts })
    }

    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.counts.len() as f64
    }

    /// `(start, end, count)` for each bin
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let start = self.lo + i as f64 * width;
            (start, start + width, count)
        })
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

fn plot_err<E: std::fmt::Display>(e: E) -> PhonoError {
    PhonoError::Plot(e.to_string())
}

/// Render the proportion histogram with red lines at the interval bounds
pub fn render_histogram(
    values: &[f64],
    interval: &ConfidenceInterval,
    bins: usize,
    path: &Path,
) -> Result<()> {
    let hist = Histogram::new(values, bins)?;

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let x_lo = hist.lo.min(interval.lower);
    let x_hi = hist.hi.max(interval.upper);
    let y_max = hist.max_count().max(1) as f64 * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(x_lo..x_hi, 0f64..y_max)
        .map_err(plot_err)?;

    chart
        .draw_series(hist.bins().map(|(start, end, count)| {
            Rectangle::new([(start, 0.0), (end, count as f64)], BLUE.mix(0.6).filled())
        }))
        .map_err(plot_err)?;

    for x in [interval.lower, interval.upper] {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(x, 0.0), (x, y_max)],
                RED.stroke_width(2),
            )))
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    tracing::debug!(path = %path.display(), bins, "wrote histogram");
    Ok(())
}
