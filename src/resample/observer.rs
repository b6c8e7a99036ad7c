//! Sample observers - debugging hooks for the resampler
//!
//! Observers see every drawn sample and its member subset. They never change
//! the statistics a run returns.

use std::io::Write;

use crate::core::error::Result;

/// Receives each trial's drawn sample
pub trait SampleObserver {
    /// Whether the resampler should materialize samples for this observer
    ///
    /// Returning false lets the resampler skip building the per-trial vectors.
    fn wants_samples(&self) -> bool {
        true
    }

    /// Called once per trial, in trial order
    fn on_sample(&mut self, trial: usize, drawn: &[&str], members: &[&str]) -> Result<()>;
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SampleObserver for NoopObserver {
    fn wants_samples(&self) -> bool {
        false
    }

    fn on_sample(&mut self, _trial: usize, _drawn: &[&str], _members: &[&str]) -> Result<()> {
        Ok(())
    }
}

/// Prints each sample, then its member subset, one line each
pub struct WriterObserver<W: Write> {
    out: W,
}

impl<W: Write> WriterObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SampleObserver for WriterObserver<W> {
    fn on_sample(&mut self, _trial: usize, drawn: &[&str], members: &[&str]) -> Result<()> {
        writeln!(self.out, "{:?}", drawn)?;
        writeln!(self.out, "{:?}", members)?;
        Ok(())
    }
}
