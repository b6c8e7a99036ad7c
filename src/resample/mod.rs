//! Natural-class resampling and interval estimation

pub mod interval;
pub mod observer;
pub mod sampler;

pub use interval::{confidence_interval, ConfidenceInterval};
pub use observer::{NoopObserver, SampleObserver, WriterObserver};
pub use sampler::{resample, ResampleResult, SamplingUniverse};
