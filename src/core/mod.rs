pub mod config;
pub mod error;
pub mod types;

pub use config::{ResampleConfig, SkeletonConfig};
pub use error::{PhonoError, Result};
pub use types::{SegmentSet, Universe};
