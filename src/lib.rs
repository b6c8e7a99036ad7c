//! Phonotactics - CV skeleton counts and natural-class resampling

pub mod core;
pub mod corpus;
pub mod natclass;
pub mod plot;
pub mod resample;
pub mod significance;
pub mod sim;
pub mod skeleton;
