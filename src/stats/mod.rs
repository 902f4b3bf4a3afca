//! Sampling and summary statistics

pub mod counts;
pub mod sampling;

pub use counts::CategoryCounts;
pub use sampling::{
    partition, percent_to_fraction, sample_size, stratified_sample, Stratum, StratifiedSampler,
    DEFAULT_SEED,
};
