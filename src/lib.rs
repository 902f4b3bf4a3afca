//! strata: stratified random sampling of CSV rows by category
//!
//! Load a CSV file into a [`DataFrame`], pick a category column and a
//! percentage, and draw a reproducible sample of every category's rows.
//!
//! ```no_run
//! use strata::{read_csv, stratified_sample, to_csv_string};
//!
//! let df = read_csv("orders.csv", true)?;
//! let sample = stratified_sample(&df, "region", 0.1)?;
//! println!("{}", to_csv_string(&sample)?);
//! # Ok::<(), strata::Error>(())
//! ```

// Core module with the error types
pub mod core;

pub mod config;
pub mod dataframe;
pub mod io;
pub mod series;
pub mod session;
pub mod stats;

pub use crate::core::error::{Error, Result};
pub use dataframe::DataFrame;
pub use io::{read_csv, read_csv_from_reader, to_csv_string, write_csv};
pub use series::Series;
pub use session::{
    Download, SampleOutcome, SampleReport, Session, EMPTY_RESULT_WARNING, NO_UPLOAD_MESSAGE,
};
pub use stats::{
    percent_to_fraction, stratified_sample, CategoryCounts, StratifiedSampler, DEFAULT_SEED,
};
