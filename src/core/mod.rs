// Core error types for strata
pub mod error;

pub use error::{Error, Result};
