// DataFrame module: table storage and text display
pub mod base;
pub mod display;

pub use base::DataFrame;
