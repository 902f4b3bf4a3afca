pub mod csv;

// Re-export commonly used functions
pub use self::csv::{read_csv, read_csv_from_reader, to_csv_string, write_csv};
