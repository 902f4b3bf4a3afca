//! One interactive sampling session
//!
//! A session holds the current upload, the chosen category column and
//! percentage, and the last sampled result. Every operation reports failure
//! through `Result`; none of them leaves the session unusable, so a front-end
//! can print the error and keep going.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::StrataConfig;
use crate::core::error::{Error, Result};
use crate::dataframe::DataFrame;
use crate::io::{read_csv, read_csv_from_reader, to_csv_string};
use crate::stats::{percent_to_fraction, CategoryCounts, StratifiedSampler};

/// Shown when sampling succeeds but keeps no rows
pub const EMPTY_RESULT_WARNING: &str = "No data available for the specified sampling criteria.";

/// Shown when sampling is requested before any file was loaded
pub const NO_UPLOAD_MESSAGE: &str = "Please upload a CSV file to get started.";

#[derive(Debug, Clone)]
struct Upload {
    name: String,
    table: DataFrame,
}

/// A successful, non-empty sample
#[derive(Debug, Clone, PartialEq)]
pub struct SampleReport {
    /// Category column the sample was stratified on
    pub column: String,
    /// Percentage per category that was requested
    pub percent: u32,
    /// The sampled rows
    pub table: DataFrame,
    /// Rows per category in `table`
    pub counts: CategoryCounts,
}

/// Result of pressing "sample"
#[derive(Debug, Clone, PartialEq)]
pub enum SampleOutcome {
    Sampled(SampleReport),
    /// Sampling ran but kept no rows; a warning, not an error
    Empty,
}

/// Sampled CSV ready to be handed to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: StrataConfig,
    sampler: StratifiedSampler,
    upload: Option<Upload>,
    column: Option<String>,
    percent: u32,
    result: Option<SampleReport>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(StrataConfig::default())
    }
}

impl Session {
    pub fn new(config: StrataConfig) -> Self {
        Self {
            sampler: StratifiedSampler::new(config.sampling.seed),
            percent: config.sampling.default_percent,
            config,
            upload: None,
            column: None,
            result: None,
        }
    }

    pub fn config(&self) -> &StrataConfig {
        &self.config
    }

    /// Load a CSV file from disk, replacing the current upload
    pub fn upload_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(usize, usize)> {
        let path = path.as_ref();
        let table = read_csv(path, true)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(self.upload_table(name, table))
    }

    /// Load CSV bytes from any reader, replacing the current upload
    pub fn upload_reader<R: Read>(&mut self, name: &str, reader: R) -> Result<(usize, usize)> {
        let table = read_csv_from_reader(reader, true)?;
        Ok(self.upload_table(name.to_string(), table))
    }

    /// Install an already-parsed table as the current upload and return its
    /// shape. The first column becomes the selected category column.
    pub fn upload_table(&mut self, name: String, table: DataFrame) -> (usize, usize) {
        let shape = table.shape();
        log::info!(
            "loaded '{}' with {} rows and {} columns",
            name,
            shape.0,
            shape.1
        );
        self.column = table.column_names().into_iter().next();
        self.upload = Some(Upload { name, table });
        self.result = None;
        shape
    }

    /// Name of the current upload
    pub fn upload_name(&self) -> Option<&str> {
        self.upload.as_ref().map(|u| u.name.as_str())
    }

    pub fn table(&self) -> Option<&DataFrame> {
        self.upload.as_ref().map(|u| &u.table)
    }

    /// First rows of the upload, as many as the display settings ask for
    pub fn preview(&self) -> Result<DataFrame> {
        self.require_table()?.head(self.config.display.preview_rows)
    }

    /// Columns that can be chosen as the category column
    pub fn columns(&self) -> Vec<String> {
        self.table().map(DataFrame::column_names).unwrap_or_default()
    }

    pub fn selected_column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn select_column(&mut self, name: &str) -> Result<()> {
        let table = self.require_table()?;
        if !table.contains_column(name) {
            return Err(Error::InvalidColumn(name.to_string()));
        }
        self.column = Some(name.to_string());
        Ok(())
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    /// Set the per-category percentage, an integer in [1, 100]
    pub fn set_percent(&mut self, percent: u32) -> Result<()> {
        percent_to_fraction(percent)?;
        self.percent = percent;
        Ok(())
    }

    /// Sample the current upload with the selected column and percentage.
    ///
    /// The previous result is discarded first, whatever the outcome.
    pub fn run(&mut self) -> Result<SampleOutcome> {
        self.result = None;

        let table = self.require_table()?;
        if table.is_empty() {
            return Err(Error::EmptyInput);
        }
        let column = self
            .column
            .clone()
            .ok_or_else(|| Error::InvalidInput("No category column selected".to_string()))?;
        let fraction = percent_to_fraction(self.percent)?;

        let sampled = self
            .sampler
            .sample(table, &column, fraction)
            .inspect_err(|e| log::warn!("sampling '{}' failed: {}", column, e))?;

        if sampled.is_empty() {
            log::warn!("sampling '{}' at {}% kept no rows", column, self.percent);
            return Ok(SampleOutcome::Empty);
        }

        let counts = sampled.value_counts(&column)?;
        log::info!(
            "sampled {} of {} rows across {} categories",
            sampled.row_count(),
            table.row_count(),
            counts.len()
        );
        let report = SampleReport {
            column,
            percent: self.percent,
            table: sampled,
            counts,
        };
        self.result = Some(report.clone());
        Ok(SampleOutcome::Sampled(report))
    }

    pub fn last_result(&self) -> Option<&SampleReport> {
        self.result.as_ref()
    }

    /// The last sample as CSV text, without an index column
    pub fn download(&self) -> Result<Download> {
        let report = self
            .result
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("No sampled data to download".to_string()))?;
        Ok(Download {
            file_name: self.config.output.file_name.clone(),
            mime_type: self.config.output.mime_type.clone(),
            data: to_csv_string(&report.table)?,
        })
    }

    /// Write the download into `dir` and return the file's path
    pub fn save_download<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let download = self.download()?;
        let path = dir.as_ref().join(&download.file_name);
        fs::write(&path, download.data.as_bytes())?;
        log::info!("saved sample to {}", path.display());
        Ok(path)
    }

    fn require_table(&self) -> Result<&DataFrame> {
        self.table()
            .ok_or_else(|| Error::InvalidInput(NO_UPLOAD_MESSAGE.to_string()))
    }
}
