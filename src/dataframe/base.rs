use std::collections::HashSet;

use crate::core::error::{Error, Result};
use crate::series::Series;
use crate::stats::CategoryCounts;

/// DataFrame struct: Column-oriented 2D table of CSV cells
///
/// Column order is preserved and every column holds the same number of rows.
/// Cells keep the text read from the source file; no type inference happens,
/// so a frame written back to CSV reproduces the input values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFrame {
    columns: Vec<Series>,
    row_count: usize,
}

impl DataFrame {
    /// Create a new empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a DataFrame from already-built columns
    pub fn from_columns(columns: Vec<Series>) -> Result<Self> {
        let mut df = Self::new();
        for series in columns {
            df.add_column(series)?;
        }
        Ok(df)
    }

    /// Add a column to the DataFrame
    pub fn add_column(&mut self, series: Series) -> Result<()> {
        if self.contains_column(series.name()) {
            return Err(Error::DuplicateColumnName(series.name().to_string()));
        }

        if !self.columns.is_empty() && series.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: series.len(),
            });
        }

        if self.columns.is_empty() {
            self.row_count = series.len();
        }
        self.columns.push(series);
        Ok(())
    }

    /// Check if the DataFrame contains a column with the given name
    pub fn contains_column(&self, column_name: &str) -> bool {
        self.columns.iter().any(|c| c.name() == column_name)
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name().to_string()).collect()
    }

    /// Get a column by name
    pub fn column(&self, column_name: &str) -> Result<&Series> {
        self.columns
            .iter()
            .find(|c| c.name() == column_name)
            .ok_or_else(|| Error::InvalidColumn(column_name.to_string()))
    }

    /// Get the cell values of a column
    pub fn column_values(&self, column_name: &str) -> Result<&[String]> {
        self.column(column_name).map(Series::values)
    }

    /// Get the number of rows in the DataFrame
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the number of columns in the DataFrame
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.columns.len())
    }

    /// True when the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Cells of one row, in column order
    pub fn row(&self, index: usize) -> Result<Vec<&str>> {
        if index >= self.row_count {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.row_count,
            });
        }
        Ok(self
            .columns
            .iter()
            .map(|c| c.get(index).unwrap_or_default())
            .collect())
    }

    /// Iterate over rows as cell slices
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.row_count).map(move |i| {
            self.columns
                .iter()
                .map(|c| c.get(i).unwrap_or_default())
                .collect()
        })
    }

    /// New DataFrame made of the given row positions, in the given order.
    ///
    /// The schema is kept even when `indices` is empty.
    pub fn take(&self, indices: &[usize]) -> Result<Self> {
        let columns = self
            .columns
            .iter()
            .map(|c| c.take(indices))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            columns,
            row_count: indices.len(),
        })
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> Result<Self> {
        let end = n.min(self.row_count);
        self.take(&(0..end).collect::<Vec<_>>())
    }

    /// Row counts per distinct value of a column
    pub fn value_counts(&self, column_name: &str) -> Result<CategoryCounts> {
        Ok(CategoryCounts::from_values(self.column_values(column_name)?))
    }

    /// Distinct values of a column in order of first appearance
    pub fn unique(&self, column_name: &str) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        Ok(self
            .column_values(column_name)?
            .iter()
            .filter(|v| seen.insert(v.as_str()))
            .cloned()
            .collect())
    }
}
