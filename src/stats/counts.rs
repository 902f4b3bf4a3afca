//! Per-category row counts shown next to a sampled table

use crate::core::error::Result;
use crate::dataframe::DataFrame;
use crate::series::Series;
use crate::stats::sampling::partition;

/// Category value -> row count, most frequent first
///
/// Ties keep the order in which the categories first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    entries: Vec<(String, usize)>,
}

impl CategoryCounts {
    pub fn from_values(values: &[String]) -> Self {
        let mut entries: Vec<(String, usize)> = partition(values)
            .into_iter()
            .map(|s| {
                let n = s.len();
                (s.value, n)
            })
            .collect();
        // stable sort keeps first-appearance order among equal counts
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Row count for one category, if present
    pub fn get(&self, category: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(value, _)| value == category)
            .map(|(_, n)| *n)
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(v, n)| (v.as_str(), *n))
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Two-column table with `Category` and `Row Count`
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let (categories, counts): (Vec<String>, Vec<String>) = self
            .entries
            .iter()
            .map(|(v, n)| (v.clone(), n.to_string()))
            .unzip();
        DataFrame::from_columns(vec![
            Series::new(categories, "Category"),
            Series::new(counts, "Row Count"),
        ])
    }
}
