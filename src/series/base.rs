use crate::core::error::{Error, Result};

/// Series struct: one named column of CSV cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    /// The values in the Series
    values: Vec<String>,
    /// The name of the Series
    name: String,
}

impl Series {
    /// Create a new Series
    pub fn new(values: Vec<String>, name: impl Into<String>) -> Self {
        Self {
            values,
            name: name.into(),
        }
    }

    /// Get the length of the Series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the Series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get an element at a specific index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Get a reference to the values in the Series
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Get the name of the Series
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a new Series from the given positions, in the given order.
    pub fn take(&self, indices: &[usize]) -> Result<Self> {
        let mut values = Vec::with_capacity(indices.len());
        for &idx in indices {
            let value = self.values.get(idx).ok_or(Error::IndexOutOfBounds {
                index: idx,
                size: self.values.len(),
            })?;
            values.push(value.clone());
        }
        Ok(Self {
            values,
            name: self.name.clone(),
        })
    }
}
