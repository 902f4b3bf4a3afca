//! Stratified sampling of DataFrame rows by the values of one category column

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use std::collections::HashMap;

use crate::core::error::{Error, Result};
use crate::dataframe::DataFrame;

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

/// One group of rows sharing the same category value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stratum {
    /// Category value (an empty cell is its own category)
    pub value: String,
    /// Row positions in the source frame, ascending
    pub rows: Vec<usize>,
}

impl Stratum {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Split row positions into strata keyed by cell value, in order of first
/// appearance. Every position lands in exactly one stratum.
pub fn partition(values: &[String]) -> Vec<Stratum> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut strata: Vec<Stratum> = Vec::new();
    for (row, value) in values.iter().enumerate() {
        let slot = *positions.entry(value.as_str()).or_insert_with(|| {
            strata.push(Stratum {
                value: value.clone(),
                rows: Vec::new(),
            });
            strata.len() - 1
        });
        strata[slot].rows.push(row);
    }
    strata
}

/// Number of rows drawn from a stratum of `group_size` rows.
///
/// Singleton strata are always kept. Otherwise `fraction * group_size` is
/// rounded half to even and capped at the group size.
pub fn sample_size(group_size: usize, fraction: f64) -> usize {
    if group_size <= 1 {
        return group_size;
    }
    let k = (fraction * group_size as f64).round_ties_even();
    (k.max(0.0) as usize).min(group_size)
}

/// Convert a whole percentage in [1, 100] into a fraction in (0, 1]
pub fn percent_to_fraction(percent: u32) -> Result<f64> {
    if !(1..=100).contains(&percent) {
        return Err(Error::InvalidFraction(format!("{}%", percent)));
    }
    Ok(f64::from(percent) / 100.0)
}

fn validate_fraction(fraction: f64) -> Result<()> {
    if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
        return Err(Error::InvalidFraction(fraction.to_string()));
    }
    Ok(())
}

/// Seeded per-category row sampler
///
/// Each stratum is drawn with a generator freshly seeded from `seed`, so the
/// same (frame, column, fraction) always yields the same rows in the same
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StratifiedSampler {
    seed: u64,
}

impl Default for StratifiedSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl StratifiedSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample `fraction` of the rows of every category of `strata_column`.
    ///
    /// Groups appear in the output in order of first appearance; rows within
    /// a group are in draw order. An empty result is not an error.
    pub fn sample(&self, df: &DataFrame, strata_column: &str, fraction: f64) -> Result<DataFrame> {
        if !df.contains_column(strata_column) {
            return Err(Error::InvalidColumn(strata_column.to_string()));
        }
        validate_fraction(fraction)?;

        let strata = partition(df.column_values(strata_column)?);
        log::debug!(
            "sampling {} rows in {} strata of '{}' at fraction {}",
            df.row_count(),
            strata.len(),
            strata_column,
            fraction
        );

        let mut picked = Vec::new();
        for stratum in strata.iter().filter(|s| !s.is_empty()) {
            let drawn = self.draw(stratum, fraction)?;
            log::debug!(
                "stratum {:?}: {} -> {} rows",
                stratum.value,
                stratum.len(),
                drawn.len()
            );
            picked.extend(drawn);
        }

        df.take(&picked)
            .map_err(|e| Error::SamplingFailure(e.to_string()))
    }

    fn draw(&self, stratum: &Stratum, fraction: f64) -> Result<Vec<usize>> {
        let n = stratum.len();
        if n == 1 {
            return Ok(stratum.rows.clone());
        }

        let k = sample_size(n, fraction);
        let mut rng = StdRng::seed_from_u64(self.seed);
        index::sample(&mut rng, n, k)
            .into_iter()
            .map(|i| {
                stratum.rows.get(i).copied().ok_or_else(|| {
                    Error::SamplingFailure(format!(
                        "drawn position {} outside stratum {:?} of size {}",
                        i, stratum.value, n
                    ))
                })
            })
            .collect()
    }
}

/// Stratified sample with the default seed
pub fn stratified_sample(df: &DataFrame, strata_column: &str, fraction: f64) -> Result<DataFrame> {
    StratifiedSampler::default().sample(df, strata_column, fraction)
}
