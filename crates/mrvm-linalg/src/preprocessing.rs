//! Per-column standardization ("sphering").
//!
//! Each column is centred on its mean and divided by its sample standard
//! deviation. Statistics come from `statrs`, so the standard deviation uses
//! the `n - 1` denominator.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{MatrixError, Result};
use crate::math::{backend, Matrix};

/// What sphering does with a column whose standard deviation is zero or
/// undefined (a single-row matrix).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpherePolicy {
    /// Divide anyway. The column becomes NaN (or +/-Inf) and sphering moves
    /// on to the next column.
    #[default]
    Propagate,
    /// Fail with [`MatrixError::ZeroVariance`] before touching the matrix.
    Error,
}

impl FromStr for SpherePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "propagate" => Ok(SpherePolicy::Propagate),
            "error" => Ok(SpherePolicy::Error),
            _ => Err(format!(
                "Unknown sphere policy: {}. Expected 'propagate' or 'error'",
                s
            )),
        }
    }
}

/// Mean and sample standard deviation of one column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl ColumnStats {
    pub fn is_degenerate(&self) -> bool {
        !(self.std_dev.is_finite() && self.std_dev != 0.0)
    }
}

impl Matrix {
    /// Statistics for every column, in column order.
    pub fn column_stats(&self) -> Vec<ColumnStats> {
        let mut stats = Vec::with_capacity(self.width());
        let mut buf = vec![0.0; self.height()];
        for col in 0..self.width() {
            for (row, slot) in buf.iter_mut().enumerate() {
                *slot = self[(row, col)];
            }
            stats.push(ColumnStats {
                mean: backend::mean(&buf),
                std_dev: backend::std_dev(&buf),
            });
        }
        stats
    }

    /// Standardize every column in place, propagating non-finite results for
    /// zero-variance columns.
    pub fn sphere(&mut self) {
        if let Err(e) = self.sphere_with(SpherePolicy::Propagate) {
            log::error!("Sphering with the propagate policy failed: {}", e);
        }
    }

    /// Standardize every column in place.
    ///
    /// With [`SpherePolicy::Error`] all columns are checked first, so the
    /// matrix is unchanged when an error is returned.
    pub fn sphere_with(&mut self, policy: SpherePolicy) -> Result<()> {
        let stats = self.column_stats();

        if policy == SpherePolicy::Error {
            if let Some(column) = stats.iter().position(ColumnStats::is_degenerate) {
                return Err(MatrixError::ZeroVariance { column });
            }
        }

        for (col, stat) in stats.iter().enumerate() {
            if stat.is_degenerate() {
                log::warn!(
                    "Column {} has standard deviation {}; sphered values will not be finite",
                    col,
                    stat.std_dev
                );
            }
            let scale = 1.0 / stat.std_dev;
            for row in 0..self.height() {
                let v = &mut self[(row, col)];
                *v = (*v - stat.mean) * scale;
            }
        }

        log::debug!("Sphered {} columns over {} rows", self.width(), self.height());
        Ok(())
    }
}
