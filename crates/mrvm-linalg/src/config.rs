use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::math::Matrix;
use crate::preprocessing::SpherePolicy;

/// Layout of a text matrix file.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextFormat {
    /// No header; rows and columns are detected by scanning.
    #[default]
    AutoDetect,
    /// First line is `rows cols`.
    Header,
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" | "auto_detect" => Ok(TextFormat::AutoDetect),
            "header" => Ok(TextFormat::Header),
            _ => Err(format!(
                "Unknown text format: {}. Expected 'auto' or 'header'",
                s
            )),
        }
    }
}

/// Central configuration for loading and preprocessing matrices.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LinalgConfig {
    pub format: TextFormat,
    pub sphere_policy: SpherePolicy,
    /// Decimals used by [`LinalgConfig::render`].
    pub precision: usize,
}

impl Default for LinalgConfig {
    fn default() -> Self {
        Self {
            format: TextFormat::AutoDetect,
            sphere_policy: SpherePolicy::Propagate,
            precision: 2,
        }
    }
}

impl LinalgConfig {
    pub fn new(format: TextFormat, sphere_policy: SpherePolicy, precision: usize) -> Self {
        Self {
            format,
            sphere_policy,
            precision,
        }
    }

    /// Read a matrix file in the configured layout.
    pub fn read_matrix<P: AsRef<Path>>(&self, path: P) -> Result<Matrix> {
        let path = path.as_ref();
        let m = match self.format {
            TextFormat::AutoDetect => Matrix::from_file(path),
            TextFormat::Header => Matrix::from_file_with_header(path),
        }
        .with_context(|| format!("Failed to load matrix: {}", path.display()))?;
        Ok(m)
    }

    /// Sphere `m` in place using the configured policy.
    pub fn sphere(&self, m: &mut Matrix) -> Result<()> {
        m.sphere_with(self.sphere_policy)
            .context("Failed to sphere matrix")
    }

    pub fn render(&self, m: &Matrix) -> String {
        m.render(self.precision)
    }
}

/// Load a JSON [`LinalgConfig`]. Missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<LinalgConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: LinalgConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
