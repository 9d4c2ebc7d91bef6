//! Configuration for the visualizer window and the Fourier overlay.
//!
//! Every field has a default, so a YAML file only needs the keys it changes:
//!
//! ```yaml
//! title: SPCE close
//! components: [3, 6, 9, 15, 30]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plot::DEFAULT_DATE_FORMAT;
use crate::visualizer::DEFAULT_COMPONENTS;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Window title.
    pub title: String,
    /// Initial window size in logical points, `[width, height]`.
    pub window_size: [f32; 2],
    /// Show the plot legend.
    pub legend: bool,
    /// Component counts for the Fourier overlay.
    pub components: Vec<usize>,
    /// `chrono` format string for date tick labels.
    pub date_format: String,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            title: "Stock plot".to_string(),
            window_size: [1400.0, 900.0],
            legend: true,
            components: DEFAULT_COMPONENTS.to_vec(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl VisualizerConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), ?cfg, "loaded configuration");
        Ok(cfg)
    }
}
