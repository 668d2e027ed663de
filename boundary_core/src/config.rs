use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    dataset::{ClusterLayout, DEFAULT_N, DEFAULT_SEED, DatasetSize},
    error::{Result, VizErr},
};

/// Fastest allowed animation tick.
pub const MIN_INTERVAL_MS: u64 = 50;
/// Slowest allowed animation tick.
pub const MAX_INTERVAL_MS: u64 = 5_000;
/// Step applied by the speed controls.
pub const INTERVAL_STEP_MS: u64 = 50;

const DEFAULT_INTERVAL_MS: u64 = 300;

/// What happens to the displayed step when the dataset is regenerated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegenPolicy {
    /// Keep cursor, sequence and timer; redraw the line against the new bounds.
    #[default]
    KeepStep,
    /// Stop the animation and go back to the baseline.
    Reset,
}

/// Visualizer settings. Every field has a default, so partial files work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Number of points to generate.
    pub n: i64,
    pub seed: u32,
    pub layout: ClusterLayout,
    pub on_regenerate: RegenPolicy,
    /// Initial animation tick, in milliseconds.
    pub interval_ms: u64,
    /// Directory exports are written into.
    pub export_dir: PathBuf,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N as i64,
            seed: DEFAULT_SEED,
            layout: ClusterLayout::default(),
            on_regenerate: RegenPolicy::default(),
            interval_ms: DEFAULT_INTERVAL_MS,
            export_dir: PathBuf::from("."),
        }
    }
}

impl VizConfig {
    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns `VizErr::Config` if the file cannot be read or decoded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_err = |source: io::Error| VizErr::Config {
            path: path.to_path_buf(),
            source,
        };

        let content = fs::read_to_string(path).map_err(config_err)?;
        serde_json::from_str(&content).map_err(|e| config_err(e.into()))
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    /// `VizErr::InvalidSize` for a negative `n`, `VizErr::InvalidConfig` for
    /// an interval outside `[MIN_INTERVAL_MS, MAX_INTERVAL_MS]`.
    pub fn validate(&self) -> Result<()> {
        self.size()?;

        if !(MIN_INTERVAL_MS..=MAX_INTERVAL_MS).contains(&self.interval_ms) {
            return Err(VizErr::InvalidConfig(format!(
                "interval_ms must be within {MIN_INTERVAL_MS}..={MAX_INTERVAL_MS}, got {}",
                self.interval_ms
            )));
        }

        Ok(())
    }

    /// The dataset size, rejecting negative values.
    pub fn size(&self) -> Result<DatasetSize> {
        DatasetSize::try_from(self.n)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
