use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::measure::ScaleUnits;
use crate::measure::format::DEFAULT_PRECISION;
use crate::measure::scale_bar::DEFAULT_MIN_WIDTH_PX;
use crate::shapes::star::{DEFAULT_INNER_FRACTION, DEFAULT_STAR_POINTS};
use crate::shapes::{DEFAULT_CIRCLE_SEGMENTS, ShapeOptions, StarShape};

fn default_star_points() -> usize {
    DEFAULT_STAR_POINTS
}
fn default_star_inner_fraction() -> f64 {
    DEFAULT_INNER_FRACTION
}
fn default_circle_segments() -> usize {
    DEFAULT_CIRCLE_SEGMENTS
}
fn default_min_drag() -> f64 {
    0.0
}
fn default_precision() -> usize {
    DEFAULT_PRECISION
}
fn default_min_width_px() -> f64 {
    DEFAULT_MIN_WIDTH_PX
}
fn default_verbose() -> bool {
    false
}

/// Settings read from `mapsketch.toml`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FileConfig {
    #[serde(default = "default_star_points")]
    pub star_points: usize,
    #[serde(default = "default_star_inner_fraction")]
    pub star_inner_fraction: f64,
    #[serde(default = "default_circle_segments")]
    pub circle_segments: usize,
    /// Minimum drag distance, in input units, before a shape is produced
    #[serde(default = "default_min_drag")]
    pub min_drag: f64,
    /// Decimals used for coordinate readouts
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default)]
    pub units: ScaleUnits,
    #[serde(default = "default_min_width_px")]
    pub min_width_px: f64,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            star_points: default_star_points(),
            star_inner_fraction: default_star_inner_fraction(),
            circle_segments: default_circle_segments(),
            min_drag: default_min_drag(),
            precision: default_precision(),
            units: ScaleUnits::default(),
            min_width_px: default_min_width_px(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// Search the usual locations and return the first config that parses
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "loaded config");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "failed to parse config file");
                    }
                }
            }
        }
        None
    }

    /// Read a config from an explicit path; a missing or malformed file is an error
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Shape generator settings, validated
    pub fn shape_options(&self) -> Result<ShapeOptions> {
        let star = StarShape::new(self.star_points, self.star_inner_fraction)
            .context("Invalid star settings")?;
        Ok(ShapeOptions {
            star,
            circle_segments: self.circle_segments,
            min_drag: self.min_drag,
        })
    }
}

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MAPSKETCH_CONFIG";

fn get_config_paths() -> Vec<PathBuf> {
    config_search_order(
        std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
        dirs::config_dir(),
        dirs::home_dir(),
    )
}

/// `$MAPSKETCH_CONFIG`, then the working directory, then the platform
/// config dir, then a dotfile in the home dir
fn config_search_order(
    from_env: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    from_env
        .into_iter()
        .chain([PathBuf::from("mapsketch.toml")])
        .chain(config_dir.map(|dir| dir.join("mapsketch").join("config.toml")))
        .chain(home.map(|home| home.join(".mapsketch.toml")))
        .collect()
}
