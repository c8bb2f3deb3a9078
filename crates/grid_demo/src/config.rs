//! Configuration for the grid demo
//!
//! Loads settings from `config/grid_demo.json` (or a path given on the command
//! line) and writes the defaults there if the file is missing.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Logging verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    /// Errors only
    Silent,
    /// Startup and query summary (default)
    #[default]
    Summary,
    /// Index construction and search results
    Normal,
    /// Every ring scanned by the nearest-color search
    Verbose,
}

impl LogLevel {
    pub fn max_level(self) -> Level {
        match self {
            LogLevel::Silent => Level::ERROR,
            LogLevel::Summary => Level::INFO,
            LogLevel::Normal => Level::DEBUG,
            LogLevel::Verbose => Level::TRACE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Shape and contents of the generated grid
    pub grid: SampleConfig,

    /// Queries run against the grid once it is printed
    pub queries: QueryConfig,

    #[serde(default)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleConfig {
    pub rows: usize,
    pub cols: usize,

    /// Cell (i, j) takes `palette[(i + j) % palette.len()]`
    pub palette: Vec<String>,

    /// Sizes are drawn from `0..max_size`
    pub max_size: i32,

    /// Prices are drawn from `0..max_price`
    pub max_price: i32,

    /// Fixed seed for reproducible grids; OS entropy when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub lowest_price_color: String,
    pub closest_color: String,
    pub row_offset: usize,
    pub col_offset: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRangeQuery>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRangeQuery {
    pub color: String,
    pub min_price: i32,
    pub max_price: i32,
}

/// Where the loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    CreatedDefault(PathBuf),
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            grid: SampleConfig {
                rows: 6,
                cols: 7,
                palette: ["red", "green", "blue", "cyan", "magenta", "yellow"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
                max_size: 100,
                max_price: 100,
                seed: None,
            },
            queries: QueryConfig {
                lowest_price_color: "cyan".to_string(),
                closest_color: "blue".to_string(),
                row_offset: 0,
                col_offset: 0,
                price_range: None,
            },
            log_level: LogLevel::Summary,
        }
    }
}

impl DemoConfig {
    pub fn default_path() -> PathBuf {
        Path::new("config").join("grid_demo.json")
    }

    /// Load configuration from `path`, or write and return the defaults if missing
    pub fn load(path: &Path) -> Result<(Self, ConfigSource)> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;

            let config: DemoConfig = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse config file {}", path.display()))?;

            config.validate()?;
            Ok((config, ConfigSource::File(path.to_path_buf())))
        } else {
            let config = Self::default();
            config.save(path)?;
            Ok((config, ConfigSource::CreatedDefault(path.to_path_buf())))
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create config directory {}", parent.display())
                })?;
            }
        }

        let content = serde_json::to_string_pretty(self).context("failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        if grid.rows == 0 || grid.cols == 0 {
            bail!("grid must be at least 1x1, got {}x{}", grid.rows, grid.cols);
        }
        if grid.palette.is_empty() {
            bail!("palette must name at least one color");
        }
        if grid.max_size < 1 || grid.max_price < 1 {
            bail!(
                "max_size and max_price must be positive, got {} and {}",
                grid.max_size,
                grid.max_price
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.grid.rows, 6);
        assert_eq!(config.grid.cols, 7);
        assert_eq!(config.grid.palette.len(), 6);
        assert_eq!(config.queries.lowest_price_color, "cyan");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialize_deserialize() {
        let mut config = DemoConfig::default();
        config.grid.seed = Some(7);
        config.queries.price_range = Some(PriceRangeQuery {
            color: "red".to_string(),
            min_price: 20,
            max_price: 80,
        });
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DemoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.grid.seed, Some(7));
        assert_eq!(deserialized.queries.price_range, config.queries.price_range);
    }

    #[test]
    fn test_log_level_defaults_when_missing() {
        let json = r#"{
            "grid": { "rows": 2, "cols": 2, "palette": ["red"], "max_size": 5, "max_price": 5 },
            "queries": { "lowest_price_color": "red", "closest_color": "red", "row_offset": 0, "col_offset": 0 }
        }"#;
        let config: DemoConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.log_level, LogLevel::Summary);
        assert_eq!(config.grid.seed, None);
        assert_eq!(config.log_level.max_level(), Level::INFO);
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        let mut config = DemoConfig::default();
        config.grid.rows = 0;
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.grid.palette.clear();
        assert!(config.validate().is_err());

        let mut config = DemoConfig::default();
        config.grid.max_price = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_creates_default() {
        let dir = std::env::temp_dir().join(format!("grid_demo_cfg_{}", std::process::id()));
        let path = dir.join("settings.json");
        let _ = fs::remove_dir_all(&dir);

        let (_, source) = DemoConfig::load(&path).unwrap();
        assert_eq!(source, ConfigSource::CreatedDefault(path.clone()));

        let (config, source) = DemoConfig::load(&path).unwrap();
        assert_eq!(source, ConfigSource::File(path.clone()));
        assert_eq!(config.grid.cols, 7);

        let _ = fs::remove_dir_all(&dir);
    }
}
