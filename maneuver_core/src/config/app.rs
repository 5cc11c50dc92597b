//! Application configuration

use super::ConfigError;
use crate::geometry::ViewBox;
use crate::swerve::SwerveAdjacency;
use crate::types::ZONE_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A ship selector entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipEntry {
    /// Data key, used for `data/<id>.json` and `images/<id>.png`
    pub id: String,
    #[serde(default)]
    pub label: String,
}

impl ShipEntry {
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base directory for `data/` and the image directory
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,
    /// Image directory, relative to the data root
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
    #[serde(default)]
    pub view_box: ViewBox,
    /// Fixed die seed; rolls come from entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub ships: Vec<ShipEntry>,
    /// Replaces the standard swerve adjacency when present
    #[serde(default)]
    pub swerve: Option<SwerveAdjacency>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_root: default_data_root(),
            image_dir: default_image_dir(),
            view_box: ViewBox::default(),
            seed: None,
            ships: Vec::new(),
            swerve: None,
        }
    }
}

fn default_data_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_image_dir() -> String {
    "images".to_string()
}

impl AppConfig {
    /// Load and validate a config file. A relative `data_root` is taken
    /// relative to the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config: AppConfig = super::load_toml(path)?;
        if config.data_root.is_relative() {
            if let Some(dir) = path.parent() {
                config.data_root = dir.join(&config.data_root);
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for ship in &self.ships {
            if ship.id.trim().is_empty() {
                return Err(ConfigError::ValidationError("ship with empty id".to_string()));
            }
            if !seen.insert(ship.id.to_lowercase()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate ship id '{}'",
                    ship.id
                )));
            }
        }

        if let Some(swerve) = &self.swerve {
            let bad = swerve
                .adjacent
                .iter()
                .flat_map(|(zone, neighbours)| std::iter::once(zone).chain(neighbours))
                .find(|zone| !zone.contains(ZONE_SEPARATOR));
            if let Some(zone) = bad {
                return Err(ConfigError::ValidationError(format!(
                    "swerve table has malformed zone '{}'",
                    zone
                )));
            }
        }

        Ok(())
    }

    /// Configured swerve table, or the standard one
    pub fn adjacency(&self) -> SwerveAdjacency {
        self.swerve.clone().unwrap_or_else(SwerveAdjacency::standard)
    }
}

/// Built-in configuration
pub fn default_config() -> AppConfig {
    let toml = include_str!("../../config/app.toml");
    AppConfig::parse(toml).unwrap_or_else(|e| {
        log::warn!("Built-in config rejected ({}), using defaults", e);
        AppConfig::default()
    })
}
