//! Plant catalog: the built-in demo grid and TOML/JSON catalog files.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::grid::Grid;
use crate::plant::{Plant, PlantStatus, PlantType};

/// Grid load of the built-in catalog.
pub const DEMO_LOAD: f64 = 300.0;

/// Catalog definition: a load value and an ordered plant list.
///
/// All fields default to the demo catalog. Load from a file with
/// [`CatalogConfig::from_file`] or use [`CatalogConfig::demo`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Current grid demand (non-negative).
    pub load: f64,
    /// Plants in report order.
    pub plants: Vec<Plant>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::demo()
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"plants[2].capacity"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} - {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl CatalogConfig {
    /// Returns the built-in six-plant catalog with a load of 300.
    ///
    /// Covers every plant type and every status; active capacity is 365.
    pub fn demo() -> Self {
        Self {
            load: DEMO_LOAD,
            plants: vec![
                Plant::new(PlantType::Hydro, 300.0, PlantStatus::Active),
                Plant::new(PlantType::Wind, 30.0, PlantStatus::Active),
                Plant::new(PlantType::Wind, 25.0, PlantStatus::Inactive),
                Plant::new(PlantType::Wind, 35.0, PlantStatus::Active),
                Plant::new(PlantType::Solar, 45.0, PlantStatus::Unavailable),
                Plant::new(PlantType::Solar, 40.0, PlantStatus::Inactive),
            ],
        }
    }

    /// Loads a catalog file, choosing JSON for a `.json` extension and TOML otherwise.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or does not parse.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "catalog".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        debug!(path = %path.display(), is_json, "parsing catalog file");
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Parses a catalog from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Parses a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the JSON is invalid or contains unknown fields.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError {
            field: "json".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the catalog is valid. An empty plant
    /// list is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !self.load.is_finite() || self.load < 0.0 {
            errors.push(ConfigError {
                field: "load".into(),
                message: format!("must be a finite value >= 0, got {}", self.load),
            });
        }

        for (idx, plant) in self.plants.iter().enumerate() {
            if !plant.capacity.is_finite() || plant.capacity < 0.0 {
                errors.push(ConfigError {
                    field: format!("plants[{idx}].capacity"),
                    message: format!("must be a finite value >= 0, got {}", plant.capacity),
                });
            }
        }

        errors
    }

    /// Consumes the catalog and builds its grid.
    pub fn into_grid(self) -> Grid {
        Grid::new(self.load, self.plants)
    }
}
