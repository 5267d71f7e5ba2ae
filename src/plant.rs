//! Power plant records and their closed type/status tags.

use std::fmt;

use serde::Deserialize;

/// Generation technology of a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PlantType {
    Hydro,
    Wind,
    Solar,
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hydro => "Hydro",
            Self::Wind => "Wind",
            Self::Solar => "Solar",
        };
        // `pad` so callers can still apply width/alignment.
        f.pad(name)
    }
}

/// Operational status of a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PlantStatus {
    Active,
    Inactive,
    Unavailable,
}

impl PlantStatus {
    /// Whether a plant with this status contributes to grid capacity.
    pub fn is_active(self) -> bool {
        match self {
            Self::Active => true,
            Self::Inactive | Self::Unavailable => false,
        }
    }
}

impl fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Unavailable => "Unavailable",
        };
        f.pad(name)
    }
}

/// A single generation unit.
///
/// # Fields
/// * `plant_type` - Generation technology
/// * `capacity` - Nominal generation capability (non-negative)
/// * `status` - Operational status
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plant {
    #[serde(rename = "type")]
    pub plant_type: PlantType,
    pub capacity: f64,
    pub status: PlantStatus,
}

impl Plant {
    /// Creates a new plant record.
    pub fn new(plant_type: PlantType, capacity: f64, status: PlantStatus) -> Self {
        Self {
            plant_type,
            capacity,
            status,
        }
    }
}
