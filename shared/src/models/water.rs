//! Static water-requirement tables and the per-request result record
//!
//! The tables are deliberately incomplete: stage, soil, weather and disease
//! lookups fall back to a multiplier of 1.0 for labels they do not carry.
//! Only the crop itself must exist.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::conditions::CropType;

/// Round to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Errors from the water requirement tables
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WaterError {
    #[error("crop type '{0}' not found in the water requirement tables")]
    UnknownCrop(String),
}

/// Watering profile for one crop: base rate plus per-stage and per-soil
/// multipliers
#[derive(Debug, Clone)]
pub struct WaterProfile {
    /// Base water requirement in inches per week
    pub base_water: f64,
    growth_stages: HashMap<&'static str, f64>,
    soil_preferences: HashMap<&'static str, f64>,
}

impl WaterProfile {
    fn new(
        base_water: f64,
        growth_stages: &[(&'static str, f64)],
        soil_preferences: &[(&'static str, f64)],
    ) -> Self {
        Self {
            base_water,
            growth_stages: growth_stages.iter().copied().collect(),
            soil_preferences: soil_preferences.iter().copied().collect(),
        }
    }

    /// Multiplier for a growth-stage label; unrecognized stages leave the
    /// base rate unchanged
    pub fn growth_multiplier(&self, stage: &str) -> f64 {
        self.growth_stages.get(stage).copied().unwrap_or(1.0)
    }

    /// Multiplier for a soil-type label; unrecognized soils leave the base
    /// rate unchanged
    pub fn soil_multiplier(&self, soil: &str) -> f64 {
        self.soil_preferences.get(soil).copied().unwrap_or(1.0)
    }
}

/// Immutable crop → profile map, constructed once at process start
#[derive(Debug, Clone)]
pub struct WaterProfileTable {
    profiles: HashMap<&'static str, WaterProfile>,
}

impl WaterProfileTable {
    /// The built-in agronomy table
    pub fn builtin() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            "tomato",
            WaterProfile::new(
                1.5,
                &[
                    ("seedling", 0.8),
                    ("vegetative", 1.2),
                    ("flowering", 1.8),
                    ("fruiting", 2.0),
                    ("mature", 1.5),
                ],
                &[("sandy", 1.3), ("loamy", 1.0), ("clay", 0.8)],
            ),
        );
        profiles.insert(
            "potato",
            WaterProfile::new(
                1.2,
                &[
                    ("seedling", 0.6),
                    ("vegetative", 1.0),
                    ("flowering", 1.5),
                    ("tuber_formation", 1.8),
                    ("mature", 1.0),
                ],
                &[("sandy", 1.2), ("loamy", 1.0), ("clay", 0.9)],
            ),
        );
        profiles.insert(
            "corn",
            WaterProfile::new(
                1.8,
                &[
                    ("seedling", 0.8),
                    ("vegetative", 1.5),
                    ("tasseling", 2.2),
                    ("silking", 2.5),
                    ("mature", 1.8),
                ],
                &[("sandy", 1.4), ("loamy", 1.0), ("clay", 0.9)],
            ),
        );
        profiles.insert(
            "wheat",
            WaterProfile::new(
                1.0,
                &[
                    ("seedling", 0.5),
                    ("vegetative", 0.8),
                    ("flowering", 1.2),
                    ("grain_filling", 1.5),
                    ("mature", 0.8),
                ],
                &[("sandy", 1.1), ("loamy", 1.0), ("clay", 0.9)],
            ),
        );
        profiles.insert(
            "rice",
            WaterProfile::new(
                3.0,
                &[
                    ("seedling", 2.0),
                    ("vegetative", 2.5),
                    ("flowering", 3.5),
                    ("grain_filling", 3.0),
                    ("mature", 2.5),
                ],
                &[("sandy", 1.2), ("loamy", 1.0), ("clay", 0.8)],
            ),
        );
        Self { profiles }
    }

    pub fn get(&self, crop: &str) -> Option<&WaterProfile> {
        self.profiles.get(crop)
    }

    pub fn contains(&self, crop: &str) -> bool {
        self.profiles.contains_key(crop)
    }

    /// Crop labels in catalog order
    pub fn crop_labels(&self) -> Vec<&'static str> {
        CropType::IRRIGATED
            .iter()
            .map(|c| c.as_label())
            .filter(|label| self.profiles.contains_key(label))
            .collect()
    }
}

/// Multiplier for a weather-condition label
pub fn weather_multiplier(label: &str) -> f64 {
    match label {
        "sunny" => 1.3,
        "partly_cloudy" => 1.1,
        "cloudy" => 1.0,
        "rainy" => 0.3,
        "hot" => 1.5,
        "cool" => 0.8,
        _ => 1.0,
    }
}

/// Multiplier for a soil-moisture label; wet soil nearly suppresses
/// watering, dry soil raises it
pub fn moisture_multiplier(label: &str) -> f64 {
    match label {
        "wet" => 0.3,
        "moist" => 0.7,
        "dry" => 1.3,
        _ => 1.0,
    }
}

/// Echo of the conditions a water calculation was computed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedConditions {
    pub crop_type: String,
    pub growth_stage: String,
    pub soil_type: String,
    pub weather_condition: String,
    pub soil_moisture: String,
}

/// Computed water requirement, kept with every intermediate multiplier so
/// callers can see how the final number was reached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterRequirement {
    /// Inches per week, rounded to 2 decimals
    pub water_needed: f64,
    pub base_water: f64,
    pub growth_multiplier: f64,
    pub soil_multiplier: f64,
    pub weather_multiplier: f64,
    pub disease_multiplier: f64,
    pub moisture_adjustment: f64,
    pub recommendations: Vec<String>,
    pub detected_conditions: DetectedConditions,
}
