//! Water requirement calculation and watering recommendations
//!
//! Pure multiplication over the static tables: base rate times growth,
//! soil, weather, disease and moisture multipliers, rounded to 2 decimals.
//! Only the crop label must exist; every other label falls back to a
//! multiplier of 1.0.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::{
    disease_water_adjustment, moisture_multiplier, normalize_label, round2, weather_multiplier,
    DetectedConditions, DiseaseLabel, ImageAnalysis, WaterError, WaterProfileTable,
    WaterRequirement,
};

use crate::error::AppResult;

/// Water calculation inputs: free-form labels with documented defaults.
///
/// The crop label is lowercased before lookup; the remaining labels are
/// matched exactly, so an unrecognized casing simply falls back to the
/// default multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterParams {
    #[serde(default)]
    pub crop_type: String,
    #[serde(default = "default_soil_type")]
    pub soil_type: String,
    #[serde(default = "default_growth_stage")]
    pub growth_stage: String,
    #[serde(default = "default_weather_condition")]
    pub weather_condition: String,
    #[serde(default = "default_disease_status")]
    pub disease_status: String,
    #[serde(default = "default_soil_moisture")]
    pub soil_moisture: String,
}

fn default_soil_type() -> String {
    "loamy".to_string()
}

fn default_growth_stage() -> String {
    "vegetative".to_string()
}

fn default_weather_condition() -> String {
    "sunny".to_string()
}

fn default_disease_status() -> String {
    "Healthy".to_string()
}

fn default_soil_moisture() -> String {
    "moist".to_string()
}

impl WaterParams {
    /// Parameters for the conditions detected from an image
    pub fn from_analysis(analysis: &ImageAnalysis) -> Self {
        Self {
            crop_type: analysis.crop_type.as_label().to_string(),
            soil_type: analysis.soil_type.as_label().to_string(),
            growth_stage: analysis.growth_stage.as_label().to_string(),
            weather_condition: analysis.weather_condition.as_label().to_string(),
            disease_status: analysis.disease_status.as_label().to_string(),
            soil_moisture: analysis.soil_moisture.as_label().to_string(),
        }
    }

    /// Copy echoed back to callers, with the crop label as it was looked up
    pub fn echo(&self) -> Self {
        Self {
            crop_type: normalize_label(&self.crop_type),
            ..self.clone()
        }
    }
}

/// Water requirement calculator over the static profile table
#[derive(Clone)]
pub struct WaterService {
    profiles: Arc<WaterProfileTable>,
}

impl WaterService {
    pub fn new(profiles: Arc<WaterProfileTable>) -> Self {
        Self { profiles }
    }

    /// Apply the multiplicative formula and assemble the result with every
    /// intermediate multiplier and the advisory list
    pub fn calculate(&self, params: &WaterParams) -> AppResult<WaterRequirement> {
        let crop = normalize_label(&params.crop_type);
        let profile = self
            .profiles
            .get(&crop)
            .ok_or_else(|| WaterError::UnknownCrop(crop.clone()))?;

        let base_water = profile.base_water;
        let growth_multiplier = profile.growth_multiplier(&params.growth_stage);
        let soil_multiplier = profile.soil_multiplier(&params.soil_type);
        let weather_multiplier = weather_multiplier(&params.weather_condition);
        let disease_multiplier = disease_water_adjustment(&params.disease_status);
        let moisture_adjustment = moisture_multiplier(&params.soil_moisture);

        let water_needed = round2(
            base_water
                * growth_multiplier
                * soil_multiplier
                * weather_multiplier
                * disease_multiplier
                * moisture_adjustment,
        );

        let recommendations = water_recommendations(
            &crop,
            water_needed,
            &params.disease_status,
            &params.soil_moisture,
        );

        Ok(WaterRequirement {
            water_needed,
            base_water,
            growth_multiplier,
            soil_multiplier,
            weather_multiplier,
            disease_multiplier,
            moisture_adjustment,
            recommendations,
            detected_conditions: DetectedConditions {
                crop_type: crop,
                growth_stage: params.growth_stage.clone(),
                soil_type: params.soil_type.clone(),
                weather_condition: params.weather_condition.clone(),
                soil_moisture: params.soil_moisture.clone(),
            },
        })
    }
}

/// Advisory lines for a calculated requirement.
///
/// Rules are independent and additive; evaluation order is fixed and
/// becomes the list order.
pub fn water_recommendations(
    crop_type: &str,
    water_needed: f64,
    disease_status: &str,
    soil_moisture: &str,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if water_needed > 2.0 {
        recommendations
            .push("High water requirement - consider drip irrigation for efficiency".to_string());
    } else if water_needed < 0.5 {
        recommendations.push("Low water requirement - avoid overwatering".to_string());
    }

    match DiseaseLabel::from_label(disease_status) {
        Some(DiseaseLabel::EarlyBlight) => {
            recommendations.push("Reduce overhead watering to prevent fungal spread".to_string());
            recommendations.push("Water at the base of plants only".to_string());
        }
        Some(DiseaseLabel::LateBlight) => {
            recommendations.push("Minimize watering until disease is controlled".to_string());
            recommendations.push("Improve soil drainage immediately".to_string());
        }
        _ => {}
    }

    match soil_moisture {
        "wet" => {
            recommendations.push("Soil is already wet - skip watering for now".to_string());
            recommendations.push("Check drainage to prevent root rot".to_string());
        }
        "dry" => {
            recommendations.push("Soil is dry - water immediately".to_string());
            recommendations.push("Consider mulching to retain moisture".to_string());
        }
        _ => {}
    }

    if crop_type == "rice" {
        recommendations.push("Maintain flooded conditions as required for rice".to_string());
    } else if crop_type == "tomato" || crop_type == "pepper" {
        // pepper carries no water profile yet, so that arm only matters
        // once one is added
        recommendations
            .push("Water deeply but less frequently to encourage deep roots".to_string());
    }

    recommendations
}
