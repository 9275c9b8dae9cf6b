//! Catalog handler for client-side form population

use axum::{extract::State, Json};
use serde::Serialize;
use shared::{GrowthStage, SoilMoisture, SoilType, WeatherCondition};

use crate::AppState;

/// Recognized labels for every condition dimension
#[derive(Debug, Serialize)]
pub struct CropCatalog {
    pub crops: Vec<String>,
    pub soil_types: Vec<String>,
    pub growth_stages: Vec<String>,
    pub weather_conditions: Vec<String>,
    pub soil_moisture_levels: Vec<String>,
}

/// List crops and condition labels recognized by the water calculator
pub async fn list_crops(State(state): State<AppState>) -> Json<CropCatalog> {
    Json(CropCatalog {
        crops: state
            .profiles
            .crop_labels()
            .iter()
            .map(|label| label.to_string())
            .collect(),
        soil_types: SoilType::ALL.iter().map(|s| s.to_string()).collect(),
        growth_stages: GrowthStage::ALL.iter().map(|s| s.to_string()).collect(),
        weather_conditions: WeatherCondition::ALL.iter().map(|w| w.to_string()).collect(),
        soil_moisture_levels: SoilMoisture::ALL.iter().map(|m| m.to_string()).collect(),
    })
}
