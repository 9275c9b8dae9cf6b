//! HTTP handlers for water requirement endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{ImageAnalysis, WaterRequirement};

use crate::error::AppResult;
use crate::handlers::read_image_field;
use crate::services::analysis::{analyze_image, decode_square_rgb, WATER_INPUT_SIZE};
use crate::services::disease::reduce_prediction;
use crate::services::water::{WaterParams, WaterService};
use crate::AppState;

/// Water calculation response for explicit parameters
#[derive(Debug, Serialize)]
pub struct WaterCalculationResponse {
    #[serde(flatten)]
    pub requirement: WaterRequirement,
    pub parameters: WaterParams,
    pub timestamp: DateTime<Utc>,
}

/// Water prediction response derived from an uploaded image
#[derive(Debug, Serialize)]
pub struct WaterPredictionResponse {
    #[serde(flatten)]
    pub requirement: WaterRequirement,
    pub image_analysis: ImageAnalysis,
    pub timestamp: DateTime<Utc>,
}

/// Calculate water requirements from explicit condition labels
pub async fn calculate_water(
    State(state): State<AppState>,
    Json(params): Json<WaterParams>,
) -> AppResult<Json<WaterCalculationResponse>> {
    let service = WaterService::new(state.profiles.clone());
    let requirement = service.calculate(&params)?;
    Ok(Json(WaterCalculationResponse {
        requirement,
        parameters: params.echo(),
        timestamp: Utc::now(),
    }))
}

/// Predict water requirements directly from an uploaded image
pub async fn predict_water(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<WaterPredictionResponse>> {
    let bytes = read_image_field(&mut multipart).await?;
    let image = decode_square_rgb(&bytes, WATER_INPUT_SIZE)?;

    // Detect field conditions, then back-fill the disease label from the
    // classifier before pricing the water requirement
    let mut analysis = analyze_image(&image);
    let probabilities = state.classifier.probabilities(&image).await?;
    analysis.disease_status = reduce_prediction(probabilities).label;

    let service = WaterService::new(state.profiles.clone());
    let requirement = service.calculate(&WaterParams::from_analysis(&analysis))?;

    Ok(Json(WaterPredictionResponse {
        requirement,
        image_analysis: analysis,
        timestamp: Utc::now(),
    }))
}
