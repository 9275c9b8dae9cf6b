//! HTTP handlers for disease classification endpoints

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::AppResult;
use crate::handlers::read_image_field;
use crate::services::analysis::{decode_square_rgb, DISEASE_INPUT_SIZE};
use crate::services::disease::{DiseaseReport, DiseaseService};
use crate::AppState;

/// Classify an uploaded leaf image
pub async fn predict_disease(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DiseaseReport>> {
    let bytes = read_image_field(&mut multipart).await?;
    let image = decode_square_rgb(&bytes, DISEASE_INPUT_SIZE)?;

    let service = DiseaseService::new(state.classifier.clone());
    let report = service.classify(&image).await?;
    Ok(Json(report))
}
