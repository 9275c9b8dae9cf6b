//! Health and service banner handlers

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model_available: bool,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_available: state.config.model_available(),
    })
}

/// Service banner with the endpoint directory
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": "Smart Farming Advisor API",
        "model_available": state.config.model_available(),
        "endpoints": {
            "health": "/health",
            "predict": "/api/v1/predict (POST)",
            "predict_water": "/api/v1/predict/water (POST)",
            "calculate_water": "/api/v1/water/calculate (POST)",
            "crops": "/api/v1/crops (GET)"
        }
    }))
}
