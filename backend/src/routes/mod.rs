//! Route definitions for the Smart Farming Advisor

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Disease classification from an uploaded leaf image
        .route("/predict", post(handlers::predict_disease))
        // Water recommendation derived entirely from an uploaded image
        .route("/predict/water", post(handlers::predict_water))
        // Water calculation from explicit condition labels
        .route("/water/calculate", post(handlers::calculate_water))
        // Catalog of recognized labels for client-side form population
        .route("/crops", get(handlers::list_crops))
}
