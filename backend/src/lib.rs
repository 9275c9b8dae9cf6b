//! Smart Farming Advisor - Backend Server
//!
//! HTTP service that classifies plant-leaf images for disease and derives
//! irrigation-water recommendations from crop, growth stage, soil, weather,
//! disease status and soil moisture.

use std::{sync::Arc, time::Duration};

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use shared::WaterProfileTable;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use crate::services::disease::DiseaseClassifier;

/// Application state shared across handlers
///
/// Everything in here is read-only after startup, so cloning per request
/// needs no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub profiles: Arc<WaterProfileTable>,
    pub classifier: DiseaseClassifier,
}

impl AppState {
    /// Build state from configuration: static tables plus the classifier
    /// strategy selected for the process lifetime
    pub fn from_config(config: Config) -> Self {
        let classifier = DiseaseClassifier::from_config(&config);
        Self {
            config: Arc::new(config),
            profiles: Arc::new(WaterProfileTable::builtin()),
            classifier,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let request_timeout = Duration::from_secs(state.config.server.request_timeout_secs);
    let max_upload = state.config.upload.max_bytes;

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(cors)
        .with_state(state)
}
