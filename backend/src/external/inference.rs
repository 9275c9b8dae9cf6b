//! Leaf Classification Inference Client
//!
//! Client for the externally hosted leaf-classification model service. The
//! wire contract: the client sends the resized RGB tensor as base64-encoded
//! raw bytes with its dimensions; the service scales pixel values to [0, 1],
//! adds the batch dimension, and returns a 3-element probability vector in
//! fixed label order (Healthy, Early Blight, Late Blight).

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::RgbImage;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::DiseaseLabel;

use crate::error::{AppError, AppResult};

/// Client for the leaf-classification microservice
#[derive(Clone)]
pub struct InferenceClient {
    endpoint: String,
    api_key: Option<String>,
    http_client: Client,
}

/// Request to classify a leaf image
#[derive(Debug, Serialize)]
pub struct ClassifyLeafRequest {
    pub image_base64: String,
    pub width: u32,
    pub height: u32,
}

/// Response from the classification API
#[derive(Debug, Deserialize)]
pub struct ClassifyLeafResponse {
    pub probabilities: Vec<f64>,
}

impl InferenceClient {
    /// Create a new inference client
    pub fn new(endpoint: String, api_key: Option<String>, timeout: Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            http_client,
        }
    }

    /// Send an image for classification and return the probability vector
    /// in model label order
    pub async fn classify_leaf(&self, image: &RgbImage) -> AppResult<[f64; 3]> {
        let request = ClassifyLeafRequest {
            image_base64: BASE64.encode(image.as_raw()),
            width: image.width(),
            height: image.height(),
        };

        let mut builder = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json");
        if let Some(key) = &self.api_key {
            builder = builder.header("x-api-key", key);
        }

        let response = builder
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Inference(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: ClassifyLeafResponse = response
            .json()
            .await
            .map_err(|e| AppError::Inference(format!("Failed to parse response: {}", e)))?;

        Self::normalize_probabilities(&result.probabilities)
    }

    /// Check shape and content of the model output and renormalize it to
    /// sum exactly 1
    fn normalize_probabilities(raw: &[f64]) -> AppResult<[f64; 3]> {
        if raw.len() != DiseaseLabel::ALL.len() {
            return Err(AppError::Inference(format!(
                "Expected {} probabilities, got {}",
                DiseaseLabel::ALL.len(),
                raw.len()
            )));
        }
        for p in raw {
            if !p.is_finite() || *p < 0.0 {
                return Err(AppError::Inference(
                    "Probability vector contains an invalid component".to_string(),
                ));
            }
        }
        let sum: f64 = raw.iter().sum();
        if sum <= 0.0 {
            return Err(AppError::Inference(
                "Probability vector sums to zero".to_string(),
            ));
        }
        Ok([raw[0] / sum, raw[1] / sum, raw[2] / sum])
    }
}
