//! Disease classification: remote model strategy, demo fallback, and
//! report assembly
//!
//! The strategy is chosen once at startup from configuration and never
//! changes for the process lifetime. The demo fallback is intentionally
//! stochastic; its noise source is always passed in explicitly so tests
//! can seed it.

use std::collections::BTreeMap;
use std::time::Duration;

use image::RgbImage;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::Serialize;
use shared::{disease_info, round2, DiseaseLabel, DiseasePrediction};

use crate::config::Config;
use crate::error::AppResult;
use crate::external::InferenceClient;
use crate::services::analysis::PixelStats;

/// Standard deviation of the Gaussian noise added to demo predictions
const DEMO_NOISE_STD: f64 = 0.05;

const DEMO_NOTE: &str = "Demo mode: predictions are simulated. Configure an inference endpoint for real model output.";

/// Disease classification strategy, selected once at startup
#[derive(Clone)]
pub enum DiseaseClassifier {
    /// Delegate to the remote model service
    Remote(InferenceClient),
    /// Heuristic fallback used when no model is configured
    Demo,
}

impl DiseaseClassifier {
    pub fn from_config(config: &Config) -> Self {
        match &config.inference.endpoint {
            Some(endpoint) => DiseaseClassifier::Remote(InferenceClient::new(
                endpoint.clone(),
                config.inference.api_key.clone(),
                Duration::from_secs(config.inference.timeout_secs),
            )),
            None => DiseaseClassifier::Demo,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, DiseaseClassifier::Demo)
    }

    /// Probability vector in model label order for one analysis grid
    pub async fn probabilities(&self, image: &RgbImage) -> AppResult<[f64; 3]> {
        match self {
            DiseaseClassifier::Remote(client) => client.classify_leaf(image).await,
            DiseaseClassifier::Demo => {
                let stats = PixelStats::compute(image);
                Ok(demo_probabilities(&stats, &mut rand::thread_rng()))
            }
        }
    }
}

/// Simulated model output from image characteristics: bright and green
/// reads as healthy, dark as late blight, the middle band as early blight.
/// Gaussian noise keeps repeated uploads from looking canned; the vector
/// is clamped at zero and renormalized to sum 1.
pub fn demo_probabilities<R: Rng + ?Sized>(stats: &PixelStats, rng: &mut R) -> [f64; 3] {
    let base = if stats.brightness > 150.0 && stats.green_ratio > 1.2 {
        [0.7, 0.2, 0.1]
    } else if stats.brightness < 100.0 {
        [0.1, 0.2, 0.7]
    } else {
        [0.2, 0.6, 0.2]
    };

    let noise = Normal::new(0.0, DEMO_NOISE_STD).expect("valid noise std");
    let mut probs = base.map(|p| (p + noise.sample(rng)).max(0.0));
    let sum: f64 = probs.iter().sum();
    if sum <= f64::EPSILON {
        // Every component clamped to zero in one draw; keep the contract
        probs = [1.0 / 3.0; 3];
    } else {
        for p in &mut probs {
            *p /= sum;
        }
    }
    probs
}

/// Reduce a probability vector to the winning label, its confidence and
/// the full percentage map
pub fn reduce_prediction(probabilities: [f64; 3]) -> DiseasePrediction {
    let label = DiseaseLabel::argmax(&probabilities);
    let confidence = round2(probabilities.iter().copied().fold(0.0, f64::max) * 100.0);
    let all_probabilities: BTreeMap<String, f64> = DiseaseLabel::ALL
        .iter()
        .zip(probabilities.iter())
        .map(|(label, p)| (label.as_label().to_string(), p * 100.0))
        .collect();
    DiseasePrediction {
        label,
        confidence,
        all_probabilities,
    }
}

/// Full classification report returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseReport {
    pub prediction: DiseaseLabel,
    pub confidence: f64,
    pub description: String,
    pub recommendation: String,
    pub severity: String,
    pub color: String,
    pub all_probabilities: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Disease classification service
#[derive(Clone)]
pub struct DiseaseService {
    classifier: DiseaseClassifier,
}

impl DiseaseService {
    pub fn new(classifier: DiseaseClassifier) -> Self {
        Self { classifier }
    }

    /// Classify one analysis grid and assemble the full report
    pub async fn classify(&self, image: &RgbImage) -> AppResult<DiseaseReport> {
        let probabilities = self.classifier.probabilities(image).await?;
        let prediction = reduce_prediction(probabilities);
        let info = disease_info(prediction.label);

        let (demo_mode, note) = if self.classifier.is_demo() {
            (Some(true), Some(DEMO_NOTE.to_string()))
        } else {
            (None, None)
        };

        Ok(DiseaseReport {
            prediction: prediction.label,
            confidence: prediction.confidence,
            description: info.description.to_string(),
            recommendation: info.recommendation.to_string(),
            severity: info.severity.to_string(),
            color: info.color.to_string(),
            all_probabilities: prediction.all_probabilities,
            demo_mode,
            note,
        })
    }
}
