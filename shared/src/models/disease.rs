//! Disease labels and the static disease catalog

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Leaf disease labels, in the fixed order the classification model emits
/// its probability vector
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiseaseLabel {
    Healthy,
    #[serde(rename = "Early Blight")]
    EarlyBlight,
    #[serde(rename = "Late Blight")]
    LateBlight,
}

impl DiseaseLabel {
    /// Model output order: index i of the probability vector is `ALL[i]`
    pub const ALL: [DiseaseLabel; 3] = [
        DiseaseLabel::Healthy,
        DiseaseLabel::EarlyBlight,
        DiseaseLabel::LateBlight,
    ];

    pub fn as_label(&self) -> &'static str {
        match self {
            DiseaseLabel::Healthy => "Healthy",
            DiseaseLabel::EarlyBlight => "Early Blight",
            DiseaseLabel::LateBlight => "Late Blight",
        }
    }

    /// Parse a canonical disease label. Unrecognized labels return `None`;
    /// water lookups treat them as "no adjustment".
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Healthy" => Some(DiseaseLabel::Healthy),
            "Early Blight" => Some(DiseaseLabel::EarlyBlight),
            "Late Blight" => Some(DiseaseLabel::LateBlight),
            _ => None,
        }
    }

    /// Label with the highest probability; ties resolve to the earliest
    /// label in model order.
    pub fn argmax(probabilities: &[f64; 3]) -> Self {
        let mut best = 0;
        for i in 1..probabilities.len() {
            if probabilities[i] > probabilities[best] {
                best = i;
            }
        }
        Self::ALL[best]
    }
}

impl std::fmt::Display for DiseaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Static per-disease information shown alongside predictions
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseInfo {
    pub description: &'static str,
    pub recommendation: &'static str,
    pub severity: &'static str,
    /// Display color as a hex string for client UIs
    pub color: &'static str,
    /// Multiplier applied to the water requirement while the disease is
    /// active
    pub water_adjustment: f64,
}

/// Catalog entry for a disease label
pub fn disease_info(label: DiseaseLabel) -> &'static DiseaseInfo {
    match label {
        DiseaseLabel::Healthy => &DiseaseInfo {
            description: "The plant appears to be healthy with no visible disease symptoms.",
            recommendation: "Continue regular monitoring and maintain current care practices.",
            severity: "None",
            color: "#00e600",
            water_adjustment: 1.0,
        },
        DiseaseLabel::EarlyBlight => &DiseaseInfo {
            description: "Early blight is a fungal disease that causes dark brown spots with concentric rings on leaves.",
            recommendation: "Remove infected leaves, improve air circulation, and consider fungicide treatment.",
            severity: "Moderate",
            color: "#ffa500",
            water_adjustment: 0.8,
        },
        DiseaseLabel::LateBlight => &DiseaseInfo {
            description: "Late blight is a serious fungal disease that can quickly destroy entire plants.",
            recommendation: "Immediate action required: Remove infected plants, apply fungicide, and improve drainage.",
            severity: "High",
            color: "#ff0000",
            water_adjustment: 0.6,
        },
    }
}

/// Water adjustment for a free-form disease label; labels outside the
/// catalog leave the requirement unchanged
pub fn disease_water_adjustment(label: &str) -> f64 {
    DiseaseLabel::from_label(label)
        .map(|l| disease_info(l).water_adjustment)
        .unwrap_or(1.0)
}

/// Reduced classification result: winning label, confidence and the full
/// percentage map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseasePrediction {
    pub label: DiseaseLabel,
    /// Max probability as a percentage, rounded to 2 decimals
    pub confidence: f64,
    /// Per-label probability as percentages (unrounded)
    pub all_probabilities: BTreeMap<String, f64>,
}
