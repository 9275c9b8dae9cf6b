//! Business logic services for the Smart Farming Advisor

pub mod analysis;
pub mod disease;
pub mod water;

pub use disease::{DiseaseClassifier, DiseaseService};
pub use water::WaterService;
