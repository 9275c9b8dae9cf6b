//! Field condition enumerations detected from leaf images

use serde::{Deserialize, Serialize};

use crate::models::disease::DiseaseLabel;

/// Crop types the image classifier can recognize
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropType {
    Tomato,
    Lettuce,
    Potato,
    Corn,
    Wheat,
    Rice,
}

impl CropType {
    /// Crops carrying a water profile, in catalog order.
    ///
    /// Lettuce is a classifier-only label: the water tables do not cover it,
    /// so a water calculation for a lettuce image reports an unknown crop.
    pub const IRRIGATED: [CropType; 5] = [
        CropType::Tomato,
        CropType::Potato,
        CropType::Corn,
        CropType::Wheat,
        CropType::Rice,
    ];

    pub fn as_label(&self) -> &'static str {
        match self {
            CropType::Tomato => "tomato",
            CropType::Lettuce => "lettuce",
            CropType::Potato => "potato",
            CropType::Corn => "corn",
            CropType::Wheat => "wheat",
            CropType::Rice => "rice",
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Growth stages the image classifier can recognize
///
/// The water tables also carry crop-specific stage labels (tuber_formation,
/// tasseling, silking, grain_filling) reachable through the JSON endpoint;
/// stage lookups are therefore by label, not by this enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Seedling,
    Vegetative,
    Flowering,
    Fruiting,
    Mature,
}

impl GrowthStage {
    pub const ALL: [GrowthStage; 5] = [
        GrowthStage::Seedling,
        GrowthStage::Vegetative,
        GrowthStage::Flowering,
        GrowthStage::Fruiting,
        GrowthStage::Mature,
    ];

    pub fn as_label(&self) -> &'static str {
        match self {
            GrowthStage::Seedling => "seedling",
            GrowthStage::Vegetative => "vegetative",
            GrowthStage::Flowering => "flowering",
            GrowthStage::Fruiting => "fruiting",
            GrowthStage::Mature => "mature",
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Soil types recognized from the soil region of an image
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
}

impl SoilType {
    pub const ALL: [SoilType; 3] = [SoilType::Sandy, SoilType::Loamy, SoilType::Clay];

    pub fn as_label(&self) -> &'static str {
        match self {
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Clay => "clay",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Soil moisture levels recognized from the soil region of an image
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilMoisture {
    Dry,
    Moist,
    Wet,
}

impl SoilMoisture {
    pub const ALL: [SoilMoisture; 3] = [SoilMoisture::Dry, SoilMoisture::Moist, SoilMoisture::Wet];

    pub fn as_label(&self) -> &'static str {
        match self {
            SoilMoisture::Dry => "dry",
            SoilMoisture::Moist => "moist",
            SoilMoisture::Wet => "wet",
        }
    }
}

impl std::fmt::Display for SoilMoisture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Weather conditions inferred from overall image brightness and color
/// temperature
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Hot,
    Cool,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 6] = [
        WeatherCondition::Sunny,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Hot,
        WeatherCondition::Cool,
    ];

    pub fn as_label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::PartlyCloudy => "partly_cloudy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Hot => "hot",
            WeatherCondition::Cool => "cool",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Full set of conditions detected for one uploaded image
///
/// Produced once per request. `disease_status` starts at its default and is
/// back-filled after the disease classifier runs; nothing mutates the record
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageAnalysis {
    pub crop_type: CropType,
    pub growth_stage: GrowthStage,
    pub soil_type: SoilType,
    pub soil_moisture: SoilMoisture,
    pub weather_condition: WeatherCondition,
    pub disease_status: DiseaseLabel,
}

impl Default for ImageAnalysis {
    /// Fallback analysis used when feature extraction fails outright
    fn default() -> Self {
        Self {
            crop_type: CropType::Tomato,
            growth_stage: GrowthStage::Vegetative,
            soil_type: SoilType::Loamy,
            soil_moisture: SoilMoisture::Moist,
            weather_condition: WeatherCondition::Sunny,
            disease_status: DiseaseLabel::Healthy,
        }
    }
}
