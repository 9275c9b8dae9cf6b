//! Image feature extraction and heuristic condition classifiers
//!
//! All statistics are computed over a decoded RGB grid that has already
//! been resized to a fixed dimension, so the O(width * height) scans here
//! stay cheap. Each classifier is a pure function of the statistics and
//! carries no state between requests.

use image::{imageops::FilterType, RgbImage};
use shared::{
    CropType, DiseaseLabel, GrowthStage, ImageAnalysis, SoilMoisture, SoilType, WeatherCondition,
};

use crate::error::{AppError, AppResult};

/// Resize target for disease-only prediction
pub const DISEASE_INPUT_SIZE: u32 = 128;

/// Resize target for water prediction
pub const WATER_INPUT_SIZE: u32 = 256;

/// Guard against division by zero in channel ratios
const EPS: f64 = 1e-8;

/// Fraction of image height treated as plant; the rows below it form the
/// soil region
const SOIL_REGION_START: f64 = 0.7;

/// Decode an uploaded image and resize it to a square analysis grid.
///
/// Grayscale and alpha-channel inputs are normalized to 3-channel RGB
/// (gray replicated across channels, alpha dropped).
pub fn decode_square_rgb(bytes: &[u8], size: u32) -> AppResult<RgbImage> {
    let img = image::load_from_memory(bytes).map_err(|e| AppError::ImageDecode(e.to_string()))?;
    Ok(img.resize_exact(size, size, FilterType::Triangle).to_rgb8())
}

/// Aggregate pixel statistics for one image
#[derive(Debug, Clone, Default)]
pub struct PixelStats {
    pub mean_r: f64,
    pub mean_g: f64,
    pub mean_b: f64,
    /// Green channel dominance: mean(G) / (mean(R) + mean(B))
    pub green_ratio: f64,
    /// Mean intensity over all channels and pixels
    pub brightness: f64,
    /// Warmth proxy: mean(R) / mean(B)
    pub color_temp: f64,
    /// Normalized finite-difference edge measure over interior pixels
    pub edge_density: f64,
    /// Mean intensity of the soil region; `None` when the region has no
    /// rows
    pub soil_brightness: Option<f64>,
}

impl PixelStats {
    pub fn compute(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        if w == 0 || h == 0 {
            return Self::default();
        }
        let n = w as f64 * h as f64;

        let mut sum = [0f64; 3];
        for p in img.pixels() {
            sum[0] += p[0] as f64;
            sum[1] += p[1] as f64;
            sum[2] += p[2] as f64;
        }
        let mean_r = sum[0] / n;
        let mean_g = sum[1] / n;
        let mean_b = sum[2] / n;

        Self {
            mean_r,
            mean_g,
            mean_b,
            green_ratio: mean_g / (mean_r + mean_b + EPS),
            brightness: (sum[0] + sum[1] + sum[2]) / (3.0 * n),
            color_temp: mean_r / (mean_b + EPS),
            edge_density: edge_density(img),
            soil_brightness: soil_brightness(img),
        }
    }
}

/// Mean intensity of the bottom 30% of rows, the part of a field photo
/// that usually shows ground rather than plant
fn soil_brightness(img: &RgbImage) -> Option<f64> {
    let (w, h) = img.dimensions();
    let start = (h as f64 * SOIL_REGION_START) as u32;
    if start >= h || w == 0 {
        return None;
    }

    let mut total = 0f64;
    for y in start..h {
        for x in 0..w {
            let p = img.get_pixel(x, y);
            total += p[0] as f64 + p[1] as f64 + p[2] as f64;
        }
    }
    let rows = (h - start) as f64;
    Some(total / (3.0 * rows * w as f64))
}

/// Sum of absolute horizontal and vertical gray differences over interior
/// pixels, scaled by 255 and normalized by the full pixel count. Acts as a
/// proxy for plant structural complexity.
fn edge_density(img: &RgbImage) -> f64 {
    let (w, h) = (img.width() as usize, img.height() as usize);
    if w < 3 || h < 3 {
        return 0.0;
    }

    let mut gray = vec![0f64; w * h];
    for (x, y, p) in img.enumerate_pixels() {
        gray[y as usize * w + x as usize] = (p[0] as f64 + p[1] as f64 + p[2] as f64) / 3.0;
    }

    let mut total = 0f64;
    for i in 1..h - 1 {
        for j in 1..w - 1 {
            let center = gray[i * w + j];
            let diff_h = (center - gray[i * w + j - 1]).abs() + (center - gray[i * w + j + 1]).abs();
            let diff_v = (center - gray[(i - 1) * w + j]).abs() + (center - gray[(i + 1) * w + j]).abs();
            total += (diff_h + diff_v) / 255.0;
        }
    }
    total / (w * h) as f64
}

/// Crop detection from color balance and brightness
pub fn detect_crop_type(stats: &PixelStats) -> CropType {
    if stats.green_ratio > 1.3 && stats.brightness > 120.0 {
        // High green content and bright: leafy crop
        if stats.mean_r > stats.mean_g * 0.8 {
            CropType::Tomato
        } else {
            CropType::Lettuce
        }
    } else if stats.green_ratio > 1.1 && stats.brightness < 100.0 {
        // Medium green, darker: root vegetable
        CropType::Potato
    } else if stats.brightness > 150.0 && stats.mean_g > 100.0 {
        CropType::Corn
    } else if stats.brightness < 80.0 {
        if stats.green_ratio < 0.8 {
            CropType::Wheat
        } else {
            CropType::Rice
        }
    } else {
        CropType::Tomato
    }
}

/// Growth stage from structural complexity
pub fn detect_growth_stage(stats: &PixelStats) -> GrowthStage {
    if stats.edge_density < 0.1 {
        GrowthStage::Seedling
    } else if stats.edge_density < 0.2 {
        GrowthStage::Vegetative
    } else if stats.edge_density < 0.3 {
        GrowthStage::Flowering
    } else if stats.edge_density < 0.4 {
        GrowthStage::Fruiting
    } else {
        GrowthStage::Mature
    }
}

/// Soil type from the soil-region brightness
pub fn detect_soil_type(stats: &PixelStats) -> SoilType {
    match stats.soil_brightness {
        Some(b) if b > 150.0 => SoilType::Sandy,
        Some(b) if b < 80.0 => SoilType::Clay,
        Some(_) => SoilType::Loamy,
        None => SoilType::Loamy,
    }
}

/// Soil moisture from the soil-region brightness; dark soil reads as wet
pub fn detect_soil_moisture(stats: &PixelStats) -> SoilMoisture {
    match stats.soil_brightness {
        Some(b) if b < 60.0 => SoilMoisture::Wet,
        Some(b) if b > 140.0 => SoilMoisture::Dry,
        Some(_) => SoilMoisture::Moist,
        None => SoilMoisture::Moist,
    }
}

/// Weather condition from brightness and color temperature.
///
/// Rule order is load-bearing: the rainy branch is checked before the
/// color-temperature branches, so below a brightness of 80 a warm image
/// still reads as rainy. This ordering is inherited from the rule table
/// this classifier was built against and must not be reordered.
pub fn detect_weather_condition(stats: &PixelStats) -> WeatherCondition {
    if stats.brightness > 180.0 {
        WeatherCondition::Sunny
    } else if stats.brightness > 140.0 {
        WeatherCondition::PartlyCloudy
    } else if stats.brightness > 100.0 {
        WeatherCondition::Cloudy
    } else if stats.brightness < 80.0 {
        WeatherCondition::Rainy
    } else if stats.color_temp > 1.5 {
        WeatherCondition::Hot
    } else {
        WeatherCondition::Cool
    }
}

/// Run every condition classifier over one image.
///
/// `disease_status` is left at Healthy here and back-filled once the
/// disease classifier has run. Zero-size grids produce the fixed default
/// analysis.
pub fn analyze_image(img: &RgbImage) -> ImageAnalysis {
    if img.width() == 0 || img.height() == 0 {
        return ImageAnalysis::default();
    }
    let stats = PixelStats::compute(img);
    ImageAnalysis {
        crop_type: detect_crop_type(&stats),
        growth_stage: detect_growth_stage(&stats),
        soil_type: detect_soil_type(&stats),
        soil_moisture: detect_soil_moisture(&stats),
        weather_condition: detect_weather_condition(&stats),
        disease_status: DiseaseLabel::Healthy,
    }
}
