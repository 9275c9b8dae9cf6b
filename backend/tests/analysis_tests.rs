//! Tests for the heuristic condition classifiers
//!
//! The classifiers are pure functions of the pixel statistics, so the
//! boundary cases here construct the statistics directly; decoding and
//! statistics extraction have their own tests next to the implementation.

use shared::{CropType, GrowthStage, SoilMoisture, SoilType, WeatherCondition};
use smart_farming_backend::services::analysis::{
    detect_crop_type, detect_growth_stage, detect_soil_moisture, detect_soil_type,
    detect_weather_condition, PixelStats,
};

fn stats() -> PixelStats {
    PixelStats::default()
}

mod crop_type {
    use super::*;

    #[test]
    fn bright_green_with_red_presence_is_tomato() {
        let s = PixelStats {
            brightness: 200.0,
            green_ratio: 1.5,
            mean_r: 130.0,
            mean_g: 150.0,
            ..stats()
        };
        assert_eq!(detect_crop_type(&s), CropType::Tomato);
    }

    #[test]
    fn bright_green_without_red_is_lettuce() {
        let s = PixelStats {
            brightness: 130.0,
            green_ratio: 1.4,
            mean_r: 60.0,
            mean_g: 200.0,
            ..stats()
        };
        assert_eq!(detect_crop_type(&s), CropType::Lettuce);
    }

    #[test]
    fn dark_medium_green_is_potato() {
        let s = PixelStats {
            brightness: 90.0,
            green_ratio: 1.2,
            ..stats()
        };
        assert_eq!(detect_crop_type(&s), CropType::Potato);
    }

    #[test]
    fn very_bright_with_green_channel_is_corn() {
        let s = PixelStats {
            brightness: 160.0,
            green_ratio: 1.0,
            mean_g: 120.0,
            ..stats()
        };
        assert_eq!(detect_crop_type(&s), CropType::Corn);
    }

    #[test]
    fn dark_low_green_is_wheat() {
        let s = PixelStats {
            brightness: 50.0,
            green_ratio: 0.5,
            ..stats()
        };
        assert_eq!(detect_crop_type(&s), CropType::Wheat);
    }

    #[test]
    fn dark_greenish_is_rice() {
        let s = PixelStats {
            brightness: 70.0,
            green_ratio: 0.9,
            ..stats()
        };
        assert_eq!(detect_crop_type(&s), CropType::Rice);
    }

    #[test]
    fn middle_of_the_road_defaults_to_tomato() {
        let s = PixelStats {
            brightness: 110.0,
            green_ratio: 1.0,
            mean_g: 90.0,
            ..stats()
        };
        assert_eq!(detect_crop_type(&s), CropType::Tomato);
    }
}

mod growth_stage {
    use super::*;

    fn with_edges(edge_density: f64) -> PixelStats {
        PixelStats {
            edge_density,
            ..stats()
        }
    }

    #[test]
    fn stage_thresholds() {
        assert_eq!(detect_growth_stage(&with_edges(0.05)), GrowthStage::Seedling);
        assert_eq!(detect_growth_stage(&with_edges(0.15)), GrowthStage::Vegetative);
        assert_eq!(detect_growth_stage(&with_edges(0.25)), GrowthStage::Flowering);
        assert_eq!(detect_growth_stage(&with_edges(0.35)), GrowthStage::Fruiting);
        assert_eq!(detect_growth_stage(&with_edges(0.5)), GrowthStage::Mature);
    }

    #[test]
    fn thresholds_are_exclusive_upper_bounds() {
        assert_eq!(detect_growth_stage(&with_edges(0.1)), GrowthStage::Vegetative);
        assert_eq!(detect_growth_stage(&with_edges(0.2)), GrowthStage::Flowering);
        assert_eq!(detect_growth_stage(&with_edges(0.3)), GrowthStage::Fruiting);
        assert_eq!(detect_growth_stage(&with_edges(0.4)), GrowthStage::Mature);
    }
}

mod soil {
    use super::*;

    fn with_soil(brightness: f64) -> PixelStats {
        PixelStats {
            soil_brightness: Some(brightness),
            ..stats()
        }
    }

    #[test]
    fn soil_type_bands() {
        assert_eq!(detect_soil_type(&with_soil(160.0)), SoilType::Sandy);
        assert_eq!(detect_soil_type(&with_soil(100.0)), SoilType::Loamy);
        assert_eq!(detect_soil_type(&with_soil(70.0)), SoilType::Clay);
    }

    #[test]
    fn soil_moisture_bands() {
        assert_eq!(detect_soil_moisture(&with_soil(50.0)), SoilMoisture::Wet);
        assert_eq!(detect_soil_moisture(&with_soil(100.0)), SoilMoisture::Moist);
        assert_eq!(detect_soil_moisture(&with_soil(150.0)), SoilMoisture::Dry);
    }

    #[test]
    fn missing_soil_region_falls_back_to_defaults() {
        let s = PixelStats {
            soil_brightness: None,
            ..stats()
        };
        assert_eq!(detect_soil_type(&s), SoilType::Loamy);
        assert_eq!(detect_soil_moisture(&s), SoilMoisture::Moist);
    }
}

mod weather {
    use super::*;

    fn conditions(brightness: f64, color_temp: f64) -> WeatherCondition {
        detect_weather_condition(&PixelStats {
            brightness,
            color_temp,
            ..stats()
        })
    }

    #[test]
    fn brightness_bands() {
        assert_eq!(conditions(190.0, 1.0), WeatherCondition::Sunny);
        assert_eq!(conditions(150.0, 1.0), WeatherCondition::PartlyCloudy);
        assert_eq!(conditions(120.0, 1.0), WeatherCondition::Cloudy);
        assert_eq!(conditions(70.0, 1.0), WeatherCondition::Rainy);
    }

    #[test]
    fn color_temperature_splits_the_dim_band() {
        assert_eq!(conditions(90.0, 1.6), WeatherCondition::Hot);
        assert_eq!(conditions(90.0, 1.2), WeatherCondition::Cool);
    }

    #[test]
    fn rainy_shadows_color_temperature_below_eighty() {
        // The rainy branch is evaluated before the color-temperature
        // branches; a warm dark image still reads as rainy
        assert_eq!(conditions(70.0, 2.5), WeatherCondition::Rainy);
    }
}
