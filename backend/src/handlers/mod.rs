//! HTTP handlers for the Smart Farming Advisor

pub mod catalog;
pub mod disease;
pub mod health;
pub mod water;

pub use catalog::list_crops;
pub use disease::predict_disease;
pub use health::{health_check, root};
pub use water::{calculate_water, predict_water};

use axum::extract::Multipart;

use crate::error::{AppError, AppResult};

/// Pull the raw bytes of the `image` part out of a multipart upload
pub(crate) async fn read_image_field(multipart: &mut Multipart) -> AppResult<Vec<u8>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() == Some("image") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read image field: {}", e)))?;
            if data.is_empty() {
                return Err(AppError::InvalidInput("Uploaded image is empty".to_string()));
            }
            return Ok(data.to_vec());
        }
    }
    Err(AppError::InvalidInput("No image uploaded".to_string()))
}
