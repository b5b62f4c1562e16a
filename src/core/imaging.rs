use crate::utils::error::{OrderError, Result};
use image::imageops::FilterType;
use image::DynamicImage;

pub const PREVIEW_WIDTH: u32 = 200;

/// Height that keeps the aspect ratio at `target_width`, truncated toward zero.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> Option<u32> {
    if width == 0 {
        return None;
    }
    let scaled = u64::from(target_width) * u64::from(height) / u64::from(width);
    u32::try_from(scaled).ok()
}

pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

pub fn resize_to_width(image: &DynamicImage, target_width: u32) -> Result<DynamicImage> {
    let (width, height) = (image.width(), image.height());
    let target_height = match scaled_height(width, height, target_width) {
        Some(h) if h > 0 => h,
        _ => {
            return Err(OrderError::ImageProcessingError {
                message: format!(
                    "cannot scale a {}x{} image to width {}",
                    width, height, target_width
                ),
            })
        }
    };

    tracing::debug!(
        "Resizing image {}x{} -> {}x{}",
        width,
        height,
        target_width,
        target_height
    );
    Ok(image.resize_exact(target_width, target_height, FilterType::CatmullRom))
}
