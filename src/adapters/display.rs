use crate::domain::ports::{ImageDisplay, Storage};
use crate::utils::error::Result;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Stands in for an inline image viewer: each shown picture lands as
/// `{item_key}.png` in the backing storage.
#[derive(Debug, Clone)]
pub struct PreviewDisplay<S: Storage> {
    storage: S,
}

impl<S: Storage> PreviewDisplay<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: Storage> ImageDisplay for PreviewDisplay<S> {
    async fn show(&self, item_key: &str, image: &DynamicImage) -> Result<()> {
        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

        let file_name = format!("{}.png", item_key);
        self.storage.write_file(&file_name, &png).await?;
        tracing::info!("🖼️ Preview saved: {}", file_name);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisplay;

impl ImageDisplay for NoDisplay {
    async fn show(&self, _item_key: &str, _image: &DynamicImage) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_preview_display_writes_decodable_png() {
        let temp_dir = TempDir::new().unwrap();
        let display = PreviewDisplay::new(LocalStorage::new(temp_dir.path().to_str().unwrap()));

        let image = DynamicImage::new_rgb8(200, 150);
        display.show("margherita", &image).await.unwrap();

        let bytes = std::fs::read(temp_dir.path().join("margherita.png")).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 200);
        assert_eq!(decoded.height(), 150);
    }
}
