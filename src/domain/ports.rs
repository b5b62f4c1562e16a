use crate::utils::error::Result;
use async_trait::async_trait;
use image::DynamicImage;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where menu pictures come from. Returns the raw encoded bytes.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Surface that shows a resized menu picture to the customer.
pub trait ImageDisplay: Send + Sync {
    fn show(
        &self,
        item_key: &str,
        image: &DynamicImage,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
