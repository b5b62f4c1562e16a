use crate::domain::ports::ImageSource;
use crate::utils::error::{OrderError, Result};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug, Clone, Default)]
pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("Requesting image: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Image response status: {}", status);

        if !status.is_success() {
            return Err(OrderError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Downloaded {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}
