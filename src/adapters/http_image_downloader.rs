use async_trait::async_trait;

use super::google_custom_search_provider::check_status;
use crate::core::errors::PaletteResult;
use crate::core::interfaces::adapters::ImageDownloader;

pub struct HttpImageDownloader {
    client: reqwest::Client,
}

impl HttpImageDownloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ImageDownloader for HttpImageDownloader {
    async fn fetch_image_bytes(&self, url: &str) -> PaletteResult<Vec<u8>> {
        log::debug!("[DOWNLOADER] Fetching {}", url);

        let response = self.client.get(url).send().await?;

        check_status(response.status()).inspect_err(|_| {
            log::warn!("[DOWNLOADER] Image request failed with status {}", response.status());
        })?;

        let image_bytes = response.bytes().await?;
        log::debug!("[DOWNLOADER] Received {} bytes", image_bytes.len());

        Ok(image_bytes.to_vec())
    }
}
