use async_trait::async_trait;

use crate::core::errors::PaletteResult;

#[async_trait]
pub trait ImageDownloader: Send + Sync {
    async fn fetch_image_bytes(&self, url: &str) -> PaletteResult<Vec<u8>>;
}
