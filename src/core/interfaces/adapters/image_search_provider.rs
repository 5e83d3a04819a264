use async_trait::async_trait;

use crate::core::errors::PaletteResult;
use crate::core::models::ImageResult;

#[async_trait]
pub trait ImageSearchProvider: Send + Sync {
    async fn search_images(&self, query: &str) -> PaletteResult<Vec<ImageResult>>;
}
