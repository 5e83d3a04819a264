use async_trait::async_trait;

use crate::core::errors::{PaletteError, PaletteResult};
use crate::core::interfaces::adapters::ImageSearchProvider;
use crate::core::models::{ImageResult, SearchCredentials, SearchResponse};
use crate::global_constants;

pub struct GoogleCustomSearchProvider {
    client: reqwest::Client,
    credentials: SearchCredentials,
    search_endpoint: String,
}

impl GoogleCustomSearchProvider {
    pub fn new(credentials: SearchCredentials, search_endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            search_endpoint,
        }
    }

    fn construct_search_url(&self, query: &str) -> String {
        format!(
            "{}?key={}&cx={}&q={}&searchType=image&num={}",
            self.search_endpoint,
            urlencoding::encode(&self.credentials.api_key),
            urlencoding::encode(&self.credentials.cx_id),
            urlencoding::encode(query),
            global_constants::SEARCH_RESULT_COUNT
        )
    }
}

/// Maps any non-2xx status to a transport error carrying the code.
pub fn check_status(status: reqwest::StatusCode) -> PaletteResult<()> {
    if status.is_success() {
        return Ok(());
    }

    Err(PaletteError::Transport {
        status: status.as_u16(),
    })
}

/// Turns a decoded body into the result list, surfacing an API-level error.
pub fn interpret_search_response(response: SearchResponse) -> PaletteResult<Vec<ImageResult>> {
    if let Some(api_error) = response.api_error() {
        return Err(PaletteError::Api(api_error));
    }

    Ok(response.into_items())
}

#[async_trait]
impl ImageSearchProvider for GoogleCustomSearchProvider {
    async fn search_images(&self, query: &str) -> PaletteResult<Vec<ImageResult>> {
        let search_url = self.construct_search_url(query);
        log::debug!("[CUSTOM_SEARCH] Query: {}", query);

        let response = self.client.get(&search_url).send().await?;

        check_status(response.status()).inspect_err(|_| {
            log::warn!("[CUSTOM_SEARCH] Search request failed with status {}", response.status());
        })?;

        let search_response: SearchResponse = response
            .json()
            .await
            .map_err(|e| PaletteError::Decode(e.to_string()))?;

        interpret_search_response(search_response)
    }
}
