use crate::{
    error::{GeminiError, Result},
    models::{InlineData, Part},
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;

/// Mime type attached to inlined images. The upstream originals hardcoded
/// theirs the same way.
pub const INLINE_MIME_TYPE: &str = "image/jpeg";

#[derive(Clone)]
pub struct ImageFetcher {
    http: Client,
}

impl ImageFetcher {
    pub fn new(http: Client) -> Self {
        Self { http }
    }

    /// Download the raw bytes behind an image URL. Any transport failure or
    /// non-2xx status is an `ImageFetchError`.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        log::info!("Fetching image: {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GeminiError::ImageFetchError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeminiError::ImageFetchError(format!(
                "image server returned status {}",
                status
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GeminiError::ImageFetchError(e.to_string()))?;

        log::debug!("Fetched {} image bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Wrap raw image bytes as a base64 inline-data part.
    pub fn inline_part(bytes: &[u8]) -> Part {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: INLINE_MIME_TYPE.to_string(),
                data: BASE64.encode(bytes),
            },
        }
    }
}
