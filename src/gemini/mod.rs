pub mod content_client;
pub mod image_fetcher;

use crate::{
    config::GeminiConfig,
    error::{GeminiError, Result},
    models::Part,
};

pub use content_client::ContentClient;
pub use image_fetcher::ImageFetcher;

#[derive(Clone)]
pub struct GeminiClient {
    content_client: ContentClient,
    image_fetcher: ImageFetcher,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| GeminiError::ConfigError("GEMINI_API_KEY is not set".into()))?;

        let http = reqwest::Client::new();

        Ok(Self {
            content_client: ContentClient::new(http.clone(), api_key, config.model, config.base_url),
            image_fetcher: ImageFetcher::new(http),
        })
    }

    pub fn content(&self) -> &ContentClient {
        &self.content_client
    }

    pub fn fetch(&self) -> &ImageFetcher {
        &self.image_fetcher
    }

    /// Full proxy pipeline: optional image fetch and inlining, payload
    /// assembly (image part first, then text), upstream call, text extraction.
    pub async fn generate(&self, prompt: Option<&str>, image_url: Option<&str>) -> Result<String> {
        if prompt.is_none() && image_url.is_none() {
            return Err(GeminiError::InvalidInput(
                "prompt or imageUrl is required".into(),
            ));
        }

        let image_bytes = match image_url {
            Some(url) => Some(self.image_fetcher.fetch(url).await?),
            None => None,
        };

        let parts = Self::assemble_parts(prompt, image_bytes.as_deref());
        self.content_client.generate(parts).await
    }

    /// Assemble the ordered parts list: inline-data part first (when an
    /// image was fetched), then the text part.
    pub(crate) fn assemble_parts(prompt: Option<&str>, image_bytes: Option<&[u8]>) -> Vec<Part> {
        let mut parts = Vec::new();

        if let Some(bytes) = image_bytes {
            parts.push(ImageFetcher::inline_part(bytes));
        }

        if let Some(prompt) = prompt {
            parts.push(Part::Text {
                text: prompt.to_string(),
            });
        }

        parts
    }
}
