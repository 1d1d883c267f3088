use crate::{
    error::{GeminiError, Result},
    models::{ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, Part},
};
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

#[derive(Clone)]
pub struct ContentClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ContentClient {
    pub fn new(
        http: Client,
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Self {
        Self {
            http,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("gemini-2.5-pro", "Gemini 2.5 Pro", "Google"),
            ("gemini-2.5-flash", "Gemini 2.5 Flash", "Google"),
            ("gemini-2.0-flash", "Gemini 2.0 Flash", "Google"),
            ("gemini-1.5-pro", "Gemini 1.5 Pro", "Google"),
        ]
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Send the given parts as a single user-role message and return the
    /// first candidate's first text part, trimmed.
    pub async fn generate(&self, parts: Vec<Part>) -> Result<String> {
        if parts.is_empty() {
            return Err(GeminiError::InvalidInput("no content parts to send".into()));
        }

        let payload = Self::build_request(parts);
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| GeminiError::SerializationError(e.to_string()))?;

        log::info!("Invoking model: {}", self.model);
        log::debug!("generateContent request payload: {}", request_json);

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .body(request_json)
            .send()
            .await
            .map_err(|e| GeminiError::RequestError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::ResponseError(e.to_string()))?;

        if !status.is_success() {
            log::error!("Gemini API returned {}: {}", status, body);
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| format!("upstream returned status {}", status));
            return Err(GeminiError::ApiError(message));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::ResponseError(e.to_string()))?;

        Self::extract_text(&parsed)
    }

    pub(crate) fn build_request(parts: Vec<Part>) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
        }
    }

    pub(crate) fn extract_text(response: &GenerateContentResponse) -> Result<String> {
        let text = response
            .candidates
            .as_deref()
            .unwrap_or_default()
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or_default()
            .iter()
            .find_map(|part| match part {
                Part::Text { text } => Some(text.trim()),
                _ => None,
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        Ok(text.to_string())
    }
}
