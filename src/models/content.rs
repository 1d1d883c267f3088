use serde::{Deserialize, Serialize};

/// A unit of multimodal content sent to the generateContent endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData", alias = "inline_data")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64-encoded payload.
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<i32>,
    pub candidates_token_count: Option<i32>,
    pub total_token_count: Option<i32>,
}

/// Error envelope returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_part_serializes_flat() {
        let part = Part::Text {
            text: "hello".to_string(),
        };
        assert_eq!(serde_json::to_value(&part).unwrap(), json!({"text": "hello"}));
    }

    #[test]
    fn inline_data_part_uses_camel_case() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "aGk=".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&part).unwrap(),
            json!({"inlineData": {"mimeType": "image/jpeg", "data": "aGk="}})
        );
    }

    #[test]
    fn response_parses_candidate_text() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Hi!"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 2, "totalTokenCount": 5}
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let candidates = response.candidates.unwrap();
        assert_eq!(candidates.len(), 1);
        let parts = &candidates[0].content.as_ref().unwrap().parts;
        assert_eq!(
            parts[0],
            Part::Text {
                text: "Hi!".to_string()
            }
        );
        assert_eq!(response.usage_metadata.unwrap().total_token_count, Some(5));
    }

    #[test]
    fn error_envelope_parses() {
        let body = json!({
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        });
        let parsed: ApiErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.error.code, 400);
        assert_eq!(parsed.error.status, "INVALID_ARGUMENT");
    }
}
