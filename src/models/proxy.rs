use serde::{Deserialize, Serialize};

/// Incoming proxy request. At least one of the two fields must be present;
/// the handler enforces this.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    pub prompt: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProxyResponse {
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorResponse {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_fields_are_optional() {
        let request: ProxyRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.prompt.is_none());
        assert!(request.image_url.is_none());

        let request: ProxyRequest =
            serde_json::from_value(json!({"prompt": "hi", "imageUrl": "http://x/y.jpg"})).unwrap();
        assert_eq!(request.prompt.as_deref(), Some("hi"));
        assert_eq!(request.image_url.as_deref(), Some("http://x/y.jpg"));
    }

    #[test]
    fn responses_use_original_field_names() {
        let ok = serde_json::to_value(ProxyResponse {
            result: "Hi!".to_string(),
        })
        .unwrap();
        assert_eq!(ok, json!({"result": "Hi!"}));

        let err = serde_json::to_value(ErrorResponse::new("Prompt missing")).unwrap();
        assert_eq!(err, json!({"error": "Prompt missing"}));
    }
}
