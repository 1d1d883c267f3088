use std::fmt;

#[derive(Debug)]
pub enum GeminiError {
    ConfigError(String),
    InvalidInput(String),
    ImageFetchError(String),
    RequestError(String),
    ApiError(String),
    ResponseError(String),
    SerializationError(String),
    EmptyResponse,
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeminiError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GeminiError::ImageFetchError(msg) => write!(f, "Image fetch error: {}", msg),
            GeminiError::RequestError(msg) => write!(f, "Request error: {}", msg),
            GeminiError::ApiError(msg) => write!(f, "Gemini API error: {}", msg),
            GeminiError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            GeminiError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            GeminiError::EmptyResponse => write!(f, "Empty response: no generated text returned"),
        }
    }
}

impl std::error::Error for GeminiError {}

pub type Result<T> = std::result::Result<T, GeminiError>;
