use std::env;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub gemini: Option<GeminiConfig>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            model: None,
            base_url: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok();
        let model = env::var("GEMINI_MODEL").ok();

        GeminiConfig {
            api_key,
            model,
            base_url: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            gemini: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        Config {
            port,
            gemini: Some(GeminiConfig::from_env()),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_chain() {
        let config = Config::new()
            .with_port(8080)
            .with_gemini(GeminiConfig::new().with_api_key("k").with_model("gemini-2.5-flash"));

        assert_eq!(config.port, Some(8080));
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key.as_deref(), Some("k"));
        assert_eq!(gemini.model.as_deref(), Some("gemini-2.5-flash"));
        assert!(gemini.base_url.is_none());
    }

    #[test]
    fn defaults_are_empty() {
        let config = Config::default();
        assert!(config.port.is_none());
        assert!(config.gemini.is_none());
    }
}
