use rgemini::{logger, Config, ContentClient, GeminiClient};
use std::env;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    logger::init_with_config(logger::LoggerConfig::from_env())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    log::info!("🔍 Checking Gemini environment...");

    match env::var("GEMINI_API_KEY") {
        Ok(key) => {
            log::info!("✅ GEMINI_API_KEY found in environment");
            log::debug!("API key starts with: {}...", key_prefix(&key));
        }
        Err(_) => {
            log::error!("❌ GEMINI_API_KEY is not set, the server cannot start");
        }
    }

    let config = Config::from_env();
    logger::log_config_info(&config);

    log::info!("📚 Supported models:");
    for (id, name, provider) in ContentClient::supported_models() {
        log::info!("  {} - {} ({})", id, name, provider);
    }

    let gemini_config = config.gemini.clone().unwrap_or_default();

    log::info!("🔄 Creating Gemini client...");
    let client = match GeminiClient::new(gemini_config) {
        Ok(client) => {
            log::info!("✅ Gemini client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
        }
    };

    rgemini::server::run(config, client).await
}

/// Redacted preview of the API key for debug logging.
fn key_prefix(key: &str) -> String {
    key.chars().take(6).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_prefix_handles_short_and_multibyte_keys() {
        assert_eq!(key_prefix("AIzaSyExample"), "AIzaSy");
        assert_eq!(key_prefix("ab"), "ab");
        assert_eq!(key_prefix(""), "");
        // Must not panic on a multi-byte character within the first bytes.
        assert_eq!(key_prefix("ключ-секрет"), "ключ-с");
    }
}
