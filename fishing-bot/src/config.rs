//! Bot configuration, loaded from environment variables.

use std::env;

use chat_core::{ChatError, Result};

/// Runtime configuration. The API credential is the only required value;
/// everything else has a default.
pub struct BotConfig {
    pub api_key: String,
    pub model: String,
    pub log_file: String,
    /// Optional override for the IP geolocation endpoint (mock servers in tests).
    pub geolocate_url: Option<String>,
    /// Optional override for the Gemini API base URL.
    pub api_base_url: Option<String>,
}

impl BotConfig {
    /// Loads config from environment variables. `key` overrides `GEMINI_API_KEY`.
    pub fn load(key: Option<String>) -> Result<Self> {
        let api_key = match key {
            Some(k) => k,
            None => env::var("GEMINI_API_KEY")
                .map_err(|_| ChatError::Config("GEMINI_API_KEY not set".to_string()))?,
        };
        let model =
            env::var("MODEL").unwrap_or_else(|_| spot_finder::DEFAULT_MODEL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "fishing-bot.log".to_string());
        let geolocate_url = env::var("GEOLOCATE_URL").ok();
        let api_base_url = env::var("GEMINI_API_BASE_URL").ok();

        Ok(Self {
            api_key,
            model,
            log_file,
            geolocate_url,
            api_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins_over_env() {
        let config = BotConfig::load(Some("test-key".to_string())).unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, spot_finder::DEFAULT_MODEL);
    }
}
