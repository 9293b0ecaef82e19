//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Gamma API ===
    /// Gamma API base URL (without the `/events` path).
    #[serde(default = "default_gamma_url")]
    pub gamma_api_url: String,

    // === Prompt ===
    /// Include per-market volume lines in the prompt.
    #[serde(default = "default_true")]
    pub include_volume: bool,

    /// File replacing the built-in prompt preamble.
    #[serde(default)]
    pub prompt_preamble_path: Option<PathBuf>,

    /// File replacing the built-in closing instructions.
    #[serde(default)]
    pub prompt_instructions_path: Option<PathBuf>,

    // === Server Configuration ===
    /// HTTP server port for the prompt API.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_gamma_url() -> String {
    "https://gamma-api.polymarket.com".to_string()
}

fn default_true() -> bool {
    true
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gamma_api_url: default_gamma_url(),
            include_volume: default_true(),
            prompt_preamble_path: None,
            prompt_instructions_path: None,
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Load configuration and reject it if invalid.
    pub fn load_validated() -> crate::error::Result<Self> {
        let config = Self::load()?;
        config.validate().map_err(AppError::InvalidConfig)?;
        Ok(config)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.gamma_api_url)
            .map_err(|e| format!("GAMMA_API_URL is not a valid url: {}", e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err("GAMMA_API_URL must use http or https".to_string());
        }

        for path in [&self.prompt_preamble_path, &self.prompt_instructions_path]
            .into_iter()
            .flatten()
        {
            if !path.is_file() {
                return Err(format!("prompt template file not found: {}", path.display()));
            }
        }

        Ok(())
    }

    /// Gamma `/events` endpoint derived from the base URL.
    pub fn events_url(&self) -> String {
        format!("{}/events", self.gamma_api_url.trim_end_matches('/'))
    }
}
