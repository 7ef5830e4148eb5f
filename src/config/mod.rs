//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote provider settings
    pub api: ApiConfig,

    /// Search pagination bounds
    pub search: SearchConfig,
}

/// Remote provider settings
///
/// The access credential is injected here (environment or config file) and
/// nowhere else; there is deliberately no compiled-in default key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the provider API
    pub base_url: String,

    /// Access credential passed as the `apiKey` query parameter
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: std::env::var("HADITH_API_KEY").ok(),
        }
    }
}

fn default_base_url() -> String {
    "https://hadithapi.com/public/api".to_string()
}

/// Search pagination bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum page requests per search
    pub max_pages: u32,

    /// Maximum accumulated matches per search
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_pages: 5,
            max_results: 20,
        }
    }
}

/// Load configuration from a file, layered under environment overrides
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("NASIHUN"))
        .build()?;

    settings.try_deserialize()
}

/// Find a config file in the default location, if one exists
pub fn find_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("nasihun").join("config.toml");
    path.exists().then_some(path)
}

/// Get the default configuration (from env vars or defaults)
pub fn get_config() -> Config {
    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://hadithapi.com/public/api");
        assert_eq!(config.search.max_pages, 5);
        assert_eq!(config.search.max_results, 20);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[search]\nmax_pages = 3").unwrap();
        assert_eq!(config.search.max_pages, 3);
        assert_eq!(config.search.max_results, 20);
        assert_eq!(config.api.base_url, "https://hadithapi.com/public/api");
    }
}
