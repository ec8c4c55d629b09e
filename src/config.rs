use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Dashboard configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the recipe API (or of a proxy that injects the key)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key sent as the `apiKey` query parameter, if any
    #[serde(default)]
    pub api_key: Option<String>,
    /// Number of results requested per search
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Term searched for when the search text is empty
    #[serde(default = "default_fallback_query")]
    pub fallback_query: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Quiet period after the last search-text change before a request fires
    #[serde(default)]
    pub debounce_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            page_size: default_page_size(),
            fallback_query: default_fallback_query(),
            timeout: default_timeout(),
            debounce_ms: 0,
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_fallback_query() -> String {
    "pasta".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl DashboardConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// When no key is configured, `SPOONACULAR_API_KEY` is consulted.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Environment variables with RECIPES_ prefix, e.g. RECIPES__PAGE_SIZE
            .add_source(
                Environment::with_prefix("RECIPES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: DashboardConfig = settings.try_deserialize()?;
        if config.api_key.is_none() {
            config.api_key = std::env::var("SPOONACULAR_API_KEY").ok();
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> DashboardConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_base_url(), "https://api.spoonacular.com");
        assert_eq!(default_page_size(), 20);
        assert_eq!(default_fallback_query(), "pasta");
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_empty_file_matches_default() {
        assert_eq!(from_toml(""), DashboardConfig::default());
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = from_toml(
            r#"
            base_url = "http://localhost:8080"
            page_size = 5
            debounce_ms = 250
            "#,
        );

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.page_size, 5);
        assert_eq!(config.fallback_query, "pasta");
        assert_eq!(config.debounce(), Duration::from_millis(250));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_timeout_is_seconds() {
        let config = from_toml("timeout = 3");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
