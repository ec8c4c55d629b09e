use std::sync::Arc;
use std::time::Duration;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::session::DashboardSession;
use crate::source::{RecipeSource, SpoonacularClient};

/// Builder for configuring a [`DashboardSession`]
#[derive(Default)]
pub struct SessionBuilder {
    config: Option<DashboardConfig>,
    source: Option<Arc<dyn RecipeSource>>,
    debounce: Option<Duration>,
    api_key: Option<String>,
    base_url: Option<String>,
}

impl SessionBuilder {
    /// Use this configuration instead of loading `config.toml` and the environment
    pub fn config(mut self, config: DashboardConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a custom recipe source instead of the Spoonacular client
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use recipe_dashboard::{DashboardConfig, DashboardSession, SpoonacularClient};
    ///
    /// let client = SpoonacularClient::new(&DashboardConfig::default()).unwrap();
    /// let builder = DashboardSession::builder().source(Arc::new(client));
    /// ```
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Wait this long after the last search-text change before fetching
    pub fn debounce(mut self, duration: Duration) -> Self {
        self.debounce = Some(duration);
        self
    }

    /// Set the API key for the default client
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point the default client at another host, such as a key-injecting proxy
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Build the session
    ///
    /// # Errors
    /// Returns `DashboardError` if:
    /// - Configuration cannot be loaded
    /// - A custom source is combined with client-only options
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<DashboardSession, DashboardError> {
        let mut config = match self.config {
            Some(config) => config,
            None => DashboardConfig::load()?,
        };

        let client_options = self.api_key.is_some() || self.base_url.is_some();
        if let Some(key) = self.api_key {
            config.api_key = Some(key);
        }
        if let Some(url) = self.base_url {
            config.base_url = url;
        }

        let source: Arc<dyn RecipeSource> = match self.source {
            Some(_) if client_options => {
                return Err(DashboardError::Builder(
                    "api_key() and base_url() only apply to the default client".to_string(),
                ))
            }
            Some(source) => source,
            None => Arc::new(SpoonacularClient::new(&config)?),
        };

        let debounce = self.debounce.unwrap_or_else(|| config.debounce());
        Ok(DashboardSession::new(
            source,
            config.fallback_query,
            debounce,
        ))
    }
}
