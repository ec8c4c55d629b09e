use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::DashboardConfig;
use crate::error::FetchError;
use crate::model::{Recipe, RecipeDetail, RecipeId, SearchResponse};
use crate::source::RecipeSource;

/// HTTP client for the Spoonacular recipe API
pub struct SpoonacularClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    page_size: u32,
}

impl SpoonacularClient {
    /// Create a client from configuration
    ///
    /// Without an API key, requests go out unauthenticated; this is the
    /// setup for a proxy that adds the key server-side.
    pub fn new(config: &DashboardConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("recipe-dashboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        if config.api_key.is_none() {
            warn!(
                "No API key configured; requests to {} are sent without one",
                config.base_url
            );
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            page_size: config.page_size,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, params);

        let mut request = self.client.get(&url).query(params);
        if let Some(key) = &self.api_key {
            request = request.query(&[("apiKey", key)]);
        }

        let response = request.send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    fn source_name(&self) -> &str {
        "spoonacular"
    }

    async fn search(&self, query: &str) -> Result<Vec<Recipe>, FetchError> {
        let params = [
            ("query", query.to_string()),
            ("number", self.page_size.to_string()),
        ];
        let response: SearchResponse = self.get_json("/recipes/complexSearch", &params).await?;
        debug!("'{}' returned {} recipes", query, response.results.len());
        Ok(response.results)
    }

    async fn recipe_by_id(&self, id: RecipeId) -> Result<RecipeDetail, FetchError> {
        self.get_json(&format!("/recipes/{}/information", id), &[])
            .await
    }
}
