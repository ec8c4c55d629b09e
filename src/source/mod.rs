mod spoonacular;

pub use spoonacular::SpoonacularClient;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::{Recipe, RecipeDetail, RecipeId};

/// A remote collection of recipes that can be searched and looked up by id
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name used in log lines
    fn source_name(&self) -> &str;

    /// Search for recipes matching a free-text query
    async fn search(&self, query: &str) -> Result<Vec<Recipe>, FetchError>;

    /// Fetch the full record of a single recipe
    async fn recipe_by_id(&self, id: RecipeId) -> Result<RecipeDetail, FetchError>;
}
