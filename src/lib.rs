pub mod builder;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod favorites;
pub mod model;
pub mod projection;
pub mod query;
pub mod render;
pub mod route;
pub mod session;
pub mod sidebar;
pub mod source;

pub use builder::SessionBuilder;
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardView};
pub use error::{DashboardError, FetchError, FETCH_FAILED_MESSAGE};
pub use favorites::{FavoritesSet, Toggled};
pub use model::{Recipe, RecipeDetail, RecipeId};
pub use projection::{classify, CuisineCount, FavoritesSplit, CUISINE_LABELS};
pub use query::Query;
pub use route::Route;
pub use session::{DashboardSession, Update};
pub use sidebar::Sidebar;
pub use source::{RecipeSource, SpoonacularClient};

/// Search recipes with configuration from `config.toml` and the environment
///
/// An empty query searches for the configured fallback term.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = recipe_dashboard::search_recipes("tacos").await?;
/// println!("{} recipes", recipes.len());
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str) -> Result<Vec<Recipe>, DashboardError> {
    let config = DashboardConfig::load()?;
    let client = SpoonacularClient::new(&config)?;
    let term = if query.is_empty() {
        config.fallback_query.as_str()
    } else {
        query
    };
    Ok(client.search(term).await?)
}
