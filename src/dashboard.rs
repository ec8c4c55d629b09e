//! The single owner of dashboard state.
//!
//! [`Dashboard`] holds the fetched recipes, the query, the favorites and the
//! two display flags. Every mutation goes through it; renderers only ever see
//! a [`DashboardView`] or the favorites count.

use log::{debug, error};
use serde::Serialize;
use tokio::sync::watch;

use crate::error::FetchError;
use crate::favorites::{FavoritesSet, Toggled};
use crate::model::{Recipe, RecipeId};
use crate::projection::{
    cuisine_counts, favorites_split, filter_recipes, CuisineCount, FavoritesSplit,
};
use crate::query::Query;

#[derive(Debug, Default)]
pub struct Dashboard {
    recipes: Vec<Recipe>,
    query: Query,
    favorites: FavoritesSet,
    show_favorites_only: bool,
    error: Option<&'static str>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    pub fn show_favorites_only(&self) -> bool {
        self.show_favorites_only
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Returns `true` if the search text changed and a fetch is owed
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        self.query.set_search_text(text)
    }

    pub fn set_cuisine_filter<S: Into<String>>(&mut self, filter: Option<S>) {
        self.query.set_cuisine_filter(filter);
    }

    /// Flip between the filtered list and the favorites
    pub fn toggle_show_favorites(&mut self) -> bool {
        self.show_favorites_only = !self.show_favorites_only;
        self.show_favorites_only
    }

    pub fn toggle_favorite(&mut self, recipe: &Recipe) -> Toggled {
        let outcome = self.favorites.toggle(recipe);
        debug!(
            "Favorite {} {:?}, {} favorites",
            recipe.id,
            outcome,
            self.favorites.len()
        );
        outcome
    }

    /// Toggle a recipe from the current list (or the favorites) by id
    pub fn toggle_favorite_by_id(&mut self, id: RecipeId) -> Option<Toggled> {
        let recipe = self.lookup(id)?.clone();
        Some(self.toggle_favorite(&recipe))
    }

    /// Read-only favorites count for collaborators such as the sidebar
    pub fn favorites_count(&self) -> watch::Receiver<usize> {
        self.favorites.subscribe()
    }

    /// Record the outcome of a fetch.
    ///
    /// Success replaces the list and clears the error. Failure keeps the
    /// previous list and stores the fixed user-facing message.
    pub fn apply_fetch(&mut self, result: Result<Vec<Recipe>, FetchError>) {
        match result {
            Ok(recipes) => {
                debug!("Applying {} fetched recipes", recipes.len());
                self.recipes = recipes;
                self.error = None;
            }
            Err(e) => {
                error!("Error fetching recipes: {}", e);
                self.error = Some(e.user_message());
            }
        }
    }

    /// Find a recipe in the fetched list, then among the favorites
    pub fn lookup(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .or_else(|| self.favorites.get(id))
    }

    pub fn view(&self) -> DashboardView<'_> {
        let filtered = filter_recipes(&self.recipes, self.query.cuisine_filter());
        let displayed = if self.show_favorites_only {
            self.favorites.iter().collect()
        } else {
            filtered.clone()
        };

        DashboardView {
            total_recipes: filtered.len(),
            favorites_count: self.favorites.len(),
            cuisine_counts: cuisine_counts(&self.recipes),
            favorites_split: favorites_split(self.favorites.len(), filtered.len()),
            show_favorites_only: self.show_favorites_only,
            error: self.error,
            filtered,
            displayed,
            favorites: &self.favorites,
        }
    }
}

/// Everything a renderer needs, derived from the current state
#[derive(Debug, Serialize)]
pub struct DashboardView<'a> {
    pub filtered: Vec<&'a Recipe>,
    pub displayed: Vec<&'a Recipe>,
    pub total_recipes: usize,
    pub favorites_count: usize,
    pub cuisine_counts: Vec<CuisineCount>,
    pub favorites_split: FavoritesSplit,
    pub show_favorites_only: bool,
    pub error: Option<&'static str>,
    #[serde(skip)]
    favorites: &'a FavoritesSet,
}

impl DashboardView<'_> {
    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorites.contains(id)
    }
}
