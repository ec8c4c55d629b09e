//! Session-local set of favorited recipes.
//!
//! The set is ordered by insertion and never holds two recipes with the same
//! id. Its size is mirrored into a [`watch`] channel so that read-only
//! consumers such as the sidebar see the count without touching the set.

use tokio::sync::watch;

use crate::model::{Recipe, RecipeId};

/// Outcome of [`FavoritesSet::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

#[derive(Debug)]
pub struct FavoritesSet {
    recipes: Vec<Recipe>,
    count: watch::Sender<usize>,
}

impl Default for FavoritesSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesSet {
    pub fn new() -> Self {
        let (count, _) = watch::channel(0);
        Self {
            recipes: Vec::new(),
            count,
        }
    }

    /// Remove the recipe if its id is present, append it otherwise.
    ///
    /// Only the id is compared; a favorited copy is never refreshed with
    /// newer content for the same id.
    pub fn toggle(&mut self, recipe: &Recipe) -> Toggled {
        let outcome = match self.position(recipe.id) {
            Some(index) => {
                self.recipes.remove(index);
                Toggled::Removed
            }
            None => {
                self.recipes.push(recipe.clone());
                Toggled::Added
            }
        };
        self.count.send_replace(self.recipes.len());
        outcome
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    /// A read-only view of the favorites count, updated on every toggle
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.count.subscribe()
    }

    fn position(&self, id: RecipeId) -> Option<usize> {
        self.recipes.iter().position(|recipe| recipe.id == id)
    }
}
