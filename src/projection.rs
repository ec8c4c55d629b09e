//! Pure derivations over the fetched recipes and the favorites set.
//!
//! Nothing here is cached: every call recomputes from its inputs.

use serde::Serialize;

use crate::model::Recipe;

/// Cuisine labels counted for the cuisine chart, in display order
pub const CUISINE_LABELS: [&str; 4] = ["Italian", "Asian", "Mexican", "American"];

/// Recipes whose cuisine tag equals `filter` exactly, or all of them when
/// there is no filter
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: Option<&str>) -> Vec<&'a Recipe> {
    match filter {
        None => recipes.iter().collect(),
        Some(cuisine) => recipes
            .iter()
            .filter(|recipe| recipe.cuisine.as_deref() == Some(cuisine))
            .collect(),
    }
}

/// Cuisine labels whose text occurs in `title` (case-sensitive)
///
/// A title heuristic, not a structured field: "American" also matches
/// "Latin American", and "Pasta" matches nothing.
pub fn classify(title: &str) -> Vec<&'static str> {
    CUISINE_LABELS
        .iter()
        .copied()
        .filter(|label| title.contains(label))
        .collect()
}

/// One bar of the cuisine chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CuisineCount {
    pub name: &'static str,
    pub value: usize,
}

/// Per-label recipe counts, by [`classify`]
pub fn cuisine_counts(recipes: &[Recipe]) -> Vec<CuisineCount> {
    CUISINE_LABELS
        .iter()
        .map(|&name| CuisineCount {
            name,
            value: recipes
                .iter()
                .filter(|recipe| recipe.title.contains(name))
                .count(),
        })
        .collect()
}

/// Favorites versus the rest of the filtered list
///
/// `others` goes negative when favorites are missing from the current
/// list; the value is reported as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FavoritesSplit {
    pub favorites: i64,
    pub others: i64,
}

pub fn favorites_split(favorites_len: usize, filtered_len: usize) -> FavoritesSplit {
    let favorites = favorites_len as i64;
    FavoritesSplit {
        favorites,
        others: filtered_len as i64 - favorites,
    }
}
