use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;
use crate::model::RecipeId;

/// The two pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Dashboard,
    /// `/recipe/{id}`
    Recipe(RecipeId),
}

impl FromStr for Route {
    type Err = DashboardError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let invalid = || DashboardError::InvalidRoute(path.to_string());
        let path_trimmed = path.trim();
        let trimmed = path_trimmed.strip_suffix('/').unwrap_or(path_trimmed);
        if trimmed.is_empty() {
            return Ok(Route::Dashboard);
        }

        let id = trimmed.strip_prefix("/recipe/").ok_or_else(invalid)?;
        // digits only; u64 parsing alone would accept a leading sign
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        id.parse().map(Route::Recipe).map_err(|_| invalid())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Dashboard => write!(f, "/"),
            Route::Recipe(id) => write!(f, "/recipe/{}", id),
        }
    }
}
