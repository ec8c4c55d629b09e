use thiserror::Error;

use crate::model::RecipeId;

/// The one message shown to the user whenever a fetch fails, whatever the cause
pub const FETCH_FAILED_MESSAGE: &str = "Oops! Couldn’t load recipes. Try again later.";

/// Errors raised while talking to the recipe search endpoint
///
/// The variants exist for logging; every one of them is surfaced to the
/// user as [`FETCH_FAILED_MESSAGE`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, timeout or unreadable body
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// Body did not have the expected shape
    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The fetch task ended (panicked or was aborted) without a response
    #[error("Fetch ended without a response")]
    Interrupted,
}

impl FetchError {
    /// The user-facing text for this failure
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

/// Errors that can occur while running the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Fetching from the remote endpoint failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Path does not match any known route
    #[error("Unknown route: {0}")]
    InvalidRoute(String),

    /// A detail page was requested for a route that has none
    #[error("{0} is the dashboard, not a recipe page")]
    NotARecipePage(String),

    /// No recipe with this id could be resolved
    #[error("Recipe {0} not found")]
    NotFound(RecipeId),

    /// Terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fetch_error_shares_one_message() {
        let status = FetchError::Status(reqwest::StatusCode::NOT_FOUND);
        let decode = FetchError::Decode(serde_json::from_str::<u8>("{").unwrap_err());

        assert_eq!(status.user_message(), FETCH_FAILED_MESSAGE);
        assert_eq!(decode.user_message(), FETCH_FAILED_MESSAGE);
        assert_eq!(FetchError::Interrupted.user_message(), FETCH_FAILED_MESSAGE);
        assert_eq!(status.to_string(), "Unexpected status 404 Not Found");
    }

    #[test]
    fn test_fetch_error_is_transparent_in_dashboard_error() {
        let err: DashboardError = FetchError::Status(reqwest::StatusCode::BAD_GATEWAY).into();
        assert_eq!(err.to_string(), "Unexpected status 502 Bad Gateway");
    }

    #[test]
    fn test_root_is_not_reported_as_unknown_route() {
        let err = DashboardError::NotARecipePage("/".to_string());
        assert_eq!(err.to_string(), "/ is the dashboard, not a recipe page");
    }
}
