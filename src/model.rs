use serde::{Deserialize, Serialize};

pub type RecipeId = u64;

/// A recipe summary as returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Cuisine tag, matched exactly by the cuisine filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
}

impl Recipe {
    pub fn new(id: RecipeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: None,
            cuisine: None,
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }
}

/// Envelope of a `complexSearch` response
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Recipe>,
}

/// Full record for the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
}

impl From<Recipe> for RecipeDetail {
    fn from(recipe: Recipe) -> Self {
        RecipeDetail {
            id: recipe.id,
            title: recipe.title,
            image: recipe.image,
            ready_in_minutes: None,
            servings: None,
            source_url: None,
            summary: None,
            cuisines: recipe.cuisine.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_ignores_extra_fields() {
        let body = r#"{
            "results": [
                {"id": 1, "title": "Italian Pasta", "image": "https://img/1.jpg", "imageType": "jpg"},
                {"id": 2, "title": "Asian Noodles"}
            ],
            "offset": 0,
            "number": 20,
            "totalResults": 2
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].image.as_deref(), Some("https://img/1.jpg"));
        assert_eq!(response.results[1].cuisine, None);
    }

    #[test]
    fn test_search_response_requires_title() {
        let body = r#"{"results": [{"id": 1}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }

    #[test]
    fn test_detail_from_summary_keeps_cuisine() {
        let detail = RecipeDetail::from(Recipe::new(7, "Tacos").with_cuisine("Mexican"));
        assert_eq!(detail.id, 7);
        assert_eq!(detail.cuisines, vec!["Mexican".to_string()]);
        assert!(detail.summary.is_none());
    }

    #[test]
    fn test_detail_camel_case_fields() {
        let body = r#"{"id": 9, "title": "Chili", "readyInMinutes": 45, "servings": 4,
                       "sourceUrl": "https://example.com/chili", "cuisines": ["American"]}"#;
        let detail: RecipeDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.ready_in_minutes, Some(45));
        assert_eq!(detail.source_url.as_deref(), Some("https://example.com/chili"));
    }
}
