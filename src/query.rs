/// Search text and cuisine filter entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    search_text: String,
    cuisine_filter: Option<String>,
}

impl Query {
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn cuisine_filter(&self) -> Option<&str> {
        self.cuisine_filter.as_deref()
    }

    /// Replace the search text.
    ///
    /// Returns `true` when the text actually changed, in which case exactly
    /// one new fetch is owed.
    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.search_text {
            return false;
        }
        self.search_text = text;
        true
    }

    /// Replace the cuisine filter. An empty string clears it.
    ///
    /// Filtering is done client-side, so this never requires a fetch.
    pub fn set_cuisine_filter<S: Into<String>>(&mut self, filter: Option<S>) {
        self.cuisine_filter = filter.map(Into::into).filter(|f| !f.is_empty());
    }

    /// The term to send to the search endpoint
    pub fn effective_search_term<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.search_text.is_empty() {
            fallback
        } else {
            &self.search_text
        }
    }
}
