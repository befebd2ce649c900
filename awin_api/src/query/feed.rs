//! Feed download options.

use crate::Error;

/// Selects which feeds to download and how.
///
/// Defaults to English (`en`) with adult content excluded. At least one feed
/// id must be added before the query can be turned into a URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedQuery {
    /// Publisher feed ids, requested in the order they were added.
    pub feed_ids: Vec<String>,
    /// ISO 3166-1 alpha-2 code, e.g. `de` or `en`.
    pub language: String,
    /// Include products flagged as adult content.
    pub adult_content: bool,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            feed_ids: Vec::new(),
            language: "en".to_string(),
            adult_content: false,
        }
    }
}

impl FeedQuery {
    pub fn with_feed_id(mut self, feed_id: &str) -> Self {
        self.feed_ids.push(feed_id.to_string());
        self
    }
    pub fn with_feed_ids<S: AsRef<str>>(mut self, feed_ids: &[S]) -> Self {
        self.feed_ids
            .extend(feed_ids.iter().map(|id| id.as_ref().to_string()));
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn with_adult_content(mut self, adult_content: bool) -> Self {
        self.adult_content = adult_content;
        self
    }

    /// The `adultcontent` path value.
    pub(crate) fn adult_content_flag(&self) -> &'static str {
        if self.adult_content {
            "1"
        } else {
            "0"
        }
    }

    /// Checks that the query can be sent as-is.
    pub fn validate(&self) -> Result<(), Error> {
        if self.feed_ids.is_empty() {
            return Err(Error::InvalidQuery(
                "at least one feed id is required".to_string(),
            ));
        }
        if self.feed_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(Error::InvalidQuery("feed ids must not be empty".to_string()));
        }
        if self.language.len() != 2 || !self.language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidQuery(format!(
                "language must be a two-letter code, got '{}'",
                self.language
            )));
        }
        Ok(())
    }
}
