//! Configuration options for article extraction

/// Selector that finds the article root in a full page
pub const DEFAULT_ARTICLE_SELECTOR: &str = "article.article";

/// Selector for the title heading, searched inside the article root
pub const DEFAULT_TITLE_SELECTOR: &str = "h1.article-title";

/// Selector for the article body, searched inside the article root
pub const DEFAULT_BODY_SELECTOR: &str = "#article-root";

/// Title used when the page has none
pub const DEFAULT_FALLBACK_TITLE: &str = "article";

/// Options for locating an article inside a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// CSS selector for the article root
    pub article_selector: String,

    /// CSS selector for the title element
    pub title_selector: String,

    /// CSS selector for the body; the article root is used when nothing matches
    pub body_selector: String,

    /// Title used when the title element is missing or blank
    pub fallback_title: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            article_selector: DEFAULT_ARTICLE_SELECTOR.to_string(),
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
            body_selector: DEFAULT_BODY_SELECTOR.to_string(),
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
        }
    }
}
