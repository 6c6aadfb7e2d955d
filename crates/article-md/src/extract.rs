//! Locate the article inside a full page.
//!
//! Finds the article root, its title and the body subtree that gets handed
//! to the converter. Selectors come from [`ExtractOptions`].

use scraper::{Html, Selector};
use tracing::debug;

use crate::html::from_element;
use crate::node::Node;
use crate::options::ExtractOptions;
use crate::{ArticleError, Result};

/// The pieces of a page needed to build a Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Article title, or the configured fallback
    pub title: String,
    /// Article body subtree
    pub body: Node,
}

/// Extract the article title and body from an HTML page.
///
/// Fails only when a selector is invalid or the article root is missing.
/// A missing title falls back to `options.fallback_title` and a missing body
/// element falls back to the article root.
pub fn extract_article(html: &str, options: &ExtractOptions) -> Result<Article> {
    let article_selector = parse_selector(&options.article_selector)?;
    let title_selector = parse_selector(&options.title_selector)?;
    let body_selector = parse_selector(&options.body_selector)?;

    let document = Html::parse_document(html);
    let root = document
        .select(&article_selector)
        .next()
        .ok_or_else(|| ArticleError::ArticleNotFound {
            selector: options.article_selector.clone(),
        })?;

    let title = root
        .select(&title_selector)
        .next()
        .map(|title| from_element(title).flattened_text())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| {
            debug!(selector = %options.title_selector, "no title found, using fallback");
            options.fallback_title.clone()
        });

    let body = match root.select(&body_selector).next() {
        Some(body) => body,
        None => {
            debug!(selector = %options.body_selector, "no body element, using article root");
            root
        }
    };

    Ok(Article {
        title,
        body: from_element(body),
    })
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ArticleError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
