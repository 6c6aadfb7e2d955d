//! ArticleService - the main entry point for page to Markdown conversion.

use tracing::debug;

use crate::convert::convert;
use crate::document::MarkdownDocument;
use crate::node::Node;
use crate::options::ExtractOptions;
#[cfg(feature = "html")]
use crate::{extract::extract_article, Result};

/// The main service for turning article pages into Markdown documents
#[derive(Debug, Clone, Default)]
pub struct ArticleService {
    options: ExtractOptions,
}

impl ArticleService {
    /// Create a new ArticleService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an ArticleService with custom options
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ExtractOptions {
        &mut self.options
    }

    /// Convert an already selected article body to Markdown
    pub fn convert_node(&self, node: &Node) -> String {
        convert(node)
    }

    /// Extract the article from an HTML page and convert its body
    #[cfg(feature = "html")]
    pub fn extract(&self, html: &str) -> Result<MarkdownDocument> {
        let article = extract_article(html, &self.options)?;
        let body = self.convert_node(&article.body);
        debug!(title = %article.title, bytes = body.len(), "converted article");
        Ok(MarkdownDocument::new(article.title, body))
    }

    /// Convert a body tree under the given title
    pub fn document(&self, title: &str, node: &Node) -> MarkdownDocument {
        let body = self.convert_node(node);
        debug!(title, bytes = body.len(), "converted node tree");
        MarkdownDocument::new(title, body)
    }
}
