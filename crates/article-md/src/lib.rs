//! # article-md
//!
//! Convert the main content of a web article page to Markdown.
//!
//! ## Design
//!
//! The converter accepts a parser-agnostic [`Node`] tree rooted at the
//! article body and walks it once, mapping a small set of blog-style tags
//! (headings, paragraphs, lists, blockquotes, images, links) to Markdown.
//! Everything else is descended into without emitting markup.
//!
//! - **Infallible conversion**: [`convert`] is a total function over any tree
//! - **Parser agnostic**: any HTML parser can lower its output to [`Node`]
//! - **Optional parsing**: the default `html` feature adds `scraper`-based
//!   parsing and article extraction
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use article_md::{convert, Node};
//!
//! let mut h1 = Node::element("h1");
//! h1.add_child(Node::text("Hello World"));
//!
//! assert_eq!(convert(&h1), "# Hello World\n");
//! ```
//!
//! ## Example (HTML page)
//!
//! ```rust
//! # #[cfg(feature = "html")]
//! # {
//! use article_md::ArticleService;
//!
//! let page = r#"<article class="article">
//!   <h1 class="article-title">Hello</h1>
//!   <div id="article-root"><p>World</p></div>
//! </article>"#;
//!
//! let document = ArticleService::new().extract(page).unwrap();
//! assert_eq!(document.render(), "# Hello\n\nWorld\n");
//! # }
//! ```

mod convert;
mod document;
#[cfg(feature = "html")]
pub mod extract;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod service;

pub use convert::convert;
pub use document::{file_name_for, MarkdownDocument};
#[cfg(feature = "html")]
pub use extract::{extract_article, Article};
#[cfg(feature = "html")]
pub use html::{from_element, parse_document, parse_html};
pub use node::{Element, Node};
pub use options::{
    ExtractOptions, DEFAULT_ARTICLE_SELECTOR, DEFAULT_BODY_SELECTOR, DEFAULT_FALLBACK_TITLE,
    DEFAULT_TITLE_SELECTOR,
};
pub use service::ArticleService;

/// Error type for article extraction
#[derive(Debug, thiserror::Error)]
pub enum ArticleError {
    #[error("no element matches article selector `{selector}`")]
    ArticleNotFound { selector: String },

    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ArticleError>;
