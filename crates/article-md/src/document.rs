//! Markdown document assembly and output naming

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::DEFAULT_FALLBACK_TITLE;

/// Characters that are not allowed in file names on common platforms
static UNSAFE_FILE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[\\/:*?"<>|']"#).unwrap());

/// A converted article: a title and its Markdown body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    pub title: String,
    pub body: String,
}

impl MarkdownDocument {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Full document text with a level-one title line on top
    pub fn render(&self) -> String {
        format!("# {}\n\n{}", self.title, self.body)
    }

    /// Suggested output file name, derived from the title
    pub fn file_name(&self) -> String {
        file_name_for(&self.title)
    }
}

/// Strip characters that are unsafe in file names and append `.md`.
///
/// Falls back to `article.md` when nothing usable is left.
pub fn file_name_for(title: &str) -> String {
    let stem = UNSAFE_FILE_CHARS.replace_all(title, "");
    let stem = stem.trim();
    if stem.is_empty() {
        format!("{DEFAULT_FALLBACK_TITLE}.md")
    } else {
        format!("{stem}.md")
    }
}
