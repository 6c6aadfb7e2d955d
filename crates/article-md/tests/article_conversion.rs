//! End-to-end conversion of saved article pages.

#![cfg(feature = "html")]

use article_md::{convert, parse_html, ArticleError, ArticleService, ExtractOptions, Node};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>ignored</title><style>body { margin: 0 }</style></head>
<body>
  <nav><a href="/">Home</a></nav>
  <article class="article">
    <h1 class="article-title">Ownership: A Tour</h1>
    <div id="article-root">
      <div class="markdown-body">
        <style>.markdown-body h2 { border: none }</style>
        <h2>Why it matters</h2>
        <p>Rust tracks <strong>who owns</strong> each value.</p>
        <p>   </p>
        <ul>
          <li>Moves</li>
          <li>Borrows <code>&amp;T</code></li>
        </ul>
        <ol>
          <li>Compile</li>
          <li>Run</li>
        </ol>
        <blockquote>
          <p>Fearless concurrency.</p>
        </blockquote>
        <img src="https://example.com/tour.png" alt="diagram">
        <a href="https://doc.rust-lang.org/book/">The Book</a>
      </div>
    </div>
  </article>
</body>
</html>"#;

#[test]
fn converts_full_page() {
    let doc = ArticleService::new().extract(PAGE).unwrap();

    let expected = "\
## Why it matters

Rust trackswho ownseach value.

- Moves
- Borrows&T

1. Compile
2. Run

> Fearless concurrency.


![diagram](https://example.com/tour.png)

[The Book](https://doc.rust-lang.org/book/)";

    assert_eq!(doc.title, "Ownership: A Tour");
    assert_eq!(doc.body, expected);
    assert!(doc.render().starts_with("# Ownership: A Tour\n\n## Why it matters\n"));
    assert_eq!(doc.file_name(), "Ownership A Tour.md");
}

#[test]
fn conversion_is_deterministic() {
    let service = ArticleService::new();
    let first = service.extract(PAGE).unwrap();
    let second = service.extract(PAGE).unwrap();
    assert_eq!(first.render(), second.render());
}

#[test]
fn style_content_never_leaks() {
    let doc = ArticleService::new().extract(PAGE).unwrap();
    assert!(!doc.body.contains("border"));
    assert!(!doc.body.contains("margin"));
}

#[test]
fn page_without_article_is_an_error() {
    let err = ArticleService::new()
        .extract("<html><body><p>Just text</p></body></html>")
        .unwrap_err();
    assert!(matches!(err, ArticleError::ArticleNotFound { .. }));
}

#[test]
fn hand_built_tree_matches_parsed_fragment() {
    let built = Node::element("div")
        .with_child(Node::element("h3").with_child(Node::text("Part")))
        .with_child(
            Node::element("blockquote")
                .with_child(Node::element("p").with_child(Node::text("Quoted"))),
        );
    let parsed = parse_html("<div><h3>Part</h3><blockquote><p>Quoted</p></blockquote></div>");

    assert_eq!(convert(&built), "### Part\n\n> Quoted\n\n");
    assert_eq!(convert(&built), convert(&parsed));
}

#[test]
fn concurrent_conversions_share_one_tree() {
    let tree = parse_html("<ul><li>A</li><li>B</li></ul><p>Tail</p>");
    let expected = convert(&tree);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| convert(&tree))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn custom_fallback_title() {
    let options = ExtractOptions {
        fallback_title: "draft".to_string(),
        ..Default::default()
    };
    let doc = ArticleService::with_options(options)
        .extract(r#"<article class="article"><p>x</p></article>"#)
        .unwrap();
    assert_eq!(doc.render(), "# draft\n\nx\n");
}
