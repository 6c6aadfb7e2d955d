// Command-line interface for article-md
//
// Reads a saved article page (a file, or stdin when the input is `-`), pulls
// out the article title and body, and writes `# <title>` followed by the
// converted body. Fetching pages is left to other tools.
//
// Usage:
//  article-md <input> [--output <file>]   - Write to <file>, or to "<title>.md"
//  article-md <input> --stdout            - Print the document instead

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use article_md::{ArticleService, ExtractOptions};
use clap::{ArgAction, Parser};
use tracing::{info, Level};

#[derive(Debug, Parser)]
#[command(
    name = "article-md",
    version,
    about = "Convert a saved article page to Markdown",
    long_about = "Extracts the article title and body from an HTML page and converts the body \
                  to Markdown. Headings, paragraphs, lists, blockquotes, images and links are \
                  translated; other markup is reduced to its text."
)]
struct Cli {
    /// HTML file to read, or `-` for stdin
    input: PathBuf,

    /// Output file; defaults to the article title with a `.md` extension
    #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the Markdown document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// CSS selector for the article root
    #[arg(long, value_name = "SELECTOR")]
    article_selector: Option<String>,

    /// CSS selector for the title inside the article
    #[arg(long, value_name = "SELECTOR")]
    title_selector: Option<String>,

    /// CSS selector for the body inside the article
    #[arg(long, value_name = "SELECTOR")]
    body_selector: Option<String>,

    /// Title used when the page has none
    #[arg(long, value_name = "TITLE")]
    fallback_title: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn extract_options(&self) -> ExtractOptions {
        let mut options = ExtractOptions::default();
        if let Some(selector) = &self.article_selector {
            options.article_selector = selector.clone();
        }
        if let Some(selector) = &self.title_selector {
            options.title_selector = selector.clone();
        }
        if let Some(selector) = &self.body_selector {
            options.body_selector = selector.clone();
        }
        if let Some(title) = &self.fallback_title {
            options.fallback_title = title.clone();
        }
        options
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .context("failed to read HTML from stdin")?;
        Ok(html)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let html = read_input(&cli.input)?;
    let service = ArticleService::with_options(cli.extract_options());
    let document = service.extract(&html)?;
    let markdown = document.render();

    if cli.stdout {
        print!("{markdown}");
        return Ok(());
    }

    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(document.file_name()));
    fs::write(&path, markdown).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote markdown");
    println!("Markdown saved to {}", path.display());

    Ok(())
}
