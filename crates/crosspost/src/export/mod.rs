mod source;

use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use crosspost_core::options::{DEFAULT_OPEN_GAME_LICENSE_URL, DEFAULT_SITE_NAME};
use crosspost_core::{renderer_for, Dialect, Document, ExportOptions as SiteOptions};
use scraper::Html;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub use source::Source;

#[derive(Debug, clap::Args, Clone)]
pub struct ExportOptions {
    /// Path or http(s) URL of the rendered article
    #[clap(env = "CROSSPOST_SOURCE")]
    pub source: String,

    /// Target dialect (see `crosspost dialects`)
    #[arg(short, long, env = "CROSSPOST_TO", default_value = "reddit")]
    pub to: String,

    /// Site name used in the "Originally posted at" banner
    #[arg(long, env = "CROSSPOST_SITE_NAME", default_value = DEFAULT_SITE_NAME)]
    pub site_name: String,

    /// License page linked from open game content sections
    #[arg(long, env = "CROSSPOST_LICENSE_URL", default_value = DEFAULT_OPEN_GAME_LICENSE_URL)]
    pub license_url: String,

    /// Write the result to this file instead of stdout
    #[arg(short, long, env = "CROSSPOST_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Timeout in seconds when fetching a URL (default: 30)
    #[arg(long, env = "CROSSPOST_TIMEOUT", default_value = "30")]
    pub timeout: u64,
}

impl ExportOptions {
    fn site_options(&self) -> SiteOptions {
        SiteOptions {
            site_name: self.site_name.clone(),
            open_game_license_url: self.license_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExportOutput<'a> {
    dialect: Dialect,
    #[serde(flatten)]
    document: &'a Document,
    content: String,
}

pub async fn run(options: ExportOptions, global: crate::Global) -> Result<()> {
    let site = options.site_options();

    // Resolve the dialect before touching the source.
    let renderer = renderer_for(&options.to, &site)?;
    let dialect = renderer.dialect();

    let source = Source::parse(&options.source);
    log::info!("reading {source}");
    if global.verbose {
        eprintln!("Source: {}", source);
        eprintln!("Dialect: {}", dialect);
    }

    let html_source = source
        .read(Duration::from_secs(options.timeout))
        .await?;

    let document = {
        let html = Html::parse_document(&html_source);
        Document::from_html(&html, renderer.as_ref(), &site)
            .with_context(|| format!("Failed to export {source}"))?
    };

    let content = format_output(&document, dialect, options.json)?;

    match &options.output {
        Some(path) => {
            write_output(path, &content).await?;
            log::info!("wrote {}", path.display());
        }
        None => println!("{}", content),
    }

    if std::io::stdout().is_terminal() && !options.json {
        print_summary(&document, dialect, options.output.as_deref());
    }

    Ok(())
}

/// The export as it should be written: plain text, or JSON carrying the
/// document fields alongside the text.
pub fn format_output(document: &Document, dialect: Dialect, json: bool) -> Result<String> {
    if !json {
        return Ok(document.to_string());
    }

    let output = ExportOutput {
        dialect,
        document,
        content: document.to_string(),
    };
    serde_json::to_string_pretty(&output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

async fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut content = content.to_string();
    if !content.ends_with('\n') {
        content.push('\n');
    }
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn print_summary(document: &Document, dialect: Dialect, output: Option<&Path>) {
    eprintln!("\n{}", "=".repeat(80).bright_cyan());
    eprintln!("{}", "CROSSPOST EXPORT".bright_cyan().bold());
    eprintln!("{}", "=".repeat(80).bright_cyan());

    eprintln!("\n{}: {}", "Title".green(), document.title.bright_white().bold());
    eprintln!(
        "{}: {}",
        "Canonical URL".green(),
        document.canonical_url.cyan().underline()
    );
    eprintln!("{}: {}", "Dialect".green(), dialect.as_str().bright_magenta());
    eprintln!(
        "{}: {}",
        "Body Blocks".green(),
        document.body().len().to_string().bright_yellow().bold()
    );
    if let Some(path) = output {
        eprintln!(
            "{}: {}",
            "Written To".green(),
            path.display().to_string().bright_white()
        );
    }
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crosspost_core::transpile_str;

    const PAGE: &str = r#"<html>
<head><link rel="canonical" href="https://takeonrules.com/post/"></head>
<body><article><header><h1>Post</h1></header>
<div class="content"><p>Body <em>text</em></p></div>
</article></body></html>"#;

    fn document(dialect: &str) -> Document {
        transpile_str(PAGE, dialect, &SiteOptions::default()).unwrap()
    }

    #[test]
    fn test_format_output_text() {
        let text = format_output(&document("reddit"), Dialect::Reddit, false).unwrap();
        assert_eq!(
            text,
            "# Post\n\n**Originally posted at [Take on Rules](https://takeonrules.com/post/)**\n\nBody *text*\n\n**Originally posted at [Take on Rules](https://takeonrules.com/post/)**"
        );
    }

    #[test]
    fn test_format_output_json() {
        let json = format_output(&document("rpggeek"), Dialect::Rpggeek, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["dialect"], "rpggeek");
        assert_eq!(value["title"], "Post");
        assert_eq!(value["canonical_url"], "https://takeonrules.com/post/");
        assert_eq!(value["blocks"][2], "Body [i]text[/i]");
        assert!(value["content"].as_str().unwrap().contains("\n\nBody [i]text[/i]\n\n"));
    }

    #[test]
    fn test_site_options_from_flags() {
        let options = ExportOptions {
            source: "index.html".to_string(),
            to: "reddit".to_string(),
            site_name: "Elsewhere".to_string(),
            license_url: "https://example.com/ogl".to_string(),
            output: None,
            json: false,
            timeout: 30,
        };
        let site = options.site_options();
        assert_eq!(site.site_name, "Elsewhere");
        assert_eq!(site.open_game_license_url, "https://example.com/ogl");
    }

    #[tokio::test]
    async fn test_write_output_adds_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.txt");
        write_output(&path, "# Post").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Post\n");
    }
}
