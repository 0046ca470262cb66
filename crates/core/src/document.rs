use std::fmt;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde::Serialize;

use crate::dispatch::Dispatcher;
use crate::error::ExportError;
use crate::line::LineBuffer;
use crate::node::MarkupNode;
use crate::options::ExportOptions;
use crate::render::{renderer_for, Renderer};
use crate::text::strip;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("article header h1").unwrap());
static CANONICAL_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("link[rel=canonical]").unwrap());
static CONTENT: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".content").unwrap());

const BLOCK_SEPARATOR: &str = "\n\n";

/// A transpiled article.
///
/// `blocks` holds everything that ends up in the output, in order: the title
/// heading, the canonical banner, the body blocks and the banner again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub canonical_url: String,
    pub blocks: Vec<String>,
}

impl Document {
    pub fn from_html(
        html: &Html,
        renderer: &dyn Renderer,
        options: &ExportOptions,
    ) -> Result<Document, ExportError> {
        // Every matching heading contributes, in document order.
        let title = html
            .select(&TITLE)
            .flat_map(|h1| h1.text())
            .collect::<String>();
        let title = strip(&title).to_string();

        let canonical_url = html
            .select(&CANONICAL_LINK)
            .next()
            .and_then(|link| link.value().attr("href"))
            .ok_or(ExportError::MissingCanonicalUrl)?
            .to_string();

        let body = html
            .select(&CONTENT)
            .next()
            .map(MarkupNode::from_element)
            .ok_or(ExportError::EmptyContent)?;

        let banner = renderer.canonical_line(&canonical_url);
        let dispatcher = Dispatcher::new(renderer, options);

        let mut blocks = vec![format!("# {title}"), banner.clone()];
        for child in &body.children {
            let mut line = LineBuffer::new();
            dispatcher.handle(child, &mut line)?;
            if line.is_blank() {
                continue;
            }
            log::debug!("rendered <{}> block from {} fragment(s)", child.tag, line.len());
            blocks.push(renderer.finalize_line(&line));
        }
        blocks.push(banner);

        Ok(Document {
            title,
            canonical_url,
            blocks,
        })
    }

    /// Body blocks only, without the title and banners.
    pub fn body(&self) -> &[String] {
        match self.blocks.len() {
            n if n > 3 => &self.blocks[2..n - 1],
            _ => &[],
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.blocks.join(BLOCK_SEPARATOR))
    }
}

/// Transpile a parsed document with the given renderer.
pub fn transpile(
    html: &Html,
    renderer: &dyn Renderer,
    options: &ExportOptions,
) -> Result<String, ExportError> {
    Document::from_html(html, renderer, options).map(|document| document.to_string())
}

/// Resolve `dialect` and transpile raw HTML source. The dialect is checked
/// before the source is parsed.
pub fn transpile_str(
    source: &str,
    dialect: &str,
    options: &ExportOptions,
) -> Result<Document, ExportError> {
    let renderer = renderer_for(dialect, options)?;
    let html = Html::parse_document(source);
    Document::from_html(&html, renderer.as_ref(), options)
}
