//! Target dialect renderers.
//!
//! A [`Renderer`] turns already-extracted fragments into markup for one
//! dialect. Renderers hold no per-document state: everything they need is
//! passed in, apart from the [`ExportOptions`] captured at construction.

mod reddit;
mod rpggeek;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::line::LineBuffer;
use crate::options::ExportOptions;
use crate::text::strip;

pub use reddit::RedditMarkdown;
pub use rpggeek::RpggeekMarkup;

pub const OGC_NOTICE: &str = r#"All non-image content between the Begin "OPEN GAME CONTENT" and "End OPEN GAME CONTENT" is "Open Game Content". All other content not declared as "Open Game Content" is "Product Identity"."#;

pub trait Renderer: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// Banner attributing the original post, placed at the top and bottom.
    fn canonical_line(&self, url: &str) -> String;

    fn footer(&self, text: &str) -> String;

    fn heading_tag(&self, level: u8, text: &str) -> Result<String, ExportError>;

    fn link(&self, href: &str, text: &str) -> String;

    fn blockquote(&self, lines: &[String]) -> String;

    fn sidenote(&self, lines: &[String]) -> String;

    fn newthought(&self, text: &str) -> String;

    /// An empty string means the dialect does not render images.
    fn image(&self, src: &str) -> String;

    fn simple_tag(&self, tag: &str, text: &str) -> Result<String, ExportError>;

    /// Render a rectangular grid. Every row has `headers.len()` cells.
    fn table(&self, headers: &[String], rows: &[Vec<String>]) -> String;

    fn table_caption(&self, text: &str) -> String;

    fn table_footer(&self, text: &str) -> String;

    /// Wrap whatever `build` writes in the dialect's table container.
    fn table_buffer(&self, build: &mut dyn FnMut(&mut String)) -> String;

    fn finalize_line(&self, line: &LineBuffer) -> String {
        strip(&line.join(" "))
            .replace("[/url] )", "[/url])")
            .replace("\n ", "\n")
    }

    fn ogc_preamble(&self) -> String {
        self.sidenote(&[OGC_NOTICE.to_string()])
    }

    fn escape(&self, text: &str) -> String {
        text.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Reddit flavored markdown
    Reddit,
    /// RPGGeek / BoardGameGeek forum markup
    Rpggeek,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Reddit, Dialect::Rpggeek];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Reddit => "reddit",
            Dialect::Rpggeek => "rpggeek",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Dialect::Reddit => "Reddit flavored markdown",
            Dialect::Rpggeek => "RPGGeek forum markup (BBCode-like)",
        }
    }

    pub fn renderer(&self, options: &ExportOptions) -> Box<dyn Renderer> {
        match self {
            Dialect::Reddit => Box::new(RedditMarkdown::new(options)),
            Dialect::Rpggeek => Box::new(RpggeekMarkup::new(options)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|dialect| dialect.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExportError::UnknownRenderer(s.to_string()))
    }
}

/// Resolve a dialect identifier into its renderer.
pub fn renderer_for(id: &str, options: &ExportOptions) -> Result<Box<dyn Renderer>, ExportError> {
    let dialect: Dialect = id.parse()?;
    Ok(dialect.renderer(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("reddit".parse::<Dialect>().unwrap(), Dialect::Reddit);
        assert_eq!("RPGGeek".parse::<Dialect>().unwrap(), Dialect::Rpggeek);
    }

    #[test]
    fn test_unknown_dialect() {
        let err = "myspace".parse::<Dialect>().unwrap_err();
        assert_eq!(err, ExportError::UnknownRenderer("myspace".to_string()));
    }

    #[test]
    fn test_renderer_for_resolves_matching_dialect() {
        let options = ExportOptions::default();
        for dialect in Dialect::ALL {
            let renderer = renderer_for(dialect.as_str(), &options).unwrap();
            assert_eq!(renderer.dialect(), dialect);
        }
        assert!(matches!(
            renderer_for("tumblr", &options),
            Err(ExportError::UnknownRenderer(_))
        ));
    }

    #[test]
    fn test_finalize_line_is_shared() {
        let mut line = LineBuffer::new();
        line.push("  see");
        line.push("[url=https://example.com]here[/url]");
        line.push(")");
        line.push("* one\n");
        line.push("two ");
        for dialect in Dialect::ALL {
            let renderer = dialect.renderer(&ExportOptions::default());
            assert_eq!(
                renderer.finalize_line(&line),
                "see [url=https://example.com]here[/url]) * one\ntwo"
            );
        }
    }
}
