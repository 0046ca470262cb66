use prettytable::format::{FormatBuilder, LinePosition, LineSeparator};
use prettytable::{Cell, Row, Table};

use super::{Dialect, Renderer};
use crate::error::ExportError;
use crate::options::ExportOptions;
use crate::text::strip;

const FONT_SIZES: &[(&str, u8)] = &[
    ("h1", 24),
    ("h2", 24),
    ("h3", 18),
    ("h4", 14),
    ("footer", 8),
    ("newthought", 14),
];

const SIMPLE_TAGS: &[(&str, &str)] = &[
    ("code", "c"),
    ("em", "i"),
    ("i", "i"),
    ("s", "-"),
    ("del", "-"),
    ("strong", "b"),
    ("b", "b"),
];

const SIDENOTE_OPEN: &str = "[COLOR=#9900CC][i][size=9]";
const SIDENOTE_CLOSE: &str = "[/size][/i][/COLOR]";

fn lookup<V: Copy>(table: &[(&str, V)], key: &str) -> Option<V> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

/// RPGGeek forum markup, a BBCode dialect.
#[derive(Debug, Clone)]
pub struct RpggeekMarkup {
    site_name: String,
}

impl RpggeekMarkup {
    pub fn new(options: &ExportOptions) -> Self {
        RpggeekMarkup {
            site_name: options.site_name.clone(),
        }
    }

    fn font_size(key: &str) -> Option<u8> {
        lookup(FONT_SIZES, key)
    }

    fn wrap(open: &str, lines: &[String], close: &str, separator: &str) -> String {
        std::iter::once(open)
            .chain(lines.iter().map(String::as_str))
            .chain(std::iter::once(close))
            .map(strip)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl Renderer for RpggeekMarkup {
    fn dialect(&self) -> Dialect {
        Dialect::Rpggeek
    }

    fn canonical_line(&self, url: &str) -> String {
        format!(
            "[b]Originally posted at [url={url}]{}[/url][/b]",
            self.site_name
        )
    }

    fn footer(&self, text: &str) -> String {
        let size = Self::font_size("footer").unwrap_or(8);
        format!("[i][size={size}]{text}[/size][/i]")
    }

    fn heading_tag(&self, level: u8, text: &str) -> Result<String, ExportError> {
        let size = Self::font_size(&format!("h{level}")).ok_or(
            ExportError::UnmappedHeadingLevel {
                dialect: Dialect::Rpggeek.as_str(),
                level,
            },
        )?;
        Ok(format!("[size={size}]{text}[/size]"))
    }

    fn link(&self, href: &str, text: &str) -> String {
        format!("[url={href}]{text}[/url]")
    }

    fn blockquote(&self, lines: &[String]) -> String {
        Self::wrap("[q]", lines, "[/q]", "\n\n")
    }

    fn sidenote(&self, lines: &[String]) -> String {
        Self::wrap(SIDENOTE_OPEN, lines, SIDENOTE_CLOSE, " ")
    }

    fn newthought(&self, text: &str) -> String {
        let size = Self::font_size("newthought").unwrap_or(14);
        format!("[i][b][size={size}]{text}[/size][/b][/i]")
    }

    fn image(&self, src: &str) -> String {
        format!("[IMG]{src}[/IMG]")
    }

    fn simple_tag(&self, tag: &str, text: &str) -> Result<String, ExportError> {
        let mapped = lookup(SIMPLE_TAGS, tag).ok_or_else(|| ExportError::UnmappedTag {
            dialect: Dialect::Rpggeek.as_str(),
            tag: tag.to_string(),
        })?;
        Ok(format!("[{mapped}]{text}[/{mapped}]"))
    }

    /// Plain-text grid, meant to sit inside a `[c]` fixed-width block.
    fn table(&self, headers: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();

        let rule = LineSeparator::new('-', '+', '+', '+');
        let format = FormatBuilder::new()
            .column_separator('|')
            .borders('|')
            .separators(
                &[LinePosition::Top, LinePosition::Title, LinePosition::Bottom],
                rule,
            )
            .padding(1, 1)
            .build();
        table.set_format(format);

        table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));
        for row in rows {
            table.add_row(Row::new(row.iter().map(|c| Cell::new(c)).collect()));
        }

        table.to_string().trim_end().to_string()
    }

    fn table_caption(&self, text: &str) -> String {
        format!("[b]{text}[/b]")
    }

    fn table_footer(&self, text: &str) -> String {
        format!("[i]{text}[/i]")
    }

    fn table_buffer(&self, build: &mut dyn FnMut(&mut String)) -> String {
        let mut text = String::from("[c]\n");
        build(&mut text);
        text.push_str("\n[/c]");
        text
    }
}
