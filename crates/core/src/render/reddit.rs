use super::{Dialect, Renderer};
use crate::error::ExportError;
use crate::options::ExportOptions;

/// Reddit flavored markdown.
///
/// Reddit has only one usable heading level, no inline code equivalent we
/// want to use, and no way to embed images in a text post, so headings 3 and
/// 4 degrade to emphasis and images are dropped.
#[derive(Debug, Clone)]
pub struct RedditMarkdown {
    site_name: String,
}

impl RedditMarkdown {
    pub fn new(options: &ExportOptions) -> Self {
        RedditMarkdown {
            site_name: options.site_name.clone(),
        }
    }

    fn pipe_row<S: AsRef<str>>(cells: &[S]) -> String {
        let mut out = String::from("|");
        for cell in cells {
            out.push_str(&cell.as_ref().replace('|', "\\|"));
            out.push('|');
        }
        out
    }
}

impl Renderer for RedditMarkdown {
    fn dialect(&self) -> Dialect {
        Dialect::Reddit
    }

    fn canonical_line(&self, url: &str) -> String {
        format!("**Originally posted at [{}]({url})**", self.site_name)
    }

    fn footer(&self, text: &str) -> String {
        text.to_string()
    }

    fn heading_tag(&self, level: u8, text: &str) -> Result<String, ExportError> {
        let text = self.escape(text);
        match level {
            1 | 2 => Ok(format!("# {text}")),
            3 => Ok(format!("**{text}**")),
            4 => Ok(format!("*{text}*")),
            level => Err(ExportError::UnmappedHeadingLevel {
                dialect: Dialect::Reddit.as_str(),
                level,
            }),
        }
    }

    fn link(&self, href: &str, text: &str) -> String {
        format!("[{}]({href})", self.escape(text))
    }

    fn blockquote(&self, lines: &[String]) -> String {
        lines
            .iter()
            .map(|line| format!(">{line}"))
            .collect::<Vec<_>>()
            .join("\n>\n")
    }

    fn sidenote(&self, lines: &[String]) -> String {
        let body = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                if index == 0 {
                    format!("SIDENOTE: {line}")
                } else {
                    line.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        format!("^({body})")
    }

    fn newthought(&self, text: &str) -> String {
        format!("**{}**", self.escape(text))
    }

    fn image(&self, _src: &str) -> String {
        String::new()
    }

    fn simple_tag(&self, tag: &str, text: &str) -> Result<String, ExportError> {
        let text = self.escape(text);
        match tag {
            "strong" | "b" => Ok(format!("**{text}**")),
            "em" | "i" => Ok(format!("*{text}*")),
            "del" | "s" => Ok(format!("~~{text}~~")),
            tag => Err(ExportError::UnmappedTag {
                dialect: Dialect::Reddit.as_str(),
                tag: tag.to_string(),
            }),
        }
    }

    fn table(&self, headers: &[String], rows: &[Vec<String>]) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(Self::pipe_row(headers));
        lines.push(Self::pipe_row(&vec![":-"; headers.len()]));
        lines.extend(rows.iter().map(|row| Self::pipe_row(row)));
        format!("\n{}", lines.join("\n"))
    }

    fn table_caption(&self, text: &str) -> String {
        format!("**{}**", self.escape(text))
    }

    fn table_footer(&self, text: &str) -> String {
        format!("*{}*", self.escape(text))
    }

    fn table_buffer(&self, build: &mut dyn FnMut(&mut String)) -> String {
        let mut text = String::new();
        build(&mut text);
        text
    }

    /// Backslash-escape the characters Reddit reads as markup sigils.
    fn escape(&self, text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '^' | '*' | '#' | '~') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }
}
