//! Per-node dispatch.
//!
//! [`Dispatcher::handle`] appends zero or more rendered fragments for a node
//! to the caller's [`LineBuffer`]. Block-like nodes open their own inner
//! buffer, recurse into it, and merge the joined result back. Any node kind
//! without a rule is an error: new markup shapes must be taught to the
//! dispatcher instead of silently disappearing from the output.

use crate::error::ExportError;
use crate::line::LineBuffer;
use crate::node::{MarkupNode, NodeKind};
use crate::options::ExportOptions;
use crate::render::Renderer;
use crate::table::Table;
use crate::text::{collapse_control_runs, strip};

const LIST_BULLET: &str = "*";
const OGC_CLASS: &str = "open-game-content";
const TABLE_WRAPPER_CLASS: &str = "table-wrapper";

pub struct Dispatcher<'a> {
    renderer: &'a dyn Renderer,
    options: &'a ExportOptions,
}

impl<'a> Dispatcher<'a> {
    pub fn new(renderer: &'a dyn Renderer, options: &'a ExportOptions) -> Self {
        Dispatcher { renderer, options }
    }

    pub fn handle(&self, node: &MarkupNode, line: &mut LineBuffer) -> Result<(), ExportError> {
        log::trace!("handling <{}>", node.tag);

        match &node.kind {
            NodeKind::Sup
            | NodeKind::Sub
            | NodeKind::Iframe
            | NodeKind::Script
            | NodeKind::Noscript
            | NodeKind::Aside
            | NodeKind::Details
            | NodeKind::Hr
            | NodeKind::Br
            | NodeKind::Label
            | NodeKind::Input
            | NodeKind::Pre => {}

            NodeKind::Footer => {
                line.push(self.renderer.footer(&collapse_control_runs(&node.text())));
            }

            NodeKind::Code
            | NodeKind::Em
            | NodeKind::S
            | NodeKind::Strong
            | NodeKind::I
            | NodeKind::B
            | NodeKind::Del => {
                line.push(self.renderer.simple_tag(&node.tag, strip(&node.text()))?);
            }

            NodeKind::Text | NodeKind::Cite | NodeKind::Time => {
                let text = node.text();
                let text = strip(&text);
                if !text.is_empty() {
                    line.push(text);
                }
            }

            NodeKind::Heading(level) => {
                line.push(self.renderer.heading_tag(*level, strip(&node.text()))?);
            }

            NodeKind::Ul | NodeKind::Ol | NodeKind::Dl => self.handle_children(node, line)?,

            NodeKind::Li => {
                let mut inner = LineBuffer::seeded(LIST_BULLET);
                self.handle_children(node, &mut inner)?;
                inner.append_to_last("\n");
                line.push(inner.join(" "));
            }

            NodeKind::P => {
                let mut inner = LineBuffer::new();
                self.handle_children(node, &mut inner)?;
                line.push(inner.join(" "));
            }

            NodeKind::Section => {
                if node.has_class(OGC_CLASS) {
                    line.push(self.open_game_content(node)?);
                } else {
                    return Err(ExportError::unsupported_structure(&node.tag));
                }
            }

            NodeKind::Div => {
                if node.has_class(TABLE_WRAPPER_CLASS) {
                    self.handle_children(node, line)?;
                } else {
                    return Err(ExportError::unsupported_structure(&node.tag));
                }
            }

            NodeKind::Blockquote => {
                let mut inner = LineBuffer::new();
                self.handle_children(node, &mut inner)?;
                line.push(self.renderer.blockquote(inner.fragments()));
            }

            NodeKind::A => self.anchor(node, line),

            NodeKind::Table => line.push(Table::extract(node).render(self.renderer)),

            NodeKind::Span => self.span(node, line)?,

            NodeKind::Figure => {
                if let Some(src) = first_image_src(node) {
                    line.push(self.renderer.image(src));
                }
            }

            _ => return Err(ExportError::unsupported_tag(&node.tag)),
        }

        Ok(())
    }

    fn handle_children(&self, node: &MarkupNode, line: &mut LineBuffer) -> Result<(), ExportError> {
        for child in &node.children {
            self.handle(child, line)?;
        }
        Ok(())
    }

    /// Licensed content is bracketed by a notice, an opening banner linking
    /// the license, and a closing banner. Parts are separated by blank lines.
    fn open_game_content(&self, node: &MarkupNode) -> Result<String, ExportError> {
        let link = self
            .renderer
            .link(&self.options.open_game_license_url, "OPEN GAME CONTENT");
        let mut body = LineBuffer::new();
        self.handle_children(node, &mut body)?;

        let mut parts =
            LineBuffer::seeded(format!("{}\n\nBEGIN {link}", self.renderer.ogc_preamble()));
        parts.extend(body.into_fragments());
        parts.push("END OPEN GAME CONTENT");

        Ok(parts
            .fragments()
            .iter()
            .map(|fragment| strip(fragment))
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    fn anchor(&self, node: &MarkupNode, line: &mut LineBuffer) {
        let Some(href) = node.attr("href") else {
            return;
        };
        let text = node.text();
        if href.starts_with('#') {
            line.push(strip(&text));
        } else {
            line.push(self.renderer.link(href, strip(&text)));
        }
    }

    fn span(&self, node: &MarkupNode, line: &mut LineBuffer) -> Result<(), ExportError> {
        if node.has_class("marginfigure") {
            if let Some(src) = first_image_src(node) {
                line.push(self.renderer.image(src));
            }
        } else if node.has_class("sidenote") || node.has_class("marginnote") {
            let mut inner = LineBuffer::new();
            self.handle_children(node, &mut inner)?;
            line.push(self.renderer.sidenote(inner.fragments()));
        } else if node.has_class("newthought") {
            line.push(self.renderer.newthought(&node.text()));
        }
        Ok(())
    }
}

fn first_image_src(node: &MarkupNode) -> Option<&str> {
    node.find_first(&NodeKind::Img)
        .and_then(|img| img.attr("src"))
}
