//! Table extraction and normalization.
//!
//! Colspan and rowspan are not interpreted, and links inside cells are
//! flattened to their text.

use serde::Serialize;

use crate::node::{MarkupNode, NodeKind};
use crate::render::Renderer;
use crate::text::{strip, strip_control_runs};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub caption: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub footer: Vec<String>,
}

impl Table {
    /// Pull caption, headers, body rows and footer lines out of a `table`
    /// node. Only direct children of the table are considered.
    ///
    /// Body cells that are empty after trimming are dropped, not kept as
    /// placeholders. A row with a blank cell in the middle therefore shifts
    /// its later cells left, and [`Table::normalize`] pads it at the end.
    pub fn extract(node: &MarkupNode) -> Table {
        let mut table = Table::default();

        for child in &node.children {
            match child.kind {
                NodeKind::Caption => table.caption = strip(&child.text()).to_string(),
                NodeKind::Thead => {
                    for tr in descendants(child, &NodeKind::Tr) {
                        for th in descendants(tr, &NodeKind::Th) {
                            table.headers.push(strip(&th.text()).to_string());
                        }
                    }
                }
                NodeKind::Tbody => {
                    for tr in descendants(child, &NodeKind::Tr) {
                        let row = tr
                            .children
                            .iter()
                            .map(|cell| strip(&strip_control_runs(&cell.text())).to_string())
                            .filter(|cell| !cell.is_empty())
                            .collect();
                        table.rows.push(row);
                    }
                }
                NodeKind::Tfoot => {
                    for tr in descendants(child, &NodeKind::Tr) {
                        let joined = tr
                            .children
                            .iter()
                            .map(MarkupNode::text)
                            .collect::<Vec<_>>()
                            .join(" ");
                        table
                            .footer
                            .push(strip(&strip_control_runs(&joined)).to_string());
                    }
                }
                _ => {}
            }
        }

        log::debug!(
            "extracted table: {} header(s), {} row(s), {} footer line(s)",
            table.headers.len(),
            table.rows.len(),
            table.footer.len()
        );

        table
    }

    pub fn max_columns(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// Right-pad the header row and every body row with empty strings so the
    /// grid is rectangular.
    pub fn normalize(&mut self) {
        let max_columns = self.max_columns();
        self.headers.resize(max_columns, String::new());
        for row in &mut self.rows {
            row.resize(max_columns, String::new());
        }
    }

    pub fn is_rectangular(&self) -> bool {
        let width = self.headers.len();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Render inside the dialect's table container, with the caption above
    /// and the footer below when they are present.
    pub fn render(&self, renderer: &dyn Renderer) -> String {
        let mut table = self.clone();
        table.normalize();
        debug_assert!(table.is_rectangular());

        renderer.table_buffer(&mut |buffer: &mut String| {
            if !table.caption.is_empty() {
                buffer.push_str(&renderer.table_caption(&table.caption));
                buffer.push('\n');
            }
            buffer.push_str(&renderer.table(&table.headers, &table.rows));
            if !table.footer.is_empty() {
                buffer.push('\n');
                buffer.push_str(&renderer.table_footer(&table.footer.join("\n")));
            }
        })
    }
}

fn descendants<'a>(node: &'a MarkupNode, kind: &NodeKind) -> Vec<&'a MarkupNode> {
    let mut found = Vec::new();
    node.find_all(kind, &mut found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::tests::node_from;
    use crate::options::ExportOptions;
    use crate::render::Dialect;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    const FULL_TABLE: &str = r#"
        <table>
          <caption>Random Encounters</caption>
          <thead>
            <tr><th> d6 </th><th>Result</th></tr>
          </thead>
          <tbody>
            <tr>
              <td>1</td>
              <td>Goblins</td>
            </tr>
            <tr>
              <td>2</td>
              <td>
                Owlbear
              </td>
            </tr>
          </tbody>
          <tfoot>
            <tr><td>Roll once per watch</td></tr>
          </tfoot>
        </table>"#;

    #[test]
    fn test_extract_full_table() {
        let table = Table::extract(&node_from(FULL_TABLE, "table"));
        assert_eq!(table.caption, "Random Encounters");
        assert_eq!(table.headers, strings(&["d6", "Result"]));
        assert_eq!(
            table.rows,
            vec![strings(&["1", "Goblins"]), strings(&["2", "Owlbear"])]
        );
        assert_eq!(table.footer, strings(&["Roll once per watch"]));
    }

    #[test]
    fn test_extract_drops_empty_body_cells() {
        let html = "<table><tbody><tr><td>a</td><td> </td><td>c</td></tr></tbody></table>";
        let table = Table::extract(&node_from(html, "table"));
        assert_eq!(table.rows, vec![strings(&["a", "c"])]);
    }

    #[test]
    fn test_extract_keeps_non_breaking_space_cells() {
        let html = "<table><tbody><tr><td>a</td><td>&nbsp;</td><td>c</td></tr></tbody></table>";
        let table = Table::extract(&node_from(html, "table"));
        assert_eq!(table.rows, vec![strings(&["a", "\u{a0}", "c"])]);
    }

    #[test]
    fn test_render_pads_dropped_cell_at_row_end() {
        let html = "<table>\
            <thead><tr><th>A</th><th>B</th><th>C</th></tr></thead>\
            <tbody><tr><td>a</td><td> </td><td>c</td></tr></tbody>\
            </table>";
        let table = Table::extract(&node_from(html, "table"));
        let renderer = Dialect::Reddit.renderer(&ExportOptions::default());
        assert_eq!(
            table.render(renderer.as_ref()),
            "\n|A|B|C|\n|:-|:-|:-|\n|a|c||"
        );

        let html = html.replace("<td> </td>", "<td>&nbsp;</td>");
        let table = Table::extract(&node_from(&html, "table"));
        assert_eq!(
            table.render(renderer.as_ref()),
            "\n|A|B|C|\n|:-|:-|:-|\n|a|\u{a0}|c|"
        );
    }

    #[test]
    fn test_extract_footer_joins_cells() {
        let html = "<table><tfoot><tr><td>Total</td><td>12</td></tr></tfoot></table>";
        let table = Table::extract(&node_from(html, "table"));
        assert_eq!(table.footer, strings(&["Total 12"]));
    }

    #[test]
    fn test_extract_without_thead_has_no_headers() {
        let html = "<table><tr><td>x</td><td>y</td></tr></table>";
        let table = Table::extract(&node_from(html, "table"));
        assert!(table.headers.is_empty());
        assert_eq!(table.rows, vec![strings(&["x", "y"])]);
    }

    #[test]
    fn test_normalize_pads_rows() {
        let mut table = Table {
            headers: strings(&["A", "B"]),
            rows: vec![strings(&["x"])],
            ..Table::default()
        };
        table.normalize();
        assert_eq!(table.rows, vec![strings(&["x", ""])]);
        assert_eq!(table.headers, strings(&["A", "B"]));
    }

    #[test]
    fn test_normalize_pads_headers_to_widest_row() {
        let mut table = Table {
            headers: strings(&["A"]),
            rows: vec![strings(&["1", "2", "3"]), strings(&["4"])],
            ..Table::default()
        };
        table.normalize();
        assert_eq!(table.headers, strings(&["A", "", ""]));
        assert_eq!(table.rows[0], strings(&["1", "2", "3"]));
        assert_eq!(table.rows[1], strings(&["4", "", ""]));
        assert!(table.is_rectangular());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut table = Table {
            headers: strings(&["A", "B"]),
            rows: vec![strings(&["1", "2"]), strings(&["3", "4"])],
            ..Table::default()
        };
        let before = table.clone();
        table.normalize();
        assert_eq!(table, before);
        table.normalize();
        assert_eq!(table, before);
    }

    #[test]
    fn test_normalize_empty_table() {
        let mut table = Table::default();
        table.normalize();
        assert_eq!(table.max_columns(), 0);
        assert!(table.is_rectangular());
    }

    #[test]
    fn test_render_reddit() {
        let table = Table::extract(&node_from(FULL_TABLE, "table"));
        let renderer = Dialect::Reddit.renderer(&ExportOptions::default());
        assert_eq!(
            table.render(renderer.as_ref()),
            "**Random Encounters**\n\n|d6|Result|\n|:-|:-|\n|1|Goblins|\n|2|Owlbear|\n*Roll once per watch*"
        );
    }

    #[test]
    fn test_render_rpggeek() {
        let table = Table::extract(&node_from(FULL_TABLE, "table"));
        let renderer = Dialect::Rpggeek.renderer(&ExportOptions::default());
        let text = table.render(renderer.as_ref());
        assert!(text.starts_with("[c]\n[b]Random Encounters[/b]\n+"));
        assert!(text.contains("| 2  | Owlbear |"));
        assert!(text.ends_with("\n[i]Roll once per watch[/i]\n[/c]"));
    }

    #[test]
    fn test_render_skips_missing_caption() {
        let table = Table {
            headers: strings(&["A", "B"]),
            rows: vec![strings(&["x"])],
            ..Table::default()
        };
        let renderer = Dialect::Reddit.renderer(&ExportOptions::default());
        assert_eq!(table.render(renderer.as_ref()), "\n|A|B|\n|:-|:-|\n|x||");
    }
}
