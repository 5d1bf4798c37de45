//! Merged-cell HTML table rendering
//!
//! Every column is split into blocks of [`Matrix::span`] rows; a block becomes a
//! single `<td rowspan=…>` emitted on its first row.

use super::formatters::{escape_html, highlight_color};
use crate::core::Matrix;
use crate::game::Highlight;
use std::fmt::Write;

/// Render a grid as an HTML table with vertically merged cells
///
/// Cells holding the highlighted word get a background colour.
///
/// # Examples
/// ```
/// use olympiika::core::{AssociationTree, Orientation, layout};
/// use olympiika::output::render_html;
///
/// let tree = AssociationTree::from_words(1, vec!["море".into(), "волна".into(), "пляж".into()]).unwrap();
/// let html = render_html(&layout(&tree, Orientation::LeavesFirst), None);
///
/// assert!(html.contains("<td>волна</td>"));
/// assert!(html.contains("<td rowspan=\"2\">море</td>"));
/// ```
#[must_use]
pub fn render_html(grid: &Matrix, highlight: Option<&Highlight>) -> String {
    let mut html = String::from("<table border=\"1\">\n  <tbody>\n");

    for row in 0..grid.rows() {
        html.push_str("    <tr>\n");
        for col in 0..grid.cols() {
            if !grid.is_block_start(row, col) {
                continue;
            }

            let text = grid.get(row, col);
            let span = grid.span(col);

            html.push_str("      <td");
            if span > 1 {
                let _ = write!(html, " rowspan=\"{span}\"");
            }
            if let Some(h) = highlight
                && !text.is_empty()
                && h.word == text
            {
                let _ = write!(
                    html,
                    " style=\"background-color:{};\"",
                    highlight_color(h.kind)
                );
            }
            let _ = writeln!(html, ">{}</td>", escape_html(text));
        }
        html.push_str("    </tr>\n");
    }

    html.push_str("  </tbody>\n</table>\n");
    html
}
