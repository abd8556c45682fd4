//! HTML rendering of the comparison table

use crate::catalog::{Column, Section, COLUMN_COUNT};
use crate::record::display_or_unavailable;
use std::fmt::Write;

/// Render the sections as a `<table>`, preserving section and row order
pub fn render_table(sections: &[Section]) -> String {
    let mut html = String::from("<table><tr>\n<th>Parameter</th>\n");
    for column in Column::ALL {
        let _ = writeln!(html, "<th>{}</th>", escape(column.header()));
    }
    html.push_str("</tr>");

    for section in sections {
        let _ = write!(
            html,
            "<tr><td colspan=\"{}\" style=\"background:#eee;font-weight:bold;\">{}</td></tr>",
            COLUMN_COUNT + 1,
            escape(section.title)
        );
        for row in &section.rows {
            html.push_str("<tr>\n");
            let _ = writeln!(html, "            <td>{}</td>", escape(row.label));
            for value in &row.values {
                let _ = writeln!(
                    html,
                    "            <td>{}</td>",
                    escape(&display_or_unavailable(value.as_ref()))
                );
            }
            html.push_str("        </tr>");
        }
    }

    html.push_str("</table>");
    html
}

/// Wrap table markup in a standalone page, inside the container element
pub fn render_document(container_id: &str, title: &str, table: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <div id=\"{id}\">{table}</div>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        id = escape(container_id),
    )
}

/// Minimal HTML text/attribute escaping; driver strings are untrusted
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Row;
    use crate::record::Cell;

    fn section(title: &'static str, rows: Vec<Row>) -> Section {
        Section { title, rows }
    }

    #[test]
    fn empty_table_has_header_only() {
        assert_eq!(
            render_table(&[]),
            "<table><tr>\n<th>Parameter</th>\n<th>WebGL</th>\n<th>WebGL2</th>\n\
             <th>WebGPU (Device)</th>\n<th>WebGPU (Adapter)</th>\n</tr></table>"
        );
    }

    #[test]
    fn row_markup() {
        let html = render_table(&[section(
            "Textures",
            vec![Row {
                label: "Texture Size (2D)",
                values: [Some(Cell::Integer(16384)), None, None, None],
            }],
        )]);

        assert!(html.contains(
            "<tr><td colspan=\"5\" style=\"background:#eee;font-weight:bold;\">Textures</td></tr>"
        ));
        assert!(html.contains(
            "<tr>\n            <td>Texture Size (2D)</td>\n            <td>16384</td>\n            \
             <td>Not Available</td>\n            <td>Not Available</td>\n            \
             <td>Not Available</td>\n        </tr>"
        ));
        assert!(html.ends_with("</tr></table>"));
    }

    #[test]
    fn order_is_preserved() {
        let html = render_table(&[
            section("B", vec![]),
            section("A", vec![]),
        ]);
        let b = html.find(">B<").unwrap();
        let a = html.find(">A<").unwrap();
        assert!(b < a);
    }

    #[test]
    fn driver_strings_are_escaped() {
        let html = render_table(&[section(
            "Vendor / Renderer",
            vec![Row {
                label: "Renderer",
                values: [Some(Cell::Text("<script>&".to_string())), None, None, None],
            }],
        )]);
        assert!(html.contains("<td>&lt;script&gt;&amp;</td>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn document_embeds_table_in_container() {
        let doc = render_document("gpu_table_container", "GPU Limits", "<table></table>");
        assert!(doc.starts_with("<!DOCTYPE html>\n"));
        assert!(doc.contains("<title>GPU Limits</title>"));
        assert!(doc.contains("<div id=\"gpu_table_container\"><table></table></div>"));
    }
}
