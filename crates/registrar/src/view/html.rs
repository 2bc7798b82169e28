//! HTML rendering of the registrations table.
//!
//! Free-text fields go through [`escape`]. Branch and semester come from the
//! form's fixed option sets and are written as they are.

use std::fmt::Write as _;

use crate::config::PageConfig;

use super::{DisplayRow, TableView};

/// Escape text for use as HTML text content.
///
/// Produces what a browser serializes for a text node: `&`, `<`, `>` and the
/// no-break space become entities, everything else is unchanged.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one table row.
#[must_use]
pub fn render_row(row: &DisplayRow) -> String {
    format!(
        "<tr>\n\
         \x20   <td>{}</td>\n\
         \x20   <td>{}</td>\n\
         \x20   <td>{}</td>\n\
         \x20   <td>{}</td>\n\
         \x20   <td>\n\
         \x20       <div>{}</div>\n\
         \x20       <small>{}</small>\n\
         \x20   </td>\n\
         </tr>",
        escape(&row.full_name),
        escape(&row.enrollment_no),
        row.branch,
        row.semester,
        escape(&row.email),
        escape(&row.phone),
    )
}

/// Render the table body rows, in order.
#[must_use]
pub fn render_rows(view: &TableView) -> String {
    view.rows()
        .iter()
        .map(render_row)
        .collect::<Vec<_>>()
        .join("\n")
}

fn hidden_class(hidden: bool) -> &'static str {
    if hidden {
        " class=\"hidden\""
    } else {
        ""
    }
}

/// Render a standalone page with the table and the empty-state message.
#[must_use]
pub fn render_page(view: &TableView, page: &PageConfig) -> String {
    let title = escape(&page.title);
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{title}</title>");
    out.push_str("<style>.hidden { display: none; }</style>\n");
    out.push_str("</head>\n<body>\n");
    let _ = writeln!(out, "<h1>{title}</h1>");
    let _ = writeln!(
        out,
        "<p id=\"no-students-msg\"{}>{}</p>",
        hidden_class(!view.is_empty_state_visible()),
        escape(&page.empty_message)
    );
    let _ = writeln!(
        out,
        "<table id=\"studentsTable\"{}>",
        hidden_class(!view.is_table_visible())
    );
    out.push_str(
        "<thead>\n<tr><th>Name</th><th>Enrollment No</th><th>Branch</th>\
         <th>Semester</th><th>Contact</th></tr>\n</thead>\n",
    );
    out.push_str("<tbody id=\"studentsBody\">\n");
    let rows = render_rows(view);
    if !rows.is_empty() {
        out.push_str(&rows);
        out.push('\n');
    }
    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}
