//! Terminal rendering of the registrations table.

use super::{DisplayRow, TableView};

const HEADERS: [&str; 6] = ["Name", "Enrollment No", "Branch", "Semester", "Email", "Phone"];

/// Replace control characters so stored text cannot drive the terminal.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { '\u{fffd}' } else { c })
        .collect()
}

fn cells(row: &DisplayRow) -> [String; 6] {
    [
        sanitize(&row.full_name),
        sanitize(&row.enrollment_no),
        sanitize(&row.branch),
        sanitize(&row.semester),
        sanitize(&row.email),
        sanitize(&row.phone),
    ]
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{cell}{}", " ".repeat(width.saturating_sub(len)))
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Render the view as an aligned table.
///
/// When the empty state is showing, only `empty_message` is rendered.
#[must_use]
pub fn render_table(view: &TableView, empty_message: &str) -> String {
    if view.is_empty_state_visible() {
        return format!("{}\n", sanitize(empty_message));
    }

    let header: Vec<String> = HEADERS.iter().map(|h| (*h).to_string()).collect();
    let body: Vec<[String; 6]> = view.rows().iter().map(cells).collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(&header, &widths));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_line(&rule, &widths));
    out.push('\n');
    for row in &body {
        out.push_str(&format_line(row, &widths));
        out.push('\n');
    }
    out
}

/// Render one record per line, fields separated by ` | `.
#[must_use]
pub fn render_plain(view: &TableView, empty_message: &str) -> String {
    if view.is_empty_state_visible() {
        return format!("{}\n", sanitize(empty_message));
    }
    view.rows()
        .iter()
        .map(|row| format!("{}\n", cells(row).join(" | ")))
        .collect()
}
