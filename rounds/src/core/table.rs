//! Plain-text boxed tables for listing collections.

use unicode_width::UnicodeWidthStr;

/// Render `rows` under an upper-cased `title`, boxed to the widest line.
///
/// Widths are terminal display columns, so wide (CJK, emoji) and combining
/// characters keep the box aligned.
///
/// ```text
/// +========+
/// | DRINKS |
/// +========+
/// | Tea    |
/// | Coffee |
/// +--------+
/// ```
pub fn render_table(title: &str, rows: &[String]) -> String {
    let title = title.to_uppercase();
    let width = rows
        .iter()
        .map(|row| row.width())
        .chain(std::iter::once(title.width()))
        .max()
        .unwrap_or(0);

    let heavy = format!("+{}+", "=".repeat(width + 2));
    let light = format!("+{}+", "-".repeat(width + 2));
    let mut out = String::new();
    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&pad_row(&title, width));
    out.push_str(&heavy);
    out.push('\n');
    for row in rows {
        out.push_str(&pad_row(row, width));
    }
    out.push_str(&light);
    out.push('\n');
    out
}

fn pad_row(text: &str, width: usize) -> String {
    let padding = width - text.width();
    format!("| {}{} |\n", text, " ".repeat(padding))
}
