//! Plain-text event report.
//!
//! Every page repeats the letterhead and column headings and ends with
//! `Page i of n`. Pages are separated by a form feed.

use domain_events::Event;

pub const REPORT_TITLE: &str = "Event Report";
const CONTACT_LINES: [&str; 2] = ["Mobile: +1 234 567 890", "Email: info@daniya-flora.com"];
const COLUMNS: [(&str, usize); 6] = [
    ("Title", 28),
    ("Date", 10),
    ("Time", 5),
    ("Location", 22),
    ("Category", 10),
    ("Status", 13),
];
const GAP: &str = "  ";
const PAGE_BREAK: char = '\u{0C}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub rows_per_page: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { rows_per_page: 25 }
    }
}

/// Render the given rows, already filtered and in display order
pub fn render_report(events: &[&Event], options: &ReportOptions) -> String {
    render_pages(events, options).join(&PAGE_BREAK.to_string())
}

pub fn render_pages(events: &[&Event], options: &ReportOptions) -> Vec<String> {
    let rows: Vec<String> = events.iter().map(|event| row(event)).collect();
    let chunks: Vec<&[String]> = if rows.is_empty() {
        vec![&rows[..]]
    } else {
        rows.chunks(options.rows_per_page.max(1)).collect()
    };

    let total = chunks.len();
    chunks
        .into_iter()
        .enumerate()
        .map(|(index, rows)| page(rows, index + 1, total))
        .collect()
}

fn table_width() -> usize {
    COLUMNS.iter().map(|(_, width)| width).sum::<usize>() + GAP.len() * (COLUMNS.len() - 1)
}

fn page(rows: &[String], number: usize, total: usize) -> String {
    let width = table_width();
    let mut lines = vec![REPORT_TITLE.to_string()];
    lines.extend(CONTACT_LINES.iter().map(|line| line.to_string()));
    lines.push("=".repeat(width));
    lines.push(line(COLUMNS.iter().map(|(name, _)| name.to_string())));
    lines.push("-".repeat(width));

    if rows.is_empty() {
        lines.push("No events to report.".to_string());
    } else {
        lines.extend(rows.iter().cloned());
    }

    lines.push(String::new());
    lines.push(format!("Page {number} of {total}"));
    lines.join("\n") + "\n"
}

fn row(event: &Event) -> String {
    line([
        event.title.clone(),
        event.date.format("%m/%d/%Y").to_string(),
        event.time.format("%H:%M").to_string(),
        event.location.clone(),
        event
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string()),
        event.status.to_string(),
    ])
}

fn line(cells: impl IntoIterator<Item = String>) -> String {
    cells
        .into_iter()
        .zip(COLUMNS.iter())
        .map(|(cell, (_, width))| fit(&cell, *width))
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

/// Pad or cut `text` to exactly `width` characters
fn fit(text: &str, width: usize) -> String {
    let text = text.replace(['\n', '\r', '\t'], " ");
    if text.chars().count() > width {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    } else {
        format!("{text:<width$}")
    }
}
