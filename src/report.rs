//! Report rendering.
//!
//! Turns a [`LogAnalysis`] into the human-readable damage report: a header
//! with run diagnostics, one ranked table per zone session in chronological
//! order, and a final combined table over every zone. Tables are
//! fixed-width and pipe-delimited; totals are thousands-grouped with a
//! compact K/M form on the summary lines.

use crate::aggregate::PlayerDamageMap;
use crate::analyzer::LogAnalysis;

/// Renders the full report for an analysis.
///
/// Sections appear in chronological session order, followed by the
/// combined "Every Zone" section built from the overall map.
#[must_use]
pub fn render_report(analysis: &LogAnalysis) -> String {
    let mut out = String::new();

    out.push_str("=== Damage Report ===\n");
    out.push_str(&format!(
        "Log: {} ({} lines)\n",
        analysis.source, analysis.line_count
    ));
    out.push_str(&format!("Fights detected: {}\n", analysis.fight_count));

    for session in &analysis.sessions {
        out.push('\n');
        out.push_str(&format!(
            "=== Zone: {} (visit {}) ===\n",
            session.name, session.visit
        ));
        render_scope(&session.damage, "Session total", &mut out);
    }

    out.push('\n');
    out.push_str("=== Every Zone ===\n");
    render_scope(&analysis.overall, "Overall total", &mut out);

    out
}

/// Renders one scope's ranked table and summary line into `out`.
///
/// An empty scope renders a one-line notice instead of a table.
fn render_scope(map: &PlayerDamageMap, total_label: &str, out: &mut String) {
    if map.is_empty() {
        out.push_str("(no damage recorded)\n");
        return;
    }

    let scope_total = map.scope_total();
    let mut rows: Vec<[String; 6]> = Vec::with_capacity(map.len());
    for (rank, (name, totals)) in map.ranked().iter().enumerate() {
        rows.push([
            (rank + 1).to_string(),
            (*name).to_string(),
            format_thousands(totals.total()),
            format!("{:.2}%", percentage(totals.total(), scope_total)),
            format_thousands(totals.health),
            format_thousands(totals.armor),
        ]);
    }

    let headers = ["Rank", "Player", "Total", "%", "Health", "Armor"];
    let mut widths: [usize; 6] = [0; 6];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    out.push_str(&render_row(&headers.map(String::from), &widths));
    out.push_str(&render_separator(&widths));
    for row in &rows {
        out.push_str(&render_row(row, &widths));
    }

    out.push_str(&format!(
        "{total_label}: {} ({})\n",
        format_thousands(scope_total),
        format_damage_short(scope_total)
    ));
}

/// Renders one pipe-delimited table row.
///
/// The player column is left-aligned; all numeric columns right-align.
fn render_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    format!(
        "| {:>rank$} | {:<player$} | {:>total$} | {:>pct$} | {:>health$} | {:>armor$} |\n",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        cells[4],
        cells[5],
        rank = widths[0],
        player = widths[1],
        total = widths[2],
        pct = widths[3],
        health = widths[4],
        armor = widths[5],
    )
}

fn render_separator(widths: &[usize; 6]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("|{}|\n", dashes.join("|"))
}

/// Returns a player's share of the scope total as a percentage.
///
/// Returns `0.0` when the scope total is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

/// Formats an integer with comma grouping, e.g. `1234567` as `1,234,567`.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a damage amount compactly with a K or M suffix.
///
/// Amounts below one thousand render as plain digits.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_damage_short(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}
