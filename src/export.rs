//! CSV export of per-zone per-player damage rows.
//!
//! Flattens every (zone session, player) pair with nonzero combined damage
//! into one row. When no per-zone rows exist but the overall map is
//! non-empty, the overall rows are exported under the `ALL` pseudo-zone so
//! the file is never silently empty. Export failures are surfaced as
//! errors for the caller to report as a warning; the stdout report is
//! never affected.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::analyzer::LogAnalysis;
use crate::error::{ParserError, Result};

/// Default CSV output filename.
pub const DEFAULT_CSV_FILE: &str = "damage_report.csv";

/// The CSV header row.
pub const CSV_HEADER: &str = "Zone,ZoneVisit,SessionId,Player,HealthDamage,ArmorDamage,TotalDamage";

/// Zone name used for fallback rows built from the overall map.
pub const FALLBACK_ZONE: &str = "ALL";

/// One flattened export row.
#[derive(Debug, Clone, Serialize)]
pub struct CsvRow {
    /// Zone name, or [`FALLBACK_ZONE`] for overall fallback rows.
    pub zone: String,
    /// Visit number of the session, 0 for fallback rows.
    pub zone_visit: u32,
    /// Session id, 0 for fallback rows.
    pub session_id: u32,
    /// Canonical player name.
    pub player: String,
    /// Health damage in this session.
    pub health: u64,
    /// Armor damage in this session.
    pub armor: u64,
    /// Combined total.
    pub total: u64,
}

/// Collects the export rows for an analysis.
///
/// Rows are ordered by session id ascending, then combined total
/// descending within each session (ties keep first-encounter order). Pairs
/// with zero combined damage are omitted. If no per-zone rows exist but
/// the overall map has players, rows are built from the overall map with
/// zone `ALL`, visit 0, session id 0.
#[must_use]
pub fn collect_rows(analysis: &LogAnalysis) -> Vec<CsvRow> {
    let mut rows = Vec::new();
    for session in &analysis.sessions {
        for (player, totals) in session.damage.ranked() {
            if totals.total() == 0 {
                continue;
            }
            rows.push(CsvRow {
                zone: session.name.clone(),
                zone_visit: session.visit,
                session_id: session.session_id,
                player: player.to_string(),
                health: totals.health,
                armor: totals.armor,
                total: totals.total(),
            });
        }
    }

    if rows.is_empty() && !analysis.overall.is_empty() {
        for (player, totals) in analysis.overall.ranked() {
            if totals.total() == 0 {
                continue;
            }
            rows.push(CsvRow {
                zone: FALLBACK_ZONE.to_string(),
                zone_visit: 0,
                session_id: 0,
                player: player.to_string(),
                health: totals.health,
                armor: totals.armor,
                total: totals.total(),
            });
        }
    }

    rows
}

/// Writes the export rows for an analysis to a CSV file.
///
/// # Arguments
///
/// * `analysis` - The finished analysis to flatten
/// * `path` - The CSV output path
///
/// # Returns
///
/// The number of data rows written (excluding the header).
///
/// # Errors
///
/// Returns `ParserError::ExportFailed` if the file cannot be created or
/// written. The file handle is scoped to this function and released on
/// every path.
pub fn write_csv(analysis: &LogAnalysis, path: &Path) -> Result<usize> {
    let rows = collect_rows(analysis);

    let file =
        File::create(path).map_err(|e| ParserError::export_failed(path, e.to_string()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{CSV_HEADER}")
        .map_err(|e| ParserError::export_failed(path, e.to_string()))?;
    for row in &rows {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            csv_field(&row.zone),
            row.zone_visit,
            row.session_id,
            csv_field(&row.player),
            row.health,
            row.armor,
            row.total,
        )
        .map_err(|e| ParserError::export_failed(path, e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| ParserError::export_failed(path, e.to_string()))?;

    Ok(rows.len())
}

/// Quotes a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
