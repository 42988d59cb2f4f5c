//! Single-pass log analysis.
//!
//! [`LogAnalyzer`] ties the classifier, alias table, session tracker, and
//! overall damage map together: each line is classified, damage events are
//! alias-resolved and recorded in both the current zone session and the
//! overall map, and the finished [`LogAnalysis`] carries everything the
//! reporter and exporter need. [`analyze_file`] is the file-level entry
//! point.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::aggregate::PlayerDamageMap;
use crate::alias::AliasTable;
use crate::classify::{LineClassifier, LineEvent};
use crate::error::{ParserError, Result};
use crate::session::{SessionTracker, ZoneSession};

/// Default log filename, as written by the game client.
pub const DEFAULT_LOG_FILE: &str = "Player.log";

/// The complete result of one pass over a log.
#[derive(Debug, Serialize)]
pub struct LogAnalysis {
    /// Where the lines came from, for report diagnostics.
    pub source: String,
    /// Number of lines consumed.
    pub line_count: u64,
    /// Number of fight-boundary markers seen.
    pub fight_count: u64,
    /// Zone sessions in chronological order.
    pub sessions: Vec<ZoneSession>,
    /// Damage totals across the whole log.
    pub overall: PlayerDamageMap,
}

/// Stateful driver for one linear pass over a log.
///
/// # Example
///
/// ```
/// use gorgon_dps::alias::AliasTable;
/// use gorgon_dps::analyzer::LogAnalyzer;
///
/// let mut analyzer = LogAnalyzer::new(AliasTable::builtin());
/// analyzer.consume_line("Sent C_INIT2 for AreaPovus");
/// analyzer.consume_line("Uber Poker: 100 health dmg 50 armor dmg");
/// let analysis = analyzer.finish("example");
///
/// assert_eq!(analysis.sessions.len(), 1);
/// assert_eq!(analysis.overall.get("Yder").unwrap().total(), 150);
/// ```
#[derive(Debug)]
pub struct LogAnalyzer {
    classifier: LineClassifier,
    aliases: AliasTable,
    tracker: SessionTracker,
    overall: PlayerDamageMap,
    fight_count: u64,
    line_count: u64,
}

impl LogAnalyzer {
    /// Creates an analyzer using the given alias table.
    #[must_use]
    pub fn new(aliases: AliasTable) -> Self {
        LogAnalyzer {
            classifier: LineClassifier::new(),
            aliases,
            tracker: SessionTracker::new(),
            overall: PlayerDamageMap::new(),
            fight_count: 0,
            line_count: 0,
        }
    }

    /// Consumes one log line, updating all analysis state.
    ///
    /// Damage events update the current zone session and the overall map
    /// together; neither is ever updated without the other.
    pub fn consume_line(&mut self, line: &str) {
        self.line_count += 1;
        match self.classifier.classify(line) {
            Some(LineEvent::FightBoundary) => {
                self.fight_count += 1;
            }
            Some(LineEvent::ZoneChange { zone }) => {
                self.tracker.enter_zone(&zone);
            }
            Some(LineEvent::Damage { name, health, armor }) => {
                let player = self.aliases.resolve(&name).to_string();
                self.tracker.record_damage(&player, health, armor);
                self.overall.record(&player, health, armor);
            }
            None => {}
        }
    }

    /// Finishes the pass and returns the analysis.
    ///
    /// # Arguments
    ///
    /// * `source` - A label for where the lines came from, shown in the
    ///   report header
    #[must_use]
    pub fn finish(self, source: impl Into<String>) -> LogAnalysis {
        LogAnalysis {
            source: source.into(),
            line_count: self.line_count,
            fight_count: self.fight_count,
            sessions: self.tracker.into_sessions(),
            overall: self.overall,
        }
    }
}

/// Analyzes a log file in one streaming pass.
///
/// # Arguments
///
/// * `path` - Path to the log file
/// * `aliases` - The alias table used to canonicalize actor names
///
/// # Errors
///
/// Returns `ParserError::LogNotFound` if the path does not exist, or
/// `ParserError::IoError` if reading fails mid-pass.
pub fn analyze_file(path: &Path, aliases: AliasTable) -> Result<LogAnalysis> {
    if !path.exists() {
        return Err(ParserError::log_not_found(path));
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut analyzer = LogAnalyzer::new(aliases);
    for line in reader.lines() {
        let line = line?;
        analyzer.consume_line(&line);
    }
    Ok(analyzer.finish(path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> LogAnalysis {
        let mut analyzer = LogAnalyzer::new(AliasTable::builtin());
        for line in lines {
            analyzer.consume_line(line);
        }
        analyzer.finish("test")
    }

    #[test]
    fn test_damage_updates_session_and_overall_together() {
        let analysis = run(&[
            "Sent C_INIT2 for AreaPovus",
            "Uber Poker: 100 health dmg 50 armor dmg",
        ]);
        let session_totals = analysis.sessions[0].damage.get("Yder").unwrap();
        let overall_totals = analysis.overall.get("Yder").unwrap();
        assert_eq!(session_totals.health, 100);
        assert_eq!(overall_totals.health, 100);
        assert_eq!(session_totals.armor, overall_totals.armor);
    }

    #[test]
    fn test_alias_variants_merge_into_one_row() {
        let analysis = run(&[
            "Sent C_INIT2 for AreaPovus",
            "Uber Poker: 100 health dmg 50 armor dmg",
            "Yder Poison Bee: 10 health dmg 0 armor dmg",
            "Sandstorm: 5 health dmg 5 armor dmg",
        ]);
        assert_eq!(analysis.overall.len(), 1);
        let totals = analysis.overall.get("Yder").unwrap();
        assert_eq!(totals.health, 115);
        assert_eq!(totals.armor, 55);
        assert_eq!(totals.total(), 170);
    }

    #[test]
    fn test_fight_counter() {
        let analysis = run(&[
            "ProcessTalkScreen(1, Search Corpse of Bee,",
            "irrelevant line",
            "ProcessTalkScreen(2, Search Corpse of Wasp,",
        ]);
        assert_eq!(analysis.fight_count, 2);
        assert_eq!(analysis.line_count, 3);
    }

    #[test]
    fn test_pre_zone_damage_is_retained() {
        let analysis = run(&[
            "Uber Poker: 3 health dmg 4 armor dmg",
            "Sent C_INIT2 for AreaPovus",
        ]);
        assert_eq!(analysis.sessions.len(), 2);
        assert_eq!(analysis.sessions[0].name, "Unknown");
        assert_eq!(analysis.sessions[0].visit, 1);
        assert_eq!(analysis.overall.get("Yder").unwrap().total(), 7);
    }

    #[test]
    fn test_analyze_file_missing_path() {
        let err = analyze_file(Path::new("/nonexistent/Player.log"), AliasTable::builtin())
            .unwrap_err();
        match err {
            ParserError::LogNotFound { path } => assert!(path.contains("Player.log")),
            other => panic!("Expected LogNotFound, got {other:?}"),
        }
    }
}
