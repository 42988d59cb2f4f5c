//! Integration tests for the end-to-end log analysis pass.
//!
//! These tests drive the analyzer over complete in-memory logs and over
//! real files in temporary directories, checking session segmentation,
//! alias merging, and the overall totals together.

use std::fs;
use std::io::Write;
use std::path::Path;

use gorgon_dps::alias::AliasTable;
use gorgon_dps::analyzer::{analyze_file, LogAnalysis, LogAnalyzer};
use gorgon_dps::error::ParserError;

/// Runs the analyzer over a slice of lines with the built-in aliases.
fn analyze_lines(lines: &[&str]) -> LogAnalysis {
    let mut analyzer = LogAnalyzer::new(AliasTable::builtin());
    for line in lines {
        analyzer.consume_line(line);
    }
    analyzer.finish("test")
}

/// The canonical six-line session used across these tests.
const SESSION_LINES: &[&str] = &[
    "Sent C_INIT2 for AreaPovus",
    "Uber Poker: 100 health dmg 50 armor dmg",
    "Sent C_INIT2 for AreaCasino",
    "Yder Poison Bee: 10 health dmg 0 armor dmg",
    "Sent C_INIT2 for AreaPovus",
    "Sandstorm: 5 health dmg 5 armor dmg",
];

// ============================================================================
// Session Segmentation
// ============================================================================

#[test]
fn test_three_sessions_in_chronological_order() {
    let analysis = analyze_lines(SESSION_LINES);

    assert_eq!(analysis.sessions.len(), 3);

    let summary: Vec<(u32, &str, u32)> = analysis
        .sessions
        .iter()
        .map(|s| (s.session_id, s.name.as_str(), s.visit))
        .collect();
    assert_eq!(
        summary,
        vec![(1, "AreaPovus", 1), (2, "AreaCasino", 1), (3, "AreaPovus", 2)]
    );
}

#[test]
fn test_revisited_zones_are_not_merged() {
    let analysis = analyze_lines(SESSION_LINES);

    let first_povus = &analysis.sessions[0];
    let second_povus = &analysis.sessions[2];
    assert_eq!(first_povus.damage.get("Yder").unwrap().total(), 150);
    assert_eq!(second_povus.damage.get("Yder").unwrap().total(), 10);
}

#[test]
fn test_pre_zone_damage_lands_in_unknown_session() {
    let analysis = analyze_lines(&[
        "Uber Poker: 20 health dmg 0 armor dmg",
        "Sent C_INIT2 for AreaPovus",
        "Uber Poker: 1 health dmg 0 armor dmg",
    ]);

    assert_eq!(analysis.sessions.len(), 2);
    assert_eq!(analysis.sessions[0].name, "Unknown");
    assert_eq!(analysis.sessions[0].visit, 1);
    assert_eq!(analysis.sessions[0].session_id, 1);
    assert_eq!(analysis.sessions[0].damage.get("Yder").unwrap().health, 20);
    assert_eq!(analysis.overall.get("Yder").unwrap().health, 21);
}

// ============================================================================
// Alias Resolution and Overall Totals
// ============================================================================

#[test]
fn test_alias_variants_collapse_to_one_overall_row() {
    let analysis = analyze_lines(SESSION_LINES);

    assert_eq!(analysis.overall.len(), 1);
    let totals = analysis.overall.get("Yder").unwrap();
    assert_eq!(totals.health, 115);
    assert_eq!(totals.armor, 55);
    assert_eq!(totals.total(), 170);
}

#[test]
fn test_unaliased_names_pass_through() {
    let analysis = analyze_lines(&[
        "Sent C_INIT2 for AreaPovus",
        "Random Wanderer: 12 health dmg 3 armor dmg",
    ]);

    let totals = analysis.overall.get("Random Wanderer").unwrap();
    assert_eq!(totals.total(), 15);
}

#[test]
fn test_fight_markers_only_bump_the_counter() {
    let analysis = analyze_lines(&[
        "Sent C_INIT2 for AreaPovus",
        "ProcessTalkScreen(7, Search Corpse of Uber Poker,",
        "Uber Poker: 9 health dmg 1 armor dmg",
        "ProcessTalkScreen(8, Search Corpse of Wasp,",
    ]);

    assert_eq!(analysis.fight_count, 2);
    assert_eq!(analysis.overall.get("Yder").unwrap().total(), 10);
}

#[test]
fn test_irrelevant_and_malformed_lines_are_skipped() {
    let analysis = analyze_lines(&[
        "Sent C_INIT2 for AreaPovus",
        "Chat: hello everyone",
        "Uber Poker: lots of health dmg",
        "Uber Poker: 99999999999999999999999 health dmg 1 armor dmg",
        "Uber Poker: 5 health dmg 5 armor dmg",
    ]);

    assert_eq!(analysis.line_count, 5);
    assert_eq!(analysis.overall.get("Yder").unwrap().total(), 10);
}

#[test]
fn test_transition_screens_do_not_open_sessions() {
    let analysis = analyze_lines(&[
        "Sent C_INIT2 for ChooseCharacter",
        "Sent C_INIT2 for LoadingScene",
        "Sent C_INIT2 for AreaSerbule",
    ]);

    assert_eq!(analysis.sessions.len(), 1);
    assert_eq!(analysis.sessions[0].name, "AreaSerbule");
    assert_eq!(analysis.sessions[0].session_id, 1);
}

// ============================================================================
// File-Level Entry Point
// ============================================================================

#[test]
fn test_analyze_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("Player.log");
    let mut file = fs::File::create(&log_path).unwrap();
    for line in SESSION_LINES {
        writeln!(file, "{line}").unwrap();
    }
    drop(file);

    let analysis = analyze_file(&log_path, AliasTable::builtin()).unwrap();

    assert_eq!(analysis.line_count, 6);
    assert_eq!(analysis.sessions.len(), 3);
    assert_eq!(analysis.overall.get("Yder").unwrap().total(), 170);
    assert!(analysis.source.contains("Player.log"));
}

#[test]
fn test_analyze_file_missing_log_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no_such.log");

    let err = analyze_file(&missing, AliasTable::builtin()).unwrap_err();
    match err {
        ParserError::LogNotFound { path } => assert!(path.contains("no_such.log")),
        other => panic!("Expected LogNotFound, got {other:?}"),
    }
}

#[test]
fn test_analyze_file_empty_log() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("Player.log");
    fs::write(&log_path, "").unwrap();

    let analysis = analyze_file(&log_path, AliasTable::builtin()).unwrap();
    assert_eq!(analysis.line_count, 0);
    assert!(analysis.sessions.is_empty());
    assert!(analysis.overall.is_empty());
}

#[test]
fn test_custom_alias_table_is_injected() {
    let aliases: AliasTable = [("Fire Wall".to_string(), "Mira".to_string())]
        .into_iter()
        .collect();

    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("Player.log");
    fs::write(
        &log_path,
        "Sent C_INIT2 for AreaPovus\nFire Wall: 8 health dmg 2 armor dmg\n",
    )
    .unwrap();

    let analysis = analyze_file(Path::new(&log_path), aliases).unwrap();
    assert_eq!(analysis.overall.get("Mira").unwrap().total(), 10);
    assert!(analysis.overall.get("Fire Wall").is_none());
}
