//! # Gorgon DPS
//!
//! A Project Gorgon combat log parser and damage report generator.
//!
//! This library reads the client's plain-text session log (`Player.log`)
//! in one linear pass and produces a damage-attribution report:
//! - per-player health and armor damage, merged under canonical names
//! - zone-based segmentation with per-zone ranked tables
//! - one combined table across every zone
//! - optional CSV export of all per-zone per-player rows
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use gorgon_dps::alias::AliasTable;
//! use gorgon_dps::analyzer::analyze_file;
//! use gorgon_dps::error::Result;
//! use gorgon_dps::report::render_report;
//!
//! fn print_report(path: &Path) -> Result<()> {
//!     let analysis = analyze_file(path, AliasTable::builtin())?;
//!
//!     println!("{}", render_report(&analysis));
//!     println!("Sessions: {}", analysis.sessions.len());
//!     println!("Fights: {}", analysis.fight_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`error`] - Error types and result alias for analysis operations
//! - [`classify`] - Per-line classification into fight, zone, and damage events
//! - [`alias`] - Raw actor name to canonical player name resolution
//! - [`aggregate`] - Per-player damage accumulation and ranking
//! - [`session`] - Zone session segmentation and visit counting
//! - [`analyzer`] - The single-pass driver and file-level entry point
//! - [`report`] - Ranked-table report rendering
//! - [`export`] - Flat CSV export
//!
//! ## Log Line Reference
//!
//! Three line shapes matter; everything else is skipped:
//!
//! - Fight boundary: any line containing `Search Corpse of`
//! - Zone change: `... C_INIT2 for <ZoneName>`
//! - Damage event: `<name>: <n> health dmg <n> armor dmg`

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregate;
pub mod alias;
pub mod analyzer;
pub mod classify;
pub mod error;
pub mod export;
pub mod report;
pub mod session;

// Re-export commonly used types at the crate root
pub use aggregate::{DamageTotals, PlayerDamageMap};
pub use alias::{AliasTable, ALIAS_CONFIG_FILE};
pub use analyzer::{analyze_file, LogAnalysis, LogAnalyzer, DEFAULT_LOG_FILE};
pub use classify::{LineClassifier, LineEvent, FIGHT_MARKER, ZONE_MARKER};
pub use error::{ParserError, Result};
pub use export::{collect_rows, write_csv, CsvRow, CSV_HEADER, DEFAULT_CSV_FILE};
pub use report::render_report;
pub use session::{SessionTracker, ZoneSession, SKIP_ZONES, UNKNOWN_ZONE};
