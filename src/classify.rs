//! Line classification for session log input.
//!
//! Each log line is matched against three checks in a fixed order: the
//! fight-boundary marker, the zone-change pattern, and the damage-event
//! pattern. The first match wins and a line produces at most one event.
//! Lines matching none of the checks are irrelevant and skipped.

use regex::Regex;

/// Literal substring marking the end of a combat encounter.
///
/// The client logs a corpse-search line when a defeated enemy is looted;
/// its presence on a line classifies the whole line as a fight boundary.
pub const FIGHT_MARKER: &str = "Search Corpse of";

/// Literal token preceding a zone name on a zone-change line.
pub const ZONE_MARKER: &str = "C_INIT2 for";

/// A single classified event extracted from one log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// A combat encounter ended. Only increments the fight counter.
    FightBoundary,

    /// The player entered a new zone.
    ZoneChange {
        /// The trimmed zone name following the marker token.
        zone: String,
    },

    /// An actor dealt damage.
    Damage {
        /// The raw actor name, before alias resolution.
        name: String,
        /// Health damage amount.
        health: u64,
        /// Armor damage amount.
        armor: u64,
    },
}

/// Classifies log lines into [`LineEvent`]s.
///
/// Patterns are compiled once at construction and reused for every line.
///
/// # Example
///
/// ```
/// use gorgon_dps::classify::{LineClassifier, LineEvent};
///
/// let classifier = LineClassifier::new();
/// let event = classifier.classify("Uber Poker: 100 health dmg 50 armor dmg");
/// assert_eq!(
///     event,
///     Some(LineEvent::Damage {
///         name: "Uber Poker".to_string(),
///         health: 100,
///         armor: 50,
///     })
/// );
/// ```
#[derive(Debug)]
pub struct LineClassifier {
    zone_pattern: Regex,
    damage_pattern: Regex,
}

impl LineClassifier {
    /// Creates a classifier with the zone and damage patterns compiled.
    #[must_use]
    pub fn new() -> Self {
        LineClassifier {
            zone_pattern: Regex::new(&format!(r"{ZONE_MARKER}\s+(\S.*)$"))
                .expect("zone pattern is a valid regex"),
            damage_pattern: Regex::new(r"^([\w ]+):\s*(\d+)\s+health\s+dmg\s+(\d+)\s+armor\s+dmg")
                .expect("damage pattern is a valid regex"),
        }
    }

    /// Classifies one log line.
    ///
    /// Checks are applied in order: fight boundary, zone change, damage.
    /// The fight-boundary check runs first on every line, so a
    /// damage-shaped line that contains the corpse marker is still a fight
    /// boundary. Returns `None` for irrelevant lines and for damage lines
    /// whose amounts do not fit in a `u64`.
    #[must_use]
    pub fn classify(&self, line: &str) -> Option<LineEvent> {
        let line = line.trim();

        if line.contains(FIGHT_MARKER) {
            return Some(LineEvent::FightBoundary);
        }

        if let Some(caps) = self.zone_pattern.captures(line) {
            let zone = caps[1].trim().to_string();
            return Some(LineEvent::ZoneChange { zone });
        }

        if let Some(caps) = self.damage_pattern.captures(line) {
            let name = caps[1].trim().to_string();
            // Out-of-range amounts skip the line rather than abort the run.
            let health: u64 = caps[2].parse().ok()?;
            let armor: u64 = caps[3].parse().ok()?;
            return Some(LineEvent::Damage { name, health, armor });
        }

        None
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
