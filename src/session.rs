//! Zone session tracking.
//!
//! The log is segmented into zone sessions: one session opens on every
//! zone-change event and implicitly ends when the next one opens (or at
//! end of log). Sessions are append-only and never merged, so a zone
//! visited three times yields three separate sessions. Damage arriving
//! before the first zone marker lands in an implicit "Unknown" session
//! that is materialized on demand.

use serde::Serialize;

use crate::aggregate::PlayerDamageMap;

/// Name used for the implicit session that captures damage occurring
/// before any zone-change marker.
pub const UNKNOWN_ZONE: &str = "Unknown";

/// Zone names that are client transition screens rather than gameplay
/// zones. Zone-change events for these are ignored entirely.
pub const SKIP_ZONES: &[&str] = &["ChooseCharacter", "ReconnectToServer", "LoadingScene"];

/// One contiguous interval of log lines spent in a single zone.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneSession {
    /// 1-based id, strictly increasing in order of appearance.
    pub session_id: u32,
    /// The zone name from the zone-change marker.
    pub name: String,
    /// 1-based count of visits to this zone name so far, including this one.
    pub visit: u32,
    /// Damage recorded while this session was current.
    pub damage: PlayerDamageMap,
}

/// Tracks the ordered list of zone sessions and their counters.
///
/// The session id counter and per-zone visit counters are owned by the
/// tracker and mutated only through [`SessionTracker::enter_zone`] and
/// [`SessionTracker::record_damage`].
///
/// # Example
///
/// ```
/// use gorgon_dps::session::SessionTracker;
///
/// let mut tracker = SessionTracker::new();
/// tracker.enter_zone("AreaPovus");
/// tracker.enter_zone("AreaCasino");
/// tracker.enter_zone("AreaPovus");
///
/// let sessions = tracker.sessions();
/// assert_eq!(sessions.len(), 3);
/// assert_eq!(sessions[2].session_id, 3);
/// assert_eq!(sessions[2].visit, 2);
/// ```
#[derive(Debug, Default)]
pub struct SessionTracker {
    sessions: Vec<ZoneSession>,
    visits: std::collections::HashMap<String, u32>,
    next_id: u32,
}

impl SessionTracker {
    /// Creates a tracker with no sessions.
    #[must_use]
    pub fn new() -> Self {
        SessionTracker::default()
    }

    /// Opens a new session for the given zone name and makes it current.
    ///
    /// Assigns the next session id, bumps the visit counter for the name,
    /// and appends the session. Transition-screen names in [`SKIP_ZONES`]
    /// are ignored: no session opens and no counter moves.
    pub fn enter_zone(&mut self, name: &str) {
        if SKIP_ZONES.contains(&name) {
            return;
        }
        self.open_session(name);
    }

    /// Records a damage event against the current session.
    ///
    /// If no zone-change event has been seen yet, an implicit
    /// [`UNKNOWN_ZONE`] session is opened first so the damage is not
    /// dropped.
    pub fn record_damage(&mut self, player: &str, health: u64, armor: u64) {
        if self.sessions.is_empty() {
            self.open_session(UNKNOWN_ZONE);
        }
        if let Some(current) = self.sessions.last_mut() {
            current.damage.record(player, health, armor);
        }
    }

    /// Returns the sessions in chronological order of appearance.
    #[must_use]
    pub fn sessions(&self) -> &[ZoneSession] {
        &self.sessions
    }

    /// Consumes the tracker and returns the session list.
    #[must_use]
    pub fn into_sessions(self) -> Vec<ZoneSession> {
        self.sessions
    }

    fn open_session(&mut self, name: &str) {
        self.next_id += 1;
        let visit = self.visits.entry(name.to_string()).or_insert(0);
        *visit += 1;
        self.sessions.push(ZoneSession {
            session_id: self.next_id,
            name: name.to_string(),
            visit: *visit,
            damage: PlayerDamageMap::new(),
        });
    }
}
