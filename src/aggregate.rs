//! Damage accumulation per canonical player.
//!
//! [`DamageTotals`] holds one player's running health and armor damage;
//! [`PlayerDamageMap`] holds the totals for every player within one scope
//! (a single zone session, or the whole log). The map remembers the order
//! in which players were first seen so ranked output has a deterministic
//! tie-break.

use std::collections::HashMap;

use serde::Serialize;

/// Accumulated health and armor damage for one player in one scope.
///
/// The combined total is always derived from the two components; it is
/// never stored separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DamageTotals {
    /// Accumulated health damage.
    pub health: u64,
    /// Accumulated armor damage.
    pub armor: u64,
}

impl DamageTotals {
    /// Returns the combined health plus armor total.
    ///
    /// Saturates at `u64::MAX` rather than wrapping.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.health.saturating_add(self.armor)
    }

    /// Adds a damage event's amounts to the running totals.
    ///
    /// Additions saturate so arbitrarily long logs cannot overflow.
    pub fn add(&mut self, health: u64, armor: u64) {
        self.health = self.health.saturating_add(health);
        self.armor = self.armor.saturating_add(armor);
    }
}

/// Per-player damage totals within one scope.
///
/// Keys are canonical player names (alias resolution happens before
/// recording). First-encounter order is retained and used as the
/// tie-break when ranking players with equal totals.
///
/// # Example
///
/// ```
/// use gorgon_dps::aggregate::PlayerDamageMap;
///
/// let mut map = PlayerDamageMap::new();
/// map.record("Yder", 100, 50);
/// map.record("Yder", 10, 0);
/// let totals = map.get("Yder").unwrap();
/// assert_eq!(totals.health, 110);
/// assert_eq!(totals.armor, 50);
/// assert_eq!(totals.total(), 160);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerDamageMap {
    totals: HashMap<String, DamageTotals>,
    #[serde(skip)]
    order: Vec<String>,
}

impl PlayerDamageMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        PlayerDamageMap {
            totals: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Adds a damage event to the named player's totals.
    ///
    /// Inserts the player on first sight, preserving encounter order.
    pub fn record(&mut self, player: &str, health: u64, armor: u64) {
        if !self.totals.contains_key(player) {
            self.order.push(player.to_string());
        }
        self.totals.entry(player.to_string()).or_default().add(health, armor);
    }

    /// Returns the totals for a player, if present.
    #[must_use]
    pub fn get(&self, player: &str) -> Option<&DamageTotals> {
        self.totals.get(player)
    }

    /// Returns the number of players in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns `true` if no player has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Returns the sum of every player's combined total in this scope.
    ///
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub fn scope_total(&self) -> u64 {
        self.totals
            .values()
            .fold(0u64, |acc, t| acc.saturating_add(t.total()))
    }

    /// Returns players sorted by descending combined total.
    ///
    /// Ties keep first-encounter order: the sort is stable and runs over
    /// the order players first appeared in the log.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, DamageTotals)> {
        let mut rows: Vec<(&str, DamageTotals)> = self
            .order
            .iter()
            .map(|name| (name.as_str(), self.totals[name]))
            .collect();
        rows.sort_by(|a, b| b.1.total().cmp(&a.1.total()));
        rows
    }
}
