//! Alias resolution for actor names.
//!
//! The game attributes damage to pets, summons, and environmental effects
//! under their own names. The alias table maps those raw names back to the
//! owning player's canonical name so all of a player's damage lands on one
//! row. Lookup is exact-match and case-sensitive; names absent from the
//! table resolve to themselves.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParserError, Result};

/// Default filename for the optional on-disk alias configuration.
///
/// The file is a flat JSON object mapping raw actor names to canonical
/// master names, for example `{"Uber Poker": "Yder"}`.
pub const ALIAS_CONFIG_FILE: &str = "damage_parser_aliases.json";

/// Immutable mapping from raw actor names to canonical master names.
///
/// Constructed once and injected into the analyzer; never mutated during a
/// run. Serializes as the flat raw-to-master JSON object used by the
/// on-disk configuration file.
///
/// # Example
///
/// ```
/// use gorgon_dps::alias::AliasTable;
///
/// let aliases = AliasTable::builtin();
/// assert_eq!(aliases.resolve("Uber Poker"), "Yder");
/// assert_eq!(aliases.resolve("Stranger"), "Stranger");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Creates an empty table where every name resolves to itself.
    #[must_use]
    pub fn new() -> Self {
        AliasTable {
            entries: HashMap::new(),
        }
    }

    /// Creates the built-in default table.
    ///
    /// Maps the known pet and environmental-effect names to their owner.
    #[must_use]
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        entries.insert("Uber Poker".to_string(), "Yder".to_string());
        entries.insert("Yder Poison Bee".to_string(), "Yder".to_string());
        entries.insert("Sandstorm".to_string(), "Yder".to_string());
        AliasTable { entries }
    }

    /// Loads a table from a JSON configuration file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a file containing a flat JSON object of
    ///   raw-to-master name entries
    ///
    /// # Errors
    ///
    /// Returns `ParserError::InvalidAliasConfig` if the file cannot be
    /// read or does not contain a flat JSON string map.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ParserError::InvalidAliasConfig {
                reason: format!("cannot read {}: {e}", path.display()),
            }
        })?;
        let table: AliasTable = serde_json::from_str(&contents).map_err(|e| {
            ParserError::InvalidAliasConfig {
                reason: format!("cannot parse {}: {e}", path.display()),
            }
        })?;
        Ok(table)
    }

    /// Merges another table into this one, with `other`'s entries winning
    /// on conflict.
    pub fn merge(&mut self, other: AliasTable) {
        self.entries.extend(other.entries);
    }

    /// Resolves a raw actor name to its canonical master name.
    ///
    /// Exact-match lookup, case-sensitive. Names not in the table resolve
    /// to themselves.
    #[must_use]
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.entries.get(raw).map_or(raw, String::as_str)
    }

    /// Returns the number of alias entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        AliasTable {
            entries: iter.into_iter().collect(),
        }
    }
}
