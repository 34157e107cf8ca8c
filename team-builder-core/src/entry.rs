use crate::stats::{BaseStats, Nature, StatsSet};
use serde::{Deserialize, Serialize};

pub const MAX_LEVEL: u8 = 100;
pub const MIN_LEVEL: u8 = 1;
pub const MAX_IV: u8 = 31;
pub const MAX_EV: u8 = 252;
/// Conventional total EV cap. Not enforced by the codec.
pub const EV_TOTAL_CAP: u16 = 508;
pub const MOVE_SLOTS: usize = 4;

/// One team member as the builder stores it. All identifiers are lowercase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub species: String,
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub sprite: String,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub ability: String,
    #[serde(default)]
    pub nature: String,
    #[serde(default)]
    pub tera_type: String,
    #[serde(default = "default_ivs")]
    pub ivs: [u8; 6],
    #[serde(default)]
    pub evs: [u8; 6],
    #[serde(default)]
    pub moves: [String; MOVE_SLOTS],
}

fn default_level() -> u8 {
    MAX_LEVEL
}

fn default_ivs() -> [u8; 6] {
    [MAX_IV; 6]
}

impl RosterEntry {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            id: 0,
            sprite: String::new(),
            level: MAX_LEVEL,
            item: String::new(),
            ability: String::new(),
            nature: String::new(),
            tera_type: String::new(),
            ivs: default_ivs(),
            evs: [0; 6],
            moves: Default::default(),
        }
    }

    pub fn clamp_level(raw: i64) -> u8 {
        raw.clamp(MIN_LEVEL as i64, MAX_LEVEL as i64) as u8
    }

    pub fn resolved_nature(&self) -> Option<Nature> {
        Nature::from_name(&self.nature)
    }

    pub fn total_evs(&self) -> u16 {
        self.evs.iter().map(|&ev| ev as u16).sum()
    }

    pub fn exceeds_ev_cap(&self) -> bool {
        self.total_evs() > EV_TOTAL_CAP
    }

    /// Filled move slots in slot order.
    pub fn filled_moves(&self) -> impl Iterator<Item = &str> {
        self.moves.iter().map(String::as_str).filter(|m| !m.is_empty())
    }

    /// Shifts filled move slots to the front, which is the shape every
    /// text import produces.
    pub fn compact_moves(&mut self) {
        let mut compacted: [String; MOVE_SLOTS] = Default::default();
        for (slot, mv) in self.filled_moves().enumerate() {
            compacted[slot] = mv.to_string();
        }
        self.moves = compacted;
    }

    pub fn stats(&self, base: &BaseStats) -> StatsSet {
        StatsSet::compute(base, self.level, self.ivs, self.evs, &self.nature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_defaults() {
        let entry = RosterEntry::new("garchomp");
        assert_eq!(entry.level, 100);
        assert_eq!(entry.ivs, [31; 6]);
        assert_eq!(entry.evs, [0; 6]);
        assert!(entry.moves.iter().all(String::is_empty));
        assert_eq!(entry.resolved_nature(), None);
    }

    #[test]
    fn level_clamps_instead_of_rejecting() {
        assert_eq!(RosterEntry::clamp_level(0), 1);
        assert_eq!(RosterEntry::clamp_level(-5), 1);
        assert_eq!(RosterEntry::clamp_level(57), 57);
        assert_eq!(RosterEntry::clamp_level(250), 100);
    }

    #[test]
    fn ev_total_over_cap_is_reported_not_rejected() {
        let mut entry = RosterEntry::new("garchomp");
        entry.evs = [252, 252, 252, 0, 0, 0];
        assert_eq!(entry.total_evs(), 756);
        assert!(entry.exceeds_ev_cap());
        entry.evs = [4, 252, 0, 0, 0, 252];
        assert!(!entry.exceeds_ev_cap());
    }

    #[test]
    fn compact_moves_closes_gaps() {
        let mut entry = RosterEntry::new("garchomp");
        entry.moves = [
            String::new(),
            "earthquake".to_string(),
            String::new(),
            "swords-dance".to_string(),
        ];
        entry.compact_moves();
        assert_eq!(entry.moves[0], "earthquake");
        assert_eq!(entry.moves[1], "swords-dance");
        assert!(entry.moves[2].is_empty() && entry.moves[3].is_empty());
    }

    #[test]
    fn deserializes_with_defaults() -> Result<(), serde_json::Error> {
        let entry: RosterEntry = serde_json::from_str(r#"{"species":"pikachu"}"#)?;
        assert_eq!(entry, RosterEntry::new("pikachu"));
        Ok(())
    }
}
