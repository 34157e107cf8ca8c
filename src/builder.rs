//! The team builder controller: sole owner of the roster being edited.
//!
//! Every import produces a fresh roster from the core and swaps it in whole,
//! so a failed import can never leave a half-replaced team behind.

use crate::config::BuilderConfig;
use crate::notice::{Notice, NoticeLevel};
use std::collections::HashMap;
use team_builder_core::entry::{MAX_EV, MAX_IV, MOVE_SLOTS};
use team_builder_core::ident::normalize_id;
use team_builder_core::prelude::*;
use team_builder_core::species::SpeciesInfo;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Guard(#[from] GuardError),
    #[error("no team member at index {0}")]
    IndexOutOfRange(usize),
    #[error("move slot {0} does not exist")]
    InvalidSlot(usize),
    #[error("'{0}' is not a move this Pokémon can learn")]
    UnknownMove(String),
}

pub struct TeamBuilder<R> {
    roster: Roster,
    resolver: R,
    config: BuilderConfig,
    restricted: RestrictedSet,
    tera_captains: HashMap<String, TeraCaptain>,
    notices: Vec<Notice>,
}

impl<R: SpeciesResolver> TeamBuilder<R> {
    pub fn new(resolver: R, config: BuilderConfig) -> Self {
        let restricted = config.restricted_set();
        Self {
            roster: Roster::new(),
            resolver,
            config,
            restricted,
            tera_captains: HashMap::new(),
            notices: Vec::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Replaces the roster with the parsed text. On failure the current
    /// roster is kept exactly as it was.
    pub fn import_text(&mut self, text: &str) -> Result<usize, BuilderError> {
        let import = match parse_showdown_team(text, &self.resolver) {
            Ok(import) => import,
            Err(err) => {
                tracing::warn!(error = %err, "team import rejected");
                self.notify(
                    NoticeLevel::Error,
                    "Invalid Pokémon party data format. Please check the input.",
                );
                return Err(err.into());
            }
        };
        for warning in &import.warnings {
            self.notify(NoticeLevel::Warning, warning.to_string());
        }
        let count = import.roster.len();
        self.roster = import.roster;
        tracing::info!(entries = count, "team imported");
        self.notify(NoticeLevel::Info, "Pokémon party data imported successfully!");
        Ok(count)
    }

    pub fn export_text(&self) -> String {
        format_team(&self.roster)
    }

    /// A fresh entry for `species`, resolved through the configured resolver.
    pub fn new_entry(&mut self, species: &str) -> RosterEntry {
        let mut entry = RosterEntry::new(normalize_id(species));
        entry.level = self.config.default_level;
        match self.resolver.resolve(&entry.species) {
            Ok(found) => {
                entry.id = found.id;
                entry.sprite = found.sprite.to_lowercase();
            }
            Err(err) => {
                tracing::warn!(species = %entry.species, error = %err, "species lookup failed");
                self.notify(NoticeLevel::Warning, err.to_string());
            }
        }
        entry
    }

    pub fn add(&mut self, entry: RosterEntry) {
        self.roster.push(entry);
    }

    pub fn remove(&mut self, index: usize) -> Result<RosterEntry, BuilderError> {
        self.roster
            .remove(index)
            .ok_or(BuilderError::IndexOutOfRange(index))
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut RosterEntry, BuilderError> {
        self.roster
            .get_mut(index)
            .ok_or(BuilderError::IndexOutOfRange(index))
    }

    pub fn set_level(&mut self, index: usize, raw: i64) -> Result<(), BuilderError> {
        self.entry_mut(index)?.level = RosterEntry::clamp_level(raw);
        Ok(())
    }

    pub fn set_ev(&mut self, index: usize, stat: Stat, raw: i64) -> Result<(), BuilderError> {
        self.entry_mut(index)?.evs[stat.index()] = raw.clamp(0, MAX_EV as i64) as u8;
        Ok(())
    }

    pub fn set_iv(&mut self, index: usize, stat: Stat, raw: i64) -> Result<(), BuilderError> {
        self.entry_mut(index)?.ivs[stat.index()] = raw.clamp(0, MAX_IV as i64) as u8;
        Ok(())
    }

    pub fn set_nature(&mut self, index: usize, nature: &str) -> Result<(), BuilderError> {
        self.entry_mut(index)?.nature = normalize_id(nature);
        Ok(())
    }

    pub fn set_item(&mut self, index: usize, item: &str) -> Result<(), BuilderError> {
        self.entry_mut(index)?.item = normalize_id(item);
        Ok(())
    }

    pub fn set_ability(&mut self, index: usize, ability: &str) -> Result<(), BuilderError> {
        self.entry_mut(index)?.ability = normalize_id(ability);
        Ok(())
    }

    pub fn set_tera_type(&mut self, index: usize, tera_type: &str) -> Result<(), BuilderError> {
        self.entry_mut(index)?.tera_type = normalize_id(tera_type);
        Ok(())
    }

    /// Sets one move slot. Blank input clears the slot. When `learnable` is
    /// given, the move must be in it or the slot is left unchanged.
    pub fn set_move(
        &mut self,
        index: usize,
        slot: usize,
        input: &str,
        learnable: Option<&[String]>,
    ) -> Result<(), BuilderError> {
        if slot >= MOVE_SLOTS {
            return Err(BuilderError::InvalidSlot(slot));
        }
        if self.roster.get(index).is_none() {
            return Err(BuilderError::IndexOutOfRange(index));
        }
        let name = normalize_id(input);
        if let Some(learnable) = learnable {
            if !name.is_empty() && !learnable.contains(&name) {
                self.notify(NoticeLevel::Error, "Please enter a valid move");
                return Err(BuilderError::UnknownMove(name));
            }
        }
        self.entry_mut(index)?.moves[slot] = name;
        Ok(())
    }

    /// Fills a blank ability with the species' first listed ability.
    pub fn apply_species_info(&mut self, index: usize, info: &SpeciesInfo) -> Result<(), BuilderError> {
        let entry = self.entry_mut(index)?;
        if entry.ability.is_empty() {
            if let Some(ability) = info.default_ability() {
                entry.ability = ability.to_string();
            }
        }
        Ok(())
    }

    pub fn stats(&self, index: usize, base: &BaseStats) -> Result<StatsSet, BuilderError> {
        self.roster
            .get(index)
            .map(|entry| entry.stats(base))
            .ok_or(BuilderError::IndexOutOfRange(index))
    }

    pub fn tera_captain(&self, name: &str) -> TeraCaptain {
        self.tera_captains.get(name).cloned().unwrap_or_default()
    }

    /// Flips tera captaincy for `name`. Restricted species keep their state
    /// and raise a warning notice.
    pub fn toggle_tera_captain(&mut self, name: &str) -> Result<TeraCaptain, BuilderError> {
        let current = self.tera_captain(name);
        match current.toggle(name, &self.restricted) {
            Ok(next) => {
                self.tera_captains.insert(name.to_string(), next.clone());
                Ok(next)
            }
            Err(err) => {
                self.notify(
                    NoticeLevel::Warning,
                    "This Pokemon is Banned from being a Tera Captain!",
                );
                Err(err.into())
            }
        }
    }

    pub fn select_tera_type(
        &mut self,
        name: &str,
        slot: usize,
        tera_type: &str,
    ) -> Result<TeraCaptain, BuilderError> {
        let next = self
            .tera_captain(name)
            .select_type(slot, tera_type)
            .ok_or(BuilderError::InvalidSlot(slot))?;
        self.tera_captains.insert(name.to_string(), next.clone());
        Ok(next)
    }

    fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices
            .push(Notice::new(level, message, self.config.notice_ttl()));
    }

    /// Pending notices, oldest first. The queue is emptied.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}
