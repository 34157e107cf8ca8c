//! Tera-captain toggle and the restricted-species guard in front of it.

use crate::error::GuardError;
use crate::ident::capitalize_first;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

static DEFAULT_RESTRICTED: Lazy<Vec<String>> = Lazy::new(|| {
    let json_str = include_str!("../data/restricted_tera.json");
    serde_json::from_str(json_str).expect("Failed to parse data/restricted_tera.json")
});

pub const TYPE_SENTINELS: [&str; 3] = ["Type 1", "Type 2", "Type 3"];

/// Species names that may never be made tera captain. Matching is exact
/// and case-sensitive against the display form (`display_name` of the
/// stored id, so `chi-yu` is listed as `Chi Yu`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestrictedSet {
    names: HashSet<String>,
}

impl RestrictedSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for RestrictedSet {
    fn default() -> Self {
        Self::new(DEFAULT_RESTRICTED.iter().cloned())
    }
}

pub fn is_restricted(name: &str, restricted: &RestrictedSet) -> bool {
    restricted.contains(name)
}

/// State of one card's tera-captain button and its three type pickers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeraCaptain {
    pub active: bool,
    pub selectors_enabled: bool,
    pub selected_types: [String; 3],
}

impl Default for TeraCaptain {
    fn default() -> Self {
        Self {
            active: false,
            selectors_enabled: false,
            selected_types: TYPE_SENTINELS.map(String::from),
        }
    }
}

impl TeraCaptain {
    /// Flips captaincy for `name` and resets the pickers. A restricted name
    /// leaves `self` untouched and returns the violation.
    pub fn toggle(&self, name: &str, restricted: &RestrictedSet) -> Result<Self, GuardError> {
        if is_restricted(name, restricted) {
            tracing::warn!(species = name, "tera captain toggle blocked");
            return Err(GuardError::RestrictedEntityViolation {
                name: name.to_string(),
            });
        }
        Ok(Self {
            active: !self.active,
            selectors_enabled: !self.selectors_enabled,
            selected_types: TYPE_SENTINELS.map(String::from),
        })
    }

    /// Stores a type pick for slot 0..3. Out-of-range slots return `None`.
    pub fn select_type(&self, slot: usize, tera_type: &str) -> Option<Self> {
        if slot >= self.selected_types.len() {
            return None;
        }
        let mut next = self.clone();
        next.selected_types[slot] = capitalize_first(tera_type);
        Some(next)
    }

}
