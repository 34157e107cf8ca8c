use crate::entry::RosterEntry;
use serde::{Deserialize, Serialize};

/// Ordered team. No uniqueness or capacity rules live here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<RosterEntry>);

impl Roster {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RosterEntry> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut RosterEntry> {
        self.0.get_mut(index)
    }

    pub fn push(&mut self, entry: RosterEntry) {
        self.0.push(entry);
    }

    pub fn remove(&mut self, index: usize) -> Option<RosterEntry> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RosterEntry> {
        self.0.iter()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.0
    }
}

impl From<Vec<RosterEntry>> for Roster {
    fn from(entries: Vec<RosterEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<RosterEntry> for Roster {
    fn from_iter<I: IntoIterator<Item = RosterEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RosterEntry;
    type IntoIter = std::slice::Iter<'a, RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Roster {
    type Item = RosterEntry;
    type IntoIter = std::vec::IntoIter<RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
