//! Team builder core: Showdown text import/export and final stat calculation.
//!
//! The entry points are [`parse_showdown_team`] and [`format_team`] for the
//! text format, and [`stats::StatsSet::compute`] for derived stats.

pub mod entry;
pub mod error;
pub mod export;
pub mod ident;
pub mod parser;
pub mod roster;
pub mod species;
pub mod stats;
pub mod tera;

pub use export::{format_entry, format_team};
pub use parser::{parse_entry, parse_showdown_team, Import};

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::entry::RosterEntry;
    pub use crate::error::{GuardError, ImportWarning, LookupError, ParseError};
    pub use crate::export::{format_entry, format_team};
    pub use crate::parser::{parse_entry, parse_showdown_team, Import};
    pub use crate::roster::Roster;
    pub use crate::species::{SpeciesRef, SpeciesResolver, StaticDex};
    pub use crate::stats::{compute_stat, BaseStats, Nature, NatureModifier, Stat, StatsSet};
    pub use crate::tera::{is_restricted, RestrictedSet, TeraCaptain};
}
