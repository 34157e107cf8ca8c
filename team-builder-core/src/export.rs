use crate::entry::{RosterEntry, MAX_LEVEL};
use crate::ident::display_name;
use crate::roster::Roster;
use crate::stats::Stat;

/// Renders a whole roster in Showdown format, one blank line after each entry.
pub fn format_team(roster: &Roster) -> String {
    roster.iter().map(format_entry).collect()
}

/// Renders one entry. Empty move slots are skipped, so sparse move lists
/// come back compacted on re-import.
pub fn format_entry(entry: &RosterEntry) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} @ {}\n", display_name(&entry.species), display_name(&entry.item)));
    out.push_str(&format!("Ability: {}\n", display_name(&entry.ability)));
    if entry.level != MAX_LEVEL {
        out.push_str(&format!("Level: {}\n", entry.level));
    }
    if !entry.tera_type.is_empty() {
        out.push_str(&format!("Tera Type: {}\n", display_name(&entry.tera_type)));
    }
    if let Some(evs) = format_evs(&entry.evs) {
        out.push_str(&format!("EVs: {evs}\n"));
    }
    out.push_str(&format!("{} Nature\n", display_name(&entry.nature)));
    for mv in entry.filled_moves() {
        out.push_str(&format!("- {}\n", display_name(mv)));
    }
    out.push('\n');
    out
}

fn format_evs(evs: &[u8; 6]) -> Option<String> {
    let parts: Vec<String> = Stat::ALL
        .iter()
        .filter(|stat| evs[stat.index()] > 0)
        .map(|stat| format!("{} {}", evs[stat.index()], stat.abbrev()))
        .collect();
    (!parts.is_empty()).then(|| parts.join(" / "))
}
