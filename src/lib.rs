pub mod builder;
pub mod config;
pub mod notice;

use crate::builder::TeamBuilder;
use crate::config::BuilderConfig;
use crate::notice::Notice;
use anyhow::Context;
use std::fmt::Write;
use std::path::Path;
use team_builder_core::ident::display_name;
use team_builder_core::prelude::*;

pub fn read_team_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read team file at {}", path.display()))
}

pub fn load_roster_json(path: &Path) -> anyhow::Result<Roster> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file at {}", path.display()))?;
    let roster: Roster = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(roster)
}

/// Imports a Showdown team file through the built-in dex.
pub fn import_file(path: &Path, config: BuilderConfig) -> anyhow::Result<(Roster, Vec<Notice>)> {
    let text = read_team_text(path)?;
    let mut builder = TeamBuilder::new(StaticDex, config);
    builder
        .import_text(&text)
        .with_context(|| format!("Failed to import team from {}", path.display()))?;
    let notices = builder.take_notices();
    Ok((builder.roster().clone(), notices))
}

pub fn export_file(path: &Path) -> anyhow::Result<String> {
    let roster = load_roster_json(path)?;
    Ok(format_team(&roster))
}

/// Final stats for every member of the team file, one block per entry.
pub fn stats_report(path: &Path) -> anyhow::Result<String> {
    let text = read_team_text(path)?;
    let import = parse_showdown_team(&text, &StaticDex)
        .with_context(|| format!("Failed to import team from {}", path.display()))?;
    let mut out = String::new();
    for entry in &import.roster {
        let name = display_name(&entry.species);
        let Some(info) = StaticDex.get(&entry.species) else {
            writeln!(out, "{name}: base stats unavailable")?;
            continue;
        };
        let stats = entry.stats(&info.base_stats);
        writeln!(out, "{name} (Lv. {})", entry.level)?;
        for stat in Stat::ALL {
            writeln!(out, "  {:<4}{:>4}", stat.abbrev(), stats.get(stat))?;
        }
        if entry.exceeds_ev_cap() {
            writeln!(out, "  EV total {} exceeds 508", entry.total_evs())?;
        }
    }
    Ok(out)
}

/// Runs the tera-captain toggle once for `name`.
pub fn tera_captain(name: &str, config: BuilderConfig) -> anyhow::Result<TeraCaptain> {
    let mut builder = TeamBuilder::new(StaticDex, config);
    Ok(builder.toggle_tera_captain(name)?)
}
