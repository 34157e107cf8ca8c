use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use team_builder_core::prelude::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn sample_entry() -> RosterEntry {
    let mut entry = RosterEntry::new("iron-valiant");
    entry.item = "booster-energy".to_string();
    entry.ability = "quark-drive".to_string();
    entry.nature = "naive".to_string();
    entry.tera_type = "fairy".to_string();
    entry.evs = [0, 4, 0, 252, 0, 252];
    entry.ivs = [31, 0, 31, 31, 31, 31];
    entry.level = 80;
    entry.moves = ["moonblast", "close-combat", "knock-off", "destiny-bond"].map(String::from);
    entry
}

#[test]
fn fixture_teams_parse_and_round_trip() -> Result<()> {
    let dir = fixtures_dir();
    let mut found = 0usize;
    for dir_entry in fs::read_dir(&dir)? {
        let path = dir_entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let text = fs::read_to_string(&path)?;
        let first = parse_showdown_team(&text, &StaticDex)?;
        assert!(!first.roster.is_empty(), "{}", path.display());
        assert!(first.warnings.is_empty(), "{}: {:?}", path.display(), first.warnings);
        for entry in &first.roster {
            assert_ne!(entry.id, 0, "{} unresolved in {}", entry.species, path.display());
            assert!(entry.resolved_nature().is_some(), "{}", entry.species);
        }

        let second = parse_showdown_team(&format_team(&first.roster), &StaticDex)?;
        assert_eq!(second.roster, first.roster, "{}", path.display());
        found += 1;
    }
    assert!(found > 0, "no fixtures found in {}", dir.display());
    Ok(())
}

#[test]
fn round_trip_resets_ivs_only() -> Result<()> {
    let original = sample_entry();
    let parsed = parse_entry(&format_entry(&original), &StaticDex)?;
    let mut reparsed = parsed.entry;

    // IVs are not part of the text format and always come back maxed.
    assert_eq!(reparsed.ivs, [31; 6]);
    assert_ne!(reparsed.ivs, original.ivs);

    // id and sprite come from the resolver, not the text.
    assert_eq!(reparsed.id, 1006);
    reparsed.ivs = original.ivs;
    reparsed.id = original.id;
    reparsed.sprite = original.sprite.clone();
    assert_eq!(reparsed, original);
    Ok(())
}

#[test]
fn sparse_moves_come_back_compacted() -> Result<()> {
    let mut original = sample_entry();
    original.moves[0].clear();
    original.moves[2].clear();
    let reparsed = parse_entry(&format_entry(&original), &StaticDex)?.entry;
    assert_eq!(reparsed.moves[0], "close-combat");
    assert_eq!(reparsed.moves[1], "destiny-bond");
    assert!(reparsed.moves[2].is_empty() && reparsed.moves[3].is_empty());

    original.compact_moves();
    assert_eq!(reparsed.moves, original.moves);
    Ok(())
}

#[test]
fn ev_totals_over_cap_are_accepted() -> Result<()> {
    let text = "\
Garchomp @ Life Orb
Ability: Rough Skin
EVs: 252 HP / 252 Atk / 252 Spe
Jolly Nature
- Earthquake
";
    let import = parse_showdown_team(text, &StaticDex)?;
    let entry = &import.roster.entries()[0];
    assert_eq!(entry.total_evs(), 756);
    assert!(entry.exceeds_ev_cap());
    assert!(format_team(&import.roster).contains("EVs: 252 HP / 252 Atk / 252 Spe\n"));
    Ok(())
}

#[test]
fn malformed_second_block_rejects_everything() {
    let text = "\
Garchomp @ Life Orb
Ability: Rough Skin
- Earthquake

Toxapex @ Black Sludge
EVs: 252 HP / 252 Def
Bold Nature
- Recover
";
    let err = parse_showdown_team(text, &StaticDex).unwrap_err();
    assert!(matches!(err, ParseError::MalformedHeader { entry: 2, .. }));
}

#[test]
fn stats_from_imported_entry() -> Result<()> {
    let text = "\
Garchomp @ Choice Scarf
Ability: Rough Skin
EVs: 252 Atk / 4 SpD / 252 Spe
Jolly Nature
- Earthquake
";
    let import = parse_showdown_team(text, &StaticDex)?;
    let entry = &import.roster.entries()[0];
    let base = StaticDex
        .get(&entry.species)
        .map(|info| info.base_stats)
        .expect("garchomp in dex");
    let stats = entry.stats(&base);
    assert_eq!(stats.hp, 357);
    assert_eq!(stats.atk, 359);
    assert_eq!(stats.def, 226);
    assert_eq!(stats.spa, 176);
    assert_eq!(stats.spd, 207);
    assert_eq!(stats.spe, 333);
    Ok(())
}
