use crate::entry::{RosterEntry, MAX_EV, MOVE_SLOTS};
use crate::error::{ImportWarning, LookupError, ParseError};
use crate::ident::normalize_id;
use crate::roster::Roster;
use crate::species::SpeciesResolver;
use crate::stats::Stat;

/// Result of a successful team import.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Import {
    pub roster: Roster,
    pub warnings: Vec<ImportWarning>,
}

/// One parsed block plus a species lookup failure, if there was one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedEntry {
    pub entry: RosterEntry,
    pub lookup_error: Option<LookupError>,
}

/// Parses a Showdown export. Blocks are separated by a blank line; any
/// malformed block rejects the whole text.
pub fn parse_showdown_team(text: &str, resolver: &impl SpeciesResolver) -> Result<Import, ParseError> {
    let normalized = text.replace("\r\n", "\n");
    let mut import = Import::default();
    for (idx, chunk) in split_blocks(&normalized).iter().enumerate() {
        let parsed = parse_entry(chunk, resolver).map_err(|e| e.at_entry(idx + 1))?;
        if let Some(source) = parsed.lookup_error {
            tracing::warn!(entry = idx + 1, species = %parsed.entry.species, error = %source, "species lookup failed");
            import.warnings.push(ImportWarning::SpeciesLookupFailure {
                entry: idx + 1,
                species: parsed.entry.species.clone(),
                source,
            });
        }
        import.roster.push(parsed.entry);
    }
    tracing::debug!(
        entries = import.roster.len(),
        warnings = import.warnings.len(),
        "parsed showdown team"
    );
    Ok(import)
}

/// Groups lines into entry blocks. A line holding only whitespace counts as
/// a separator, the same as an empty one.
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

/// Parses one block: a `Name @ Item` header, an `Ability:` line, then
/// optional lines in any order.
pub fn parse_entry(block: &str, resolver: &impl SpeciesResolver) -> Result<ParsedEntry, ParseError> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(ParseError::header(format!(
            "expected at least 2 lines, found {}",
            lines.len()
        )));
    }

    let (name, item) = lines[0]
        .split_once('@')
        .ok_or_else(|| ParseError::header(format!("'{}' has no '@'", lines[0])))?;
    let species = normalize_id(name);
    if species.is_empty() {
        return Err(ParseError::header("species name is empty"));
    }
    let ability = parse_ability(lines[1])
        .ok_or_else(|| ParseError::header(format!("expected 'Ability:' line, found '{}'", lines[1])))?;

    let mut entry = RosterEntry::new(species);
    entry.item = normalize_id(item);
    entry.ability = normalize_id(ability);

    for line in &lines[2..] {
        if let Some(rest) = strip_prefix_ci(line, "EVs:") {
            parse_stat_line(rest, &mut entry.evs);
            continue;
        }
        if let Some(rest) = strip_prefix_ci(line, "Tera Type:") {
            entry.tera_type = normalize_id(rest);
            continue;
        }
        if let Some(rest) = strip_prefix_ci(line, "Level:") {
            if let Ok(level) = rest.trim().parse::<i64>() {
                entry.level = RosterEntry::clamp_level(level);
            }
            continue;
        }
        if let Some(rest) = line.strip_prefix('-') {
            push_move(&mut entry.moves, rest);
            continue;
        }
        if let Some(nature) = parse_nature_line(line) {
            entry.nature = normalize_id(nature);
        }
    }

    let lookup_error = match resolver.resolve(&entry.species) {
        Ok(found) => {
            entry.id = found.id;
            entry.sprite = found.sprite.to_lowercase();
            None
        }
        Err(err) => Some(err),
    };
    Ok(ParsedEntry { entry, lookup_error })
}

fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &line[prefix.len()..])
}

fn parse_ability(line: &str) -> Option<&str> {
    let (key, value) = line.split_once(':')?;
    key.trim().eq_ignore_ascii_case("ability").then_some(value)
}

// `Adamant Nature` -> `Adamant`
fn parse_nature_line(line: &str) -> Option<&str> {
    let mut words = line.split_whitespace();
    let last = words.next_back()?;
    if !last.eq_ignore_ascii_case("nature") {
        return None;
    }
    words.next()
}

fn push_move(moves: &mut [String; MOVE_SLOTS], raw: &str) {
    let name = normalize_id(raw);
    if name.is_empty() {
        return;
    }
    if let Some(slot) = moves.iter_mut().find(|slot| slot.is_empty()) {
        *slot = name;
    }
}

fn parse_stat_line(line: &str, stats: &mut [u8; 6]) {
    for part in line.split('/') {
        let mut iter = part.split_whitespace();
        let (Some(value_str), Some(stat_name)) = (iter.next(), iter.next()) else {
            continue;
        };
        let Ok(value) = value_str.parse::<u32>() else {
            continue;
        };
        if let Some(stat) = Stat::from_abbrev(stat_name) {
            stats[stat.index()] = value.min(MAX_EV as u32) as u8;
        }
    }
}
