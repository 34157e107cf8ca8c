use phf::phf_map;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

static NATURES: phf::Map<&'static str, Nature> = phf_map! {
    "hardy" => Nature::Hardy,
    "lonely" => Nature::Lonely,
    "brave" => Nature::Brave,
    "adamant" => Nature::Adamant,
    "naughty" => Nature::Naughty,
    "bold" => Nature::Bold,
    "docile" => Nature::Docile,
    "relaxed" => Nature::Relaxed,
    "impish" => Nature::Impish,
    "lax" => Nature::Lax,
    "timid" => Nature::Timid,
    "hasty" => Nature::Hasty,
    "serious" => Nature::Serious,
    "jolly" => Nature::Jolly,
    "naive" => Nature::Naive,
    "modest" => Nature::Modest,
    "mild" => Nature::Mild,
    "quiet" => Nature::Quiet,
    "bashful" => Nature::Bashful,
    "rash" => Nature::Rash,
    "calm" => Nature::Calm,
    "gentle" => Nature::Gentle,
    "sassy" => Nature::Sassy,
    "careful" => Nature::Careful,
    "quirky" => Nature::Quirky,
};

impl Nature {
    /// Looks a nature up by name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        NATURES.get(name.trim().to_ascii_lowercase().as_str()).copied()
    }

    /// The stat raised and the stat lowered, or `None` for the five neutral natures.
    pub fn effect(self) -> Option<(Stat, Stat)> {
        match self {
            Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky => {
                None
            }
            Nature::Lonely => Some((Stat::Atk, Stat::Def)),
            Nature::Brave => Some((Stat::Atk, Stat::Spe)),
            Nature::Adamant => Some((Stat::Atk, Stat::Spa)),
            Nature::Naughty => Some((Stat::Atk, Stat::Spd)),
            Nature::Bold => Some((Stat::Def, Stat::Atk)),
            Nature::Relaxed => Some((Stat::Def, Stat::Spe)),
            Nature::Impish => Some((Stat::Def, Stat::Spa)),
            Nature::Lax => Some((Stat::Def, Stat::Spd)),
            Nature::Timid => Some((Stat::Spe, Stat::Atk)),
            Nature::Hasty => Some((Stat::Spe, Stat::Def)),
            Nature::Jolly => Some((Stat::Spe, Stat::Spa)),
            Nature::Naive => Some((Stat::Spe, Stat::Spd)),
            Nature::Modest => Some((Stat::Spa, Stat::Atk)),
            Nature::Mild => Some((Stat::Spa, Stat::Def)),
            Nature::Quiet => Some((Stat::Spa, Stat::Spe)),
            Nature::Rash => Some((Stat::Spa, Stat::Spd)),
            Nature::Calm => Some((Stat::Spd, Stat::Atk)),
            Nature::Gentle => Some((Stat::Spd, Stat::Def)),
            Nature::Sassy => Some((Stat::Spd, Stat::Spe)),
            Nature::Careful => Some((Stat::Spd, Stat::Spa)),
        }
    }

    pub fn modifier(self, stat: Stat) -> NatureModifier {
        match self.effect() {
            Some((boosted, _)) if boosted == stat => NatureModifier::Boosted,
            Some((_, hindered)) if hindered == stat => NatureModifier::Hindered,
            _ => NatureModifier::Neutral,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    /// Tuple order used by IV/EV arrays and by the `EVs:` line.
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn abbrev(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Atk => "Atk",
            Stat::Def => "Def",
            Stat::Spa => "SpA",
            Stat::Spd => "SpD",
            Stat::Spe => "Spe",
        }
    }

    pub fn from_abbrev(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "hp" => Some(Stat::Hp),
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" => Some(Stat::Spa),
            "spd" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            _ => None,
        }
    }
}

/// Nature multiplier on a single stat: x0.9, x1.0 or x1.1.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum NatureModifier {
    Hindered,
    #[default]
    Neutral,
    Boosted,
}

impl NatureModifier {
    fn percent(self) -> u32 {
        match self {
            NatureModifier::Hindered => 90,
            NatureModifier::Neutral => 100,
            NatureModifier::Boosted => 110,
        }
    }
}

/// Modifier for `stat` under the named nature. Blank or unknown names are neutral.
pub fn nature_modifier(nature: &str, stat: Stat) -> NatureModifier {
    Nature::from_name(nature)
        .map(|n| n.modifier(stat))
        .unwrap_or_default()
}

fn core_term(base: u16, iv: u8, ev: u8, level: u8) -> u32 {
    let ev_quarter = (ev / 4) as u32;
    let base_value = base as u32 * 2 + iv as u32 + ev_quarter;
    (base_value * level as u32) / 100
}

pub fn calc_hp(base: u16, iv: u8, ev: u8, level: u8) -> u16 {
    (core_term(base, iv, ev, level) + level as u32 + 10) as u16
}

// Integer percent keeps (x * 1.1) and (x * 0.9) floored exactly like the game.
pub fn calc_stat(base: u16, iv: u8, ev: u8, level: u8, modifier: NatureModifier) -> u16 {
    let stat = core_term(base, iv, ev, level) + 5;
    (stat * modifier.percent() / 100) as u16
}

/// Final value of one stat. The modifier is ignored for HP. Inputs are not clamped.
pub fn compute_stat(
    base: u16,
    level: u8,
    iv: u8,
    ev: u8,
    modifier: NatureModifier,
    is_hp: bool,
) -> u16 {
    if is_hp {
        calc_hp(base, iv, ev, level)
    } else {
        calc_stat(base, iv, ev, level, modifier)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl BaseStats {
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatsSet {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl StatsSet {
    pub fn compute(base: &BaseStats, level: u8, ivs: [u8; 6], evs: [u8; 6], nature: &str) -> Self {
        let stat = |s: Stat| {
            compute_stat(
                base.get(s),
                level,
                ivs[s.index()],
                evs[s.index()],
                nature_modifier(nature, s),
                s == Stat::Hp,
            )
        };
        Self {
            hp: stat(Stat::Hp),
            atk: stat(Stat::Atk),
            def: stat(Stat::Def),
            spa: stat(Stat::Spa),
            spd: stat(Stat::Spd),
            spe: stat(Stat::Spe),
        }
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHARIZARD: BaseStats = BaseStats {
        hp: 78,
        atk: 84,
        def: 78,
        spa: 109,
        spd: 85,
        spe: 100,
    };

    #[test]
    fn max_invested_base_100() {
        assert_eq!(compute_stat(100, 100, 31, 252, NatureModifier::Neutral, false), 299);
        assert_eq!(compute_stat(100, 100, 31, 252, NatureModifier::Boosted, false), 328);
        assert_eq!(compute_stat(100, 100, 31, 252, NatureModifier::Hindered, false), 269);
    }

    #[test]
    fn hp_ignores_nature() {
        assert_eq!(compute_stat(100, 50, 31, 0, NatureModifier::Neutral, true), 175);
        assert_eq!(compute_stat(100, 50, 31, 0, NatureModifier::Boosted, true), 175);
        assert_eq!(compute_stat(100, 50, 31, 0, NatureModifier::Hindered, true), 175);
    }

    #[test]
    fn test_charizard_lv50_adamant() {
        let evs = [0, 252, 0, 0, 4, 252];
        let set = StatsSet::compute(&CHARIZARD, 50, [31; 6], evs, "adamant");
        assert_eq!(set.hp, 153);
        assert_eq!(set.atk, 149);
        assert_eq!(set.def, 98);
        assert_eq!(set.spa, 116);
        assert_eq!(set.spd, 106);
        assert_eq!(set.spe, 152);
    }

    #[test]
    fn unknown_nature_is_neutral() {
        let evs = [4, 252, 0, 0, 0, 252];
        let unknown = StatsSet::compute(&CHARIZARD, 100, [31; 6], evs, "grumpy");
        let blank = StatsSet::compute(&CHARIZARD, 100, [31; 6], evs, "");
        let hardy = StatsSet::compute(&CHARIZARD, 100, [31; 6], evs, "hardy");
        assert_eq!(unknown, hardy);
        assert_eq!(blank, hardy);
        assert_eq!(nature_modifier("grumpy", Stat::Atk), NatureModifier::Neutral);
    }

    #[test]
    fn test_nature_modifiers() {
        assert_eq!(nature_modifier("Adamant", Stat::Atk), NatureModifier::Boosted);
        assert_eq!(nature_modifier("adamant", Stat::Spa), NatureModifier::Hindered);
        assert_eq!(nature_modifier("adamant", Stat::Def), NatureModifier::Neutral);
    }

    #[test]
    fn every_non_neutral_nature_touches_two_distinct_stats() {
        let mut neutral = 0;
        for name in NATURES.keys() {
            let nature = Nature::from_name(name).expect("table key resolves");
            match nature.effect() {
                None => neutral += 1,
                Some((up, down)) => {
                    assert_ne!(up, down, "{name}");
                    assert_ne!(up, Stat::Hp);
                    assert_ne!(down, Stat::Hp);
                }
            }
        }
        assert_eq!(NATURES.len(), 25);
        assert_eq!(neutral, 5);
    }

    #[test]
    fn stat_abbreviations_are_case_insensitive() {
        assert_eq!(Stat::from_abbrev("SpA"), Some(Stat::Spa));
        assert_eq!(Stat::from_abbrev("spd"), Some(Stat::Spd));
        assert_eq!(Stat::from_abbrev("Spc"), None);
        for stat in Stat::ALL {
            assert_eq!(Stat::from_abbrev(stat.abbrev()), Some(stat));
        }
    }
}
