//! Archetype table: the fixed base stats every unit is built from.
use crate::error::ConfigurationError;

/// Named combatant template.
///
/// Tags parse case-insensitively from their snake_case names
/// (`"slime"`, `"Archer"`, ...).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Archetype {
    Slime,
    Ghost,
    Jaskirat,
    Swordsman,
    Archer,
}

impl Archetype {
    pub const ALL: [Self; 5] = [
        Self::Slime,
        Self::Ghost,
        Self::Jaskirat,
        Self::Swordsman,
        Self::Archer,
    ];

    /// Default encounter roster.
    pub const ENEMIES: [Self; 3] = [Self::Slime, Self::Ghost, Self::Jaskirat];

    /// Archetypes offered at character selection.
    pub const HEROES: [Self; 2] = [Self::Swordsman, Self::Archer];

    /// Parse an archetype tag.
    ///
    /// An unknown tag is a configuration error.
    pub fn from_tag(tag: &str) -> Result<Self, ConfigurationError> {
        tag.trim()
            .parse()
            .map_err(|_| ConfigurationError::UnknownArchetype(tag.to_string()))
    }

    /// Lowercase tag, e.g. `"jaskirat"`.
    pub fn tag(self) -> &'static str {
        self.into()
    }

    pub fn is_hero(self) -> bool {
        self.stats().hero.is_some()
    }

    pub fn stats(self) -> &'static ArchetypeStats {
        match self {
            Self::Slime => &SLIME,
            Self::Ghost => &GHOST,
            Self::Jaskirat => &JASKIRAT,
            Self::Swordsman => &SWORDSMAN,
            Self::Archer => &ARCHER,
        }
    }
}

/// Immutable base stats of an archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeStats {
    pub max_health: u32,
    /// Primary attack power. Enemies always counter with this.
    pub attack: u32,
    pub defense: u32,
    /// Carried for completeness; turn order does not consult it.
    pub speed: u32,
    /// Percent chance (0-100) that an incoming attack misses.
    pub dodge_chance: u32,
    /// Percent chance that a landed hit doubles its power. May exceed 100.
    pub crit_chance: u32,
    /// Unused; -1 means disabled.
    pub line_up_chance: i32,
    /// Present on player-selectable archetypes only.
    pub hero: Option<HeroKit>,
}

/// Extra stats only heroes carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroKit {
    pub secondary_attack: u32,
    pub primary_points: u32,
    pub secondary_points: u32,
    /// Defense added while defending, for exactly one incoming attack.
    pub defense_bonus: u32,
}

const SLIME: ArchetypeStats = ArchetypeStats {
    max_health: 15,
    attack: 5,
    defense: 2,
    speed: 9,
    dodge_chance: 1,
    crit_chance: 1,
    line_up_chance: -1,
    hero: None,
};

const GHOST: ArchetypeStats = ArchetypeStats {
    max_health: 13,
    attack: 9,
    defense: 1,
    speed: 9,
    dodge_chance: 9,
    crit_chance: 4,
    line_up_chance: -1,
    hero: None,
};

const JASKIRAT: ArchetypeStats = ArchetypeStats {
    max_health: 10,
    attack: 1,
    defense: 1,
    speed: 0,
    dodge_chance: 0,
    crit_chance: 100,
    line_up_chance: -1,
    hero: None,
};

const SWORDSMAN: ArchetypeStats = ArchetypeStats {
    max_health: 20,
    attack: 6,
    defense: 4,
    speed: 5,
    dodge_chance: 5,
    crit_chance: 10,
    line_up_chance: -1,
    hero: Some(HeroKit {
        secondary_attack: 8,
        primary_points: 15,
        secondary_points: 7,
        defense_bonus: 5,
    }),
};

const ARCHER: ArchetypeStats = ArchetypeStats {
    max_health: 16,
    attack: 4,
    defense: 3,
    speed: 9,
    dodge_chance: 9,
    crit_chance: 7,
    line_up_chance: 20,
    hero: Some(HeroKit {
        secondary_attack: 11,
        primary_points: 18,
        secondary_points: 5,
        defense_bonus: 3,
    }),
};
