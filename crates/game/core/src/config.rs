//! Game configuration constants and tunable parameters.
use crate::error::ConfigurationError;
use crate::state::{Archetype, Position};

/// Top-level tunables for a game session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub encounter: EncounterConfig,
    pub field: FieldConfig,
    /// Candidate archetypes an encounter draws its enemy from, uniformly.
    pub enemy_roster: Vec<Archetype>,
}

impl GameConfig {
    // ===== frame pacing =====
    /// Upper bound on logical ticks per second.
    pub const MAX_TICK_RATE: u32 = 144;

    pub fn new() -> Self {
        Self {
            encounter: EncounterConfig::default(),
            field: FieldConfig::default(),
            enemy_roster: Archetype::ENEMIES.to_vec(),
        }
    }

    pub fn with_enemy_roster(roster: impl Into<Vec<Archetype>>) -> Self {
        Self {
            enemy_roster: roster.into(),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn encounter(mut self, encounter: EncounterConfig) -> Self {
        self.encounter = encounter;
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldConfig) -> Self {
        self.field = field;
        self
    }

    /// Rejects configurations a session cannot run with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.enemy_roster.is_empty() {
            return Err(ConfigurationError::EmptyEnemyRoster);
        }
        if self.encounter.odds == 0 {
            return Err(ConfigurationError::InvalidField {
                field: "encounter.odds",
            });
        }
        self.field.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Random encounter odds.
///
/// An eligible frame draws uniformly from `[0, odds)` and fires when the draw
/// equals `trigger_value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterConfig {
    pub odds: u32,
    pub trigger_value: u32,
}

impl EncounterConfig {
    pub const DEFAULT_ODDS: u32 = 288;
    pub const DEFAULT_TRIGGER_VALUE: u32 = 1;
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            odds: Self::DEFAULT_ODDS,
            trigger_value: Self::DEFAULT_TRIGGER_VALUE,
        }
    }
}

/// Overworld geometry in surface units.
///
/// The walkable area is the rectangle from `(0, top)` to `(width, height)`;
/// the hero sprite occupies `sprite_width x sprite_height` from its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldConfig {
    pub width: i32,
    pub height: i32,
    pub top: i32,
    pub sprite_width: i32,
    pub sprite_height: i32,
    pub spawn: Position,
}

impl FieldConfig {
    pub const DEFAULT_WIDTH: i32 = 500;
    pub const DEFAULT_HEIGHT: i32 = 400;
    pub const DEFAULT_TOP: i32 = 80;
    pub const DEFAULT_SPRITE: i32 = 32;
    pub const DEFAULT_SPAWN: Position = Position { x: 15, y: 100 };

    /// True when a sprite at `position` lies fully inside the walkable area.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= self.top
            && position.x + self.sprite_width <= self.width
            && position.y + self.sprite_height <= self.height
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if self.sprite_width <= 0 || self.sprite_height <= 0 {
            return Err(ConfigurationError::InvalidField {
                field: "field.sprite",
            });
        }
        if !self.contains(self.spawn) {
            return Err(ConfigurationError::InvalidField {
                field: "field.spawn",
            });
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            top: Self::DEFAULT_TOP,
            sprite_width: Self::DEFAULT_SPRITE,
            sprite_height: Self::DEFAULT_SPRITE,
            spawn: Self::DEFAULT_SPAWN,
        }
    }
}
