//! Runtime combatant built from an archetype.
use crate::error::ConfigurationError;

use super::archetype::{Archetype, ArchetypeStats, HeroKit};
use super::common::ResourceMeter;

/// Which hero attack an action uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackSlot {
    Primary,
    Secondary,
}

/// Per-attack consumable counters carried by heroes.
///
/// Never replenished within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionPoints {
    pub primary: ResourceMeter,
    pub secondary: ResourceMeter,
}

impl ActionPoints {
    fn from_kit(kit: &HeroKit) -> Self {
        Self {
            primary: ResourceMeter::full(kit.primary_points),
            secondary: ResourceMeter::full(kit.secondary_points),
        }
    }

    pub fn slot(&self, slot: AttackSlot) -> ResourceMeter {
        match slot {
            AttackSlot::Primary => self.primary,
            AttackSlot::Secondary => self.secondary,
        }
    }

    fn slot_mut(&mut self, slot: AttackSlot) -> &mut ResourceMeter {
        match slot {
            AttackSlot::Primary => &mut self.primary,
            AttackSlot::Secondary => &mut self.secondary,
        }
    }
}

/// A hero or enemy combatant.
///
/// Base stats come from the archetype table and never change. Health stays
/// within `[0, max_health]`; the guard bonus raises defense while a hero
/// defends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    archetype: Archetype,
    health: ResourceMeter,
    points: Option<ActionPoints>,
    guard: u32,
}

impl Unit {
    /// Build a unit at full health and full action points.
    pub fn create(archetype: Archetype) -> Self {
        let stats = archetype.stats();
        Self {
            archetype,
            health: ResourceMeter::full(stats.max_health),
            points: stats.hero.as_ref().map(ActionPoints::from_kit),
            guard: 0,
        }
    }

    /// Build a unit from its textual tag.
    pub fn from_tag(tag: &str) -> Result<Self, ConfigurationError> {
        Archetype::from_tag(tag).map(Self::create)
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    pub fn name(&self) -> &'static str {
        self.archetype.tag()
    }

    pub fn stats(&self) -> &'static ArchetypeStats {
        self.archetype.stats()
    }

    pub fn is_hero(&self) -> bool {
        self.points.is_some()
    }

    pub fn health(&self) -> ResourceMeter {
        self.health
    }

    pub fn current_health(&self) -> u32 {
        self.health.current
    }

    pub fn max_health(&self) -> u32 {
        self.health.maximum
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_empty()
    }

    /// Action points, or `None` for enemies.
    pub fn points(&self) -> Option<&ActionPoints> {
        self.points.as_ref()
    }

    /// Remaining points for `slot`; zero for units without a hero kit.
    pub fn remaining_points(&self, slot: AttackSlot) -> u32 {
        self.points.map_or(0, |points| points.slot(slot).current)
    }

    /// Base defense plus any active guard bonus.
    pub fn current_defense(&self) -> u32 {
        self.stats().defense + self.guard
    }

    pub fn is_guarding(&self) -> bool {
        self.guard > 0
    }

    /// Attack power for `slot`, or `None` if the unit lacks that attack.
    pub fn attack_power(&self, slot: AttackSlot) -> Option<u32> {
        let stats = self.stats();
        match slot {
            AttackSlot::Primary => Some(stats.attack),
            AttackSlot::Secondary => stats.hero.map(|kit| kit.secondary_attack),
        }
    }

    /// Subtracts `amount` from health, clamping at zero. Returns the amount removed.
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        self.health.deplete(amount)
    }

    /// Consumes one point from `slot`. Returns `false` and leaves the unit
    /// unchanged if no point is available.
    pub(crate) fn spend_point(&mut self, slot: AttackSlot) -> bool {
        let Some(points) = self.points.as_mut() else {
            return false;
        };
        points.slot_mut(slot).deplete(1) == 1
    }

    /// Applies the hero's defend bonus. Returns the bonus applied.
    pub(crate) fn raise_guard(&mut self) -> u32 {
        let bonus = self.stats().hero.map_or(0, |kit| kit.defense_bonus);
        self.guard = bonus;
        bonus
    }

    pub(crate) fn lower_guard(&mut self) {
        self.guard = 0;
    }
}
