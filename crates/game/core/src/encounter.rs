//! Random encounter trigger.
//!
//! A frame is eligible only while the hero is trying to move. An eligible
//! frame draws once from `[0, odds)` and starts a battle when the draw hits
//! the trigger value, which with the default odds is roughly a 0.35% chance
//! per frame.
use crate::config::EncounterConfig;
use crate::env::RngOracle;
use crate::state::Velocity;

/// Stateless encounter check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterTrigger {
    config: EncounterConfig,
}

impl EncounterTrigger {
    pub fn new(config: EncounterConfig) -> Self {
        Self { config }
    }

    /// Decide whether this frame's movement starts an encounter.
    ///
    /// Draws from `rng` only when `movement` is non-zero on some axis.
    pub fn check_encounter<R>(&self, movement: Velocity, rng: &mut R) -> bool
    where
        R: RngOracle + ?Sized,
    {
        if !movement.is_moving() {
            return false;
        }
        rng.below(self.config.odds) == self.config.trigger_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn standing_still_never_draws() {
        let trigger = EncounterTrigger::default();
        let mut rng = ScriptedRng::new([1]);

        assert!(!trigger.check_encounter(Velocity::ZERO, &mut rng));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn fires_only_on_trigger_value() {
        let trigger = EncounterTrigger::default();
        let mut rng = ScriptedRng::new([0, 1, 2, 287]);
        let moving = Velocity::new(1, 0);

        let results: Vec<bool> = (0..4)
            .map(|_| trigger.check_encounter(moving, &mut rng))
            .collect();
        assert_eq!(results, vec![false, true, false, false]);
    }

    #[test]
    fn either_axis_is_eligible() {
        let trigger = EncounterTrigger::default();
        let mut rng = ScriptedRng::new([1]);

        assert!(trigger.check_encounter(Velocity::new(0, -1), &mut rng));
        assert!(trigger.check_encounter(Velocity::new(-1, 1), &mut rng));
    }

    #[test]
    fn honours_configured_odds() {
        let trigger = EncounterTrigger::new(EncounterConfig {
            odds: 2,
            trigger_value: 0,
        });
        let mut rng = ScriptedRng::new([4]);

        // 4 % 2 == 0
        assert!(trigger.check_encounter(Velocity::new(1, 1), &mut rng));
    }
}
