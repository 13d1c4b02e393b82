//! Attack reports and attack resolution.

use crate::env::RngOracle;
use crate::state::{Archetype, Unit};

use super::damage::{calculate_damage, mitigate_damage};
use super::hit::{check_critical, check_hit};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Attack hit the target.
    Hit,
    /// Hit with doubled power.
    Critical,
}

/// Everything the presentation needs to describe one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackReport {
    pub attacker: Archetype,
    pub defender: Archetype,
    /// Power the attack was made with, before crit and defense.
    pub power: u32,
    pub outcome: AttackOutcome,
    /// Health actually removed from the defender.
    pub damage: u32,
    /// Defender health after the attack.
    pub defender_health: u32,
}

impl AttackReport {
    pub fn is_hit(&self) -> bool {
        !matches!(self.outcome, AttackOutcome::Miss)
    }

    pub fn is_critical(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Critical)
    }

    /// True when this attack brought the defender to zero health.
    pub fn is_lethal(&self) -> bool {
        self.defender_health == 0
    }
}

/// Resolve one attack from `attacker` against `defender` with `power`.
///
/// # Sequence
///
/// 1. Percentile roll against the defender's dodge chance; a miss deals 0.
/// 2. On a hit, a second percentile roll against the attacker's crit chance.
/// 3. Defense of the defender (including any guard) reduces the damage;
///    a hit weaker than the defense still deals 1.
/// 4. Damage is removed from the defender's health, clamped at 0.
///
/// A miss consumes exactly one roll, a hit exactly two.
pub fn resolve_attack<R>(attacker: &Unit, defender: &mut Unit, power: u32, rng: &mut R) -> AttackReport
where
    R: RngOracle + ?Sized,
{
    let mut report = AttackReport {
        attacker: attacker.archetype(),
        defender: defender.archetype(),
        power,
        outcome: AttackOutcome::Miss,
        damage: 0,
        defender_health: defender.current_health(),
    };

    if !check_hit(defender.stats().dodge_chance, rng.roll_percent()) {
        return report;
    }

    let is_critical = check_critical(attacker.stats().crit_chance, rng.roll_percent());
    let damage = mitigate_damage(
        calculate_damage(power, is_critical),
        defender.current_defense(),
    );

    report.outcome = if is_critical {
        AttackOutcome::Critical
    } else {
        AttackOutcome::Hit
    };
    report.damage = defender.take_damage(damage);
    report.defender_health = defender.current_health();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use proptest::prelude::*;

    #[test]
    fn miss_deals_nothing_and_skips_crit_roll() {
        let hero = Unit::create(Archetype::Swordsman);
        let mut ghost = Unit::create(Archetype::Ghost);
        let mut rng = ScriptedRng::new([8]);

        let report = resolve_attack(&hero, &mut ghost, 6, &mut rng);

        assert_eq!(report.outcome, AttackOutcome::Miss);
        assert_eq!(report.damage, 0);
        assert_eq!(ghost.current_health(), 13);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn normal_hit_subtracts_defense() {
        let hero = Unit::create(Archetype::Swordsman);
        let mut jaskirat = Unit::create(Archetype::Jaskirat);
        let mut rng = ScriptedRng::new([50, 50]);

        let report = resolve_attack(&hero, &mut jaskirat, 6, &mut rng);

        assert_eq!(report.outcome, AttackOutcome::Hit);
        assert_eq!(report.damage, 5);
        assert_eq!(report.defender_health, 5);
        assert!(!report.is_lethal());
    }

    #[test]
    fn critical_doubles_before_defense() {
        let hero = Unit::create(Archetype::Swordsman);
        let mut slime = Unit::create(Archetype::Slime);
        let mut rng = ScriptedRng::new([50, 10]);

        let report = resolve_attack(&hero, &mut slime, 6, &mut rng);

        assert!(report.is_critical());
        assert_eq!(report.damage, 12 - 2);
        assert_eq!(slime.current_health(), 5);
    }

    #[test]
    fn jaskirat_always_crits() {
        let jaskirat = Unit::create(Archetype::Jaskirat);
        let mut archer = Unit::create(Archetype::Archer);
        let mut rng = ScriptedRng::new([99, 99]);

        let report = resolve_attack(&jaskirat, &mut archer, 1, &mut rng);

        assert!(report.is_critical());
        // 2 power against 3 defense still chips 1
        assert_eq!(report.damage, 1);
        assert_eq!(archer.current_health(), 15);
    }

    #[test]
    fn lethal_damage_is_clamped() {
        let ghost = Unit::create(Archetype::Ghost);
        let mut hero = Unit::create(Archetype::Archer);
        hero.take_damage(14);
        let mut rng = ScriptedRng::new([50, 50]);

        let report = resolve_attack(&ghost, &mut hero, 9, &mut rng);

        assert_eq!(report.damage, 2);
        assert_eq!(report.defender_health, 0);
        assert!(report.is_lethal());
    }

    fn any_archetype() -> impl Strategy<Value = Archetype> {
        prop::sample::select(Archetype::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn miss_iff_roll_below_dodge(
            attacker in any_archetype(),
            defender in any_archetype(),
            power in 0u32..30,
            hit_roll in 0u32..100,
            crit_roll in 0u32..100,
        ) {
            let attacker = Unit::create(attacker);
            let mut defender = Unit::create(defender);
            let before = defender.current_health();
            let mut rng = ScriptedRng::new([hit_roll, crit_roll]);

            let report = resolve_attack(&attacker, &mut defender, power, &mut rng);

            if hit_roll < defender.stats().dodge_chance {
                prop_assert_eq!(report.outcome, AttackOutcome::Miss);
                prop_assert_eq!(report.damage, 0);
                prop_assert_eq!(defender.current_health(), before);
            } else {
                prop_assert!(report.is_hit());
                let raw = if crit_roll <= attacker.stats().crit_chance { power * 2 } else { power };
                let defense = defender.current_defense();
                let mitigated = if raw < defense { 1 } else { raw - defense };
                let expected = mitigated.min(before);
                prop_assert_eq!(report.damage, expected);
                prop_assert_eq!(report.is_critical(), crit_roll <= attacker.stats().crit_chance);
            }
            prop_assert!(defender.current_health() <= defender.max_health());
        }
    }
}
