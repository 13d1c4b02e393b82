//! Turn-based battle engine.
//!
//! A [`Battle`] owns the enemy for the length of one encounter and borrows the
//! hero for each submitted action, so the hero's health and action points
//! carry over between battles while the enemy is discarded afterwards.
//!
//! The hero always acts first. If the enemy survives an attack or a defend,
//! it counters immediately with its own attack power. Fleeing ends the battle
//! without a counter.
mod action;
mod errors;
mod events;
mod phase;

pub use action::PlayerAction;
pub use errors::ActionError;
pub use events::{BattleEvent, MAX_TURN_EVENTS, TurnReport};
pub use phase::{BattleOutcome, BattlePhase};

pub use crate::state::AttackSlot;

use crate::combat::{AttackReport, resolve_attack};
use crate::env::RngOracle;
use crate::state::{Archetype, Unit};

/// Which side struck last; decides where `CheckOutcome` goes next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Striker {
    Hero,
    Enemy,
}

/// One encounter between the hero and a freshly created enemy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battle {
    hero: Archetype,
    enemy: Unit,
    phase: BattlePhase,
    turns: u32,
    last_striker: Striker,
    guarding: bool,
    last_attack: Option<AttackReport>,
}

impl Battle {
    /// Bind the combatants and wait for the first action.
    pub fn commence(enemy: Unit, hero: &Unit) -> Self {
        Self {
            hero: hero.archetype(),
            enemy,
            phase: BattlePhase::AwaitingAction,
            turns: 0,
            last_striker: Striker::Hero,
            guarding: false,
            last_attack: None,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn enemy(&self) -> &Unit {
        &self.enemy
    }

    /// Archetype of the hero this battle was commenced with.
    pub fn hero_archetype(&self) -> Archetype {
        self.hero
    }

    /// Number of accepted player actions so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn last_attack(&self) -> Option<&AttackReport> {
        self.last_attack.as_ref()
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.phase.outcome()
    }

    /// Check whether `action` would be accepted right now.
    pub fn validate(&self, hero: &Unit, action: PlayerAction) -> Result<(), ActionError> {
        if self.phase != BattlePhase::AwaitingAction {
            return Err(ActionError::NotAwaitingAction { phase: self.phase });
        }

        if let Some(slot) = action.attack_slot() {
            if hero.attack_power(slot).is_none() {
                return Err(ActionError::MissingAttack { slot });
            }
            if hero.remaining_points(slot) == 0 {
                return Err(ActionError::PointsExhausted { slot });
            }
        }

        Ok(())
    }

    /// Resolve a player action and, if the enemy survives, its counter.
    ///
    /// Runs the state machine until it is waiting for input again or the
    /// battle has concluded. A rejected action returns an error and changes
    /// nothing.
    pub fn submit<R>(
        &mut self,
        hero: &mut Unit,
        action: PlayerAction,
        rng: &mut R,
    ) -> Result<TurnReport, ActionError>
    where
        R: RngOracle + ?Sized,
    {
        self.validate(hero, action)?;

        self.turns += 1;
        let mut report = TurnReport::new(self.turns, action);
        self.phase = BattlePhase::ResolvingPlayerAction(action);

        loop {
            self.phase = self.step(hero, rng, &mut report);
            match self.phase {
                BattlePhase::AwaitingAction => break,
                BattlePhase::Concluded(outcome) => {
                    report.record(BattleEvent::Concluded {
                        outcome,
                        winner: self.winner(outcome),
                    });
                    break;
                }
                _ => {}
            }
        }

        Ok(report)
    }

    fn step<R>(&mut self, hero: &mut Unit, rng: &mut R, report: &mut TurnReport) -> BattlePhase
    where
        R: RngOracle + ?Sized,
    {
        match self.phase {
            BattlePhase::ResolvingPlayerAction(PlayerAction::Flee) => {
                report.record(BattleEvent::Fled);
                BattlePhase::Concluded(BattleOutcome::Fled)
            }
            BattlePhase::ResolvingPlayerAction(PlayerAction::Defend) => {
                let bonus = hero.raise_guard();
                self.guarding = true;
                report.record(BattleEvent::Guarded { bonus });
                BattlePhase::ResolvingEnemyCounter
            }
            BattlePhase::ResolvingPlayerAction(attack) => {
                let Some((slot, power)) = attack
                    .attack_slot()
                    .and_then(|slot| hero.attack_power(slot).map(|power| (slot, power)))
                else {
                    return BattlePhase::AwaitingAction;
                };
                hero.spend_point(slot);
                let strike = resolve_attack(hero, &mut self.enemy, power, rng);
                self.note_attack(strike, Striker::Hero, report);
                BattlePhase::CheckOutcome
            }
            BattlePhase::ResolvingEnemyCounter => {
                let power = self.enemy.stats().attack;
                let strike = resolve_attack(&self.enemy, hero, power, rng);
                self.note_attack(strike, Striker::Enemy, report);
                if self.guarding {
                    hero.lower_guard();
                    self.guarding = false;
                    report.record(BattleEvent::GuardLowered);
                }
                BattlePhase::CheckOutcome
            }
            BattlePhase::CheckOutcome => {
                if self.enemy.is_defeated() {
                    BattlePhase::Concluded(BattleOutcome::Won)
                } else if hero.is_defeated() {
                    BattlePhase::Concluded(BattleOutcome::Lost)
                } else if self.last_striker == Striker::Hero {
                    BattlePhase::ResolvingEnemyCounter
                } else {
                    BattlePhase::AwaitingAction
                }
            }
            phase @ (BattlePhase::AwaitingAction | BattlePhase::Concluded(_)) => phase,
        }
    }

    fn note_attack(&mut self, strike: AttackReport, striker: Striker, report: &mut TurnReport) {
        self.last_striker = striker;
        self.last_attack = Some(strike);
        report.record(BattleEvent::Attack(strike));
    }

    fn winner(&self, outcome: BattleOutcome) -> Option<Archetype> {
        match outcome {
            BattleOutcome::Won => Some(self.hero),
            BattleOutcome::Lost => Some(self.enemy.archetype()),
            BattleOutcome::Fled => None,
        }
    }
}
