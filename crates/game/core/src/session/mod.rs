//! Top-level game session state machine.
//!
//! ```text
//! Exploring ──(encounter)──▶ InBattle ──(won / fled)──▶ Exploring
//!     │                          │
//!     └──────(hero at 0)─────────┴──────▶ GameOver (terminal)
//! ```
//!
//! The session is the sole owner of the hero. During a battle it lends the
//! hero to [`Battle::submit`] one action at a time. Exploration and battle are
//! mutually exclusive by construction: input for the inactive mode is ignored.
mod overworld;

pub use overworld::{Direction, Overworld};

use crate::battle::{ActionError, Battle, BattleOutcome, BattlePhase, PlayerAction, TurnReport};
use crate::combat::AttackReport;
use crate::config::GameConfig;
use crate::encounter::EncounterTrigger;
use crate::env::RngOracle;
use crate::error::ConfigurationError;
use crate::state::{Archetype, Position, Unit, Velocity};

/// Which part of the game is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameMode {
    Exploring,
    InBattle,
    GameOver,
}

/// What a single frame tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickOutcome {
    /// Exploration advanced; `moved` is false when standing still or blocked.
    Explored { moved: bool },
    /// An encounter fired and a battle against `enemy` began.
    EncounterStarted { enemy: Archetype },
    /// A battle is waiting for the player's action.
    AwaitingAction,
    /// The hero is down; this tick entered the terminal state.
    GameOver,
    /// The session had already ended.
    Halted,
}

/// Owns every piece of mutable game state for one play-through.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSession {
    config: GameConfig,
    encounter: EncounterTrigger,
    hero: Unit,
    overworld: Overworld,
    battle: Option<Battle>,
    mode: GameMode,
    frame: u64,
    encounters: u32,
    last_attack: Option<AttackReport>,
    last_outcome: Option<BattleOutcome>,
}

impl GameSession {
    /// Start a session with the chosen hero, exploring at the spawn point.
    pub fn new(hero: Archetype, config: GameConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        if !hero.is_hero() {
            return Err(ConfigurationError::NotAHero(hero));
        }

        Ok(Self {
            encounter: EncounterTrigger::new(config.encounter),
            hero: Unit::create(hero),
            overworld: Overworld::new(config.field),
            battle: None,
            mode: GameMode::Exploring,
            frame: 0,
            encounters: 0,
            last_attack: None,
            last_outcome: None,
            config,
        })
    }

    /// Start a session from a hero tag such as `"archer"`.
    pub fn from_tag(hero: &str, config: GameConfig) -> Result<Self, ConfigurationError> {
        Self::new(Archetype::from_tag(hero)?, config)
    }

    /// Advance one logical frame.
    ///
    /// While exploring this moves the hero, then asks the encounter trigger
    /// whether the attempted movement starts a battle. Battles only advance on
    /// player actions, so a tick in battle just reports that it is waiting.
    pub fn on_frame_tick<R>(&mut self, rng: &mut R) -> TickOutcome
    where
        R: RngOracle + ?Sized,
    {
        if self.mode == GameMode::GameOver {
            return TickOutcome::Halted;
        }
        self.frame += 1;

        let outcome = match self.mode {
            GameMode::Exploring => self.explore(rng),
            _ => TickOutcome::AwaitingAction,
        };

        if self.hero.is_defeated() {
            self.enter_game_over();
            return TickOutcome::GameOver;
        }
        outcome
    }

    /// Set or clear one axis of the hero's movement intent.
    ///
    /// Only honoured while exploring. Returns whether the input was applied.
    pub fn on_move_input(&mut self, direction: Direction, pressed: bool) -> bool {
        if self.mode != GameMode::Exploring {
            return false;
        }
        self.overworld.set_intent(direction, pressed);
        true
    }

    /// Submit a battle action.
    ///
    /// Errors mean the action was ignored and nothing changed. When the action
    /// ends the battle the session moves back to exploring (won, fled) or to
    /// game over (lost).
    pub fn on_player_action<R>(
        &mut self,
        action: PlayerAction,
        rng: &mut R,
    ) -> Result<TurnReport, ActionError>
    where
        R: RngOracle + ?Sized,
    {
        let mode = self.mode;
        let Some(battle) = self.battle.as_mut().filter(|_| mode == GameMode::InBattle) else {
            return Err(ActionError::NotInBattle { mode });
        };

        let report = battle.submit(&mut self.hero, action, rng)?;
        if let Some(strike) = report.attacks().last() {
            self.last_attack = Some(*strike);
        }
        if let Some(outcome) = report.outcome() {
            self.conclude_battle(outcome);
        }
        Ok(report)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_over(&self) -> bool {
        self.mode == GameMode::GameOver
    }

    pub fn hero(&self) -> &Unit {
        &self.hero
    }

    /// The current enemy, while a battle is in progress.
    pub fn enemy(&self) -> Option<&Unit> {
        self.battle.as_ref().map(Battle::enemy)
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    pub fn battle_phase(&self) -> Option<BattlePhase> {
        self.battle.as_ref().map(Battle::phase)
    }

    /// Most recent attack of the current or previous battle.
    pub fn last_attack(&self) -> Option<&AttackReport> {
        self.last_attack.as_ref()
    }

    /// How the most recently finished battle ended.
    pub fn last_outcome(&self) -> Option<BattleOutcome> {
        self.last_outcome
    }

    pub fn position(&self) -> Position {
        self.overworld.position()
    }

    pub fn velocity(&self) -> Velocity {
        self.overworld.velocity()
    }

    pub fn overworld(&self) -> &Overworld {
        &self.overworld
    }

    /// Frames ticked so far, excluding ticks after game over.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Battles started so far.
    pub fn encounters(&self) -> u32 {
        self.encounters
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn explore<R>(&mut self, rng: &mut R) -> TickOutcome
    where
        R: RngOracle + ?Sized,
    {
        let moved = self.overworld.step();
        if !self
            .encounter
            .check_encounter(self.overworld.velocity(), rng)
        {
            return TickOutcome::Explored { moved };
        }

        let enemy = self.pick_enemy(rng);
        self.battle = Some(Battle::commence(Unit::create(enemy), &self.hero));
        self.overworld.halt();
        self.mode = GameMode::InBattle;
        self.encounters += 1;
        TickOutcome::EncounterStarted { enemy }
    }

    fn pick_enemy<R>(&self, rng: &mut R) -> Archetype
    where
        R: RngOracle + ?Sized,
    {
        let roster = &self.config.enemy_roster;
        let index = rng.below(roster.len() as u32) as usize;
        // Roster emptiness is rejected at construction.
        roster.get(index).copied().unwrap_or(Archetype::Slime)
    }

    fn conclude_battle(&mut self, outcome: BattleOutcome) {
        self.battle = None;
        self.last_outcome = Some(outcome);
        if outcome.returns_to_exploring() && !self.hero.is_defeated() {
            self.mode = GameMode::Exploring;
        } else {
            self.enter_game_over();
        }
    }

    fn enter_game_over(&mut self) {
        self.battle = None;
        self.overworld.halt();
        self.mode = GameMode::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::BattleEvent;
    use crate::env::ScriptedRng;
    use crate::state::AttackSlot;

    fn session(hero: Archetype) -> GameSession {
        GameSession::new(hero, GameConfig::default()).unwrap()
    }

    /// Drives the session into a battle against `enemy`.
    fn encounter(session: &mut GameSession, enemy: Archetype) {
        let index = session
            .config()
            .enemy_roster
            .iter()
            .position(|&a| a == enemy)
            .unwrap() as u32;
        session.on_move_input(Direction::Right, true);
        let mut rng = ScriptedRng::new([1, index]);
        assert_eq!(
            session.on_frame_tick(&mut rng),
            TickOutcome::EncounterStarted { enemy }
        );
    }

    #[test]
    fn new_session_explores_at_spawn() {
        let session = session(Archetype::Swordsman);
        assert_eq!(session.mode(), GameMode::Exploring);
        assert_eq!(session.position(), Position::new(15, 100));
        assert_eq!(session.hero().current_health(), 20);
        assert!(session.enemy().is_none());
        assert!(session.last_attack().is_none());
    }

    #[test]
    fn enemy_cannot_be_hero() {
        let result = GameSession::new(Archetype::Ghost, GameConfig::default());
        assert!(matches!(
            result,
            Err(ConfigurationError::NotAHero(Archetype::Ghost))
        ));
        assert!(matches!(
            GameSession::from_tag("mage", GameConfig::default()),
            Err(ConfigurationError::UnknownArchetype(_))
        ));
    }

    #[test]
    fn idle_frames_do_not_roll_for_encounters() {
        let mut session = session(Archetype::Archer);
        let mut rng = ScriptedRng::new([1]);

        for _ in 0..10 {
            assert_eq!(
                session.on_frame_tick(&mut rng),
                TickOutcome::Explored { moved: false }
            );
        }
        assert_eq!(rng.draws(), 0);
        assert_eq!(session.frame(), 10);
    }

    #[test]
    fn moving_frames_roll_and_move() {
        let mut session = session(Archetype::Archer);
        session.on_move_input(Direction::Down, true);
        let mut rng = ScriptedRng::new([0]);

        assert_eq!(
            session.on_frame_tick(&mut rng),
            TickOutcome::Explored { moved: true }
        );
        assert_eq!(session.position(), Position::new(15, 101));
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn encounter_starts_battle_and_halts_hero() {
        let mut session = session(Archetype::Swordsman);
        encounter(&mut session, Archetype::Jaskirat);

        assert_eq!(session.mode(), GameMode::InBattle);
        assert_eq!(session.velocity(), Velocity::ZERO);
        assert_eq!(session.enemy().map(Unit::archetype), Some(Archetype::Jaskirat));
        assert_eq!(session.battle_phase(), Some(BattlePhase::AwaitingAction));
        assert_eq!(session.encounters(), 1);

        // Exploration is frozen while the battle waits
        assert!(!session.on_move_input(Direction::Left, true));
        let mut rng = ScriptedRng::new([1]);
        assert_eq!(session.on_frame_tick(&mut rng), TickOutcome::AwaitingAction);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn actions_outside_battle_are_rejected() {
        let mut session = session(Archetype::Swordsman);
        let mut rng = ScriptedRng::new([50]);

        assert_eq!(
            session.on_player_action(PlayerAction::PrimaryAttack, &mut rng),
            Err(ActionError::NotInBattle {
                mode: GameMode::Exploring
            })
        );
        assert_eq!(
            session.hero().remaining_points(AttackSlot::Primary),
            15
        );
    }

    #[test]
    fn winning_returns_to_exploring_with_damage_carried() {
        let mut session = session(Archetype::Swordsman);
        encounter(&mut session, Archetype::Jaskirat);
        let mut rng = ScriptedRng::new([50]);

        // hit 5, counter crit chip 1, hit 5 -> won
        session
            .on_player_action(PlayerAction::PrimaryAttack, &mut rng)
            .unwrap();
        let report = session
            .on_player_action(PlayerAction::PrimaryAttack, &mut rng)
            .unwrap();

        assert_eq!(report.outcome(), Some(BattleOutcome::Won));
        assert_eq!(session.mode(), GameMode::Exploring);
        assert_eq!(session.last_outcome(), Some(BattleOutcome::Won));
        assert!(session.enemy().is_none());
        assert_eq!(session.hero().current_health(), 19);
        assert_eq!(session.last_attack().map(|a| a.defender_health), Some(0));

        // Points persist into the next battle
        encounter(&mut session, Archetype::Slime);
        assert_eq!(
            session.hero().remaining_points(AttackSlot::Primary),
            13
        );
        assert_eq!(session.hero().current_health(), 19);
    }

    #[test]
    fn fleeing_keeps_health_and_resumes_exploring() {
        let mut session = session(Archetype::Archer);
        encounter(&mut session, Archetype::Ghost);
        let mut rng = ScriptedRng::new([50]);

        let report = session
            .on_player_action(PlayerAction::Flee, &mut rng)
            .unwrap();

        assert_eq!(report.events()[0], BattleEvent::Fled);
        assert_eq!(session.mode(), GameMode::Exploring);
        assert_eq!(session.hero().current_health(), 16);
        assert!(session.on_move_input(Direction::Up, true));
    }

    #[test]
    fn losing_ends_the_session_and_rejects_input() {
        let mut session = session(Archetype::Archer);
        encounter(&mut session, Archetype::Ghost);
        // Counters alternate: a miss (0 < dodge 9), then a crit hit for 12
        let mut rng = ScriptedRng::new([0, 50, 0]);

        let mut last = None;
        for _ in 0..10 {
            match session.on_player_action(PlayerAction::Defend, &mut rng) {
                Ok(report) => last = report.outcome(),
                Err(_) => break,
            }
        }

        assert_eq!(last, Some(BattleOutcome::Lost));
        assert_eq!(session.mode(), GameMode::GameOver);
        assert_eq!(session.hero().current_health(), 0);
        assert!(session.enemy().is_none());

        let frame = session.frame();
        let mut rng = ScriptedRng::new([1]);
        assert_eq!(session.on_frame_tick(&mut rng), TickOutcome::Halted);
        assert_eq!(session.frame(), frame);
        assert!(!session.on_move_input(Direction::Down, true));
        assert_eq!(
            session.on_player_action(PlayerAction::Flee, &mut rng),
            Err(ActionError::NotInBattle {
                mode: GameMode::GameOver
            })
        );
    }

    #[test]
    fn roster_override_picks_from_configured_list() {
        let config = GameConfig::with_enemy_roster(vec![Archetype::Ghost]);
        let mut session = GameSession::new(Archetype::Swordsman, config).unwrap();
        session.on_move_input(Direction::Left, true);
        let mut rng = ScriptedRng::new([1, 7]);

        assert_eq!(
            session.on_frame_tick(&mut rng),
            TickOutcome::EncounterStarted {
                enemy: Archetype::Ghost
            }
        );
    }
}
