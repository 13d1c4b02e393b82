//! View-model snapshots derived from [`game_core::GameSession`].
use game_core::{
    Archetype, AttackSlot, BattleOutcome, FieldConfig, GameMode, GameSession, Position,
    ResourceMeter, Unit,
};

use crate::format;
use crate::message::{MessageEntry, MessageLog};

/// High-level snapshot of the game used by presentation layers.
#[derive(Clone, Debug)]
pub struct SessionView {
    pub mode: GameMode,
    pub frame: u64,
    pub encounters: u32,
    pub position: Position,
    pub field: FieldConfig,
    pub hero: FighterView,
    pub battle: Option<BattleView>,
    pub last_outcome: Option<BattleOutcome>,
    /// Newest first.
    pub messages: Vec<MessageEntry>,
}

impl SessionView {
    pub fn from_session(session: &GameSession, messages: &MessageLog, message_limit: usize) -> Self {
        Self {
            mode: session.mode(),
            frame: session.frame(),
            encounters: session.encounters(),
            position: session.position(),
            field: *session.overworld().field(),
            hero: FighterView::from_unit(session.hero()),
            battle: session.enemy().map(BattleView::from_enemy),
            last_outcome: session.last_outcome(),
            messages: messages.recent(message_limit).cloned().collect(),
        }
    }

    /// Replace the message panel without touching the rest of the snapshot.
    pub fn refresh_messages(&mut self, messages: &MessageLog, message_limit: usize) {
        self.messages = messages.recent(message_limit).cloned().collect();
    }

    pub fn in_battle(&self) -> bool {
        self.mode == GameMode::InBattle
    }
}

/// One combatant as the battle screen shows it.
#[derive(Clone, Debug)]
pub struct FighterView {
    pub archetype: Archetype,
    pub name: String,
    pub health: ResourceMeter,
    /// Remaining uses of the primary and secondary attacks (heroes only).
    pub points: Option<(ResourceMeter, ResourceMeter)>,
}

impl FighterView {
    pub fn from_unit(unit: &Unit) -> Self {
        Self {
            archetype: unit.archetype(),
            name: format::display_name(unit.archetype()),
            health: unit.health(),
            points: unit.points().map(|points| {
                (
                    points.slot(AttackSlot::Primary),
                    points.slot(AttackSlot::Secondary),
                )
            }),
        }
    }

    /// `current/max` as drawn next to the hero.
    pub fn health_text(&self) -> String {
        format!("{}/{}", self.health.current, self.health.maximum)
    }
}

#[derive(Clone, Debug)]
pub struct BattleView {
    pub enemy: FighterView,
    pub banner: String,
}

impl BattleView {
    fn from_enemy(enemy: &Unit) -> Self {
        Self {
            enemy: FighterView::from_unit(enemy),
            banner: format::enemy_banner(enemy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Direction, GameConfig, ScriptedRng};

    #[test]
    fn exploring_view_has_no_battle() {
        let session = GameSession::new(Archetype::Archer, GameConfig::default()).unwrap();
        let mut log = MessageLog::new(4);
        log.push_text("hello");

        let view = SessionView::from_session(&session, &log, 10);

        assert_eq!(view.mode, GameMode::Exploring);
        assert!(view.battle.is_none());
        assert_eq!(view.hero.name, "Archer");
        assert_eq!(view.hero.health_text(), "16/16");
        assert_eq!(
            view.hero.points.map(|(p, s)| (p.current, s.current)),
            Some((18, 5))
        );
        assert_eq!(view.messages.len(), 1);
    }

    #[test]
    fn battle_view_carries_enemy_banner() {
        let mut session = GameSession::new(Archetype::Swordsman, GameConfig::default()).unwrap();
        session.on_move_input(Direction::Right, true);
        // encounter draw, then roster index 1 (ghost)
        let mut rng = ScriptedRng::new([1, 1]);
        session.on_frame_tick(&mut rng);

        let view = SessionView::from_session(&session, &MessageLog::new(4), 4);

        assert!(view.in_battle());
        let battle = view.battle.unwrap();
        assert_eq!(battle.enemy.archetype, Archetype::Ghost);
        assert_eq!(battle.banner, "Ghost! | 13/13");
        assert!(battle.enemy.points.is_none());
    }

    #[test]
    fn refresh_messages_keeps_newest_within_limit() {
        let session = GameSession::new(Archetype::Swordsman, GameConfig::default()).unwrap();
        let mut log = MessageLog::new(8);
        let mut view = SessionView::from_session(&session, &log, 2);
        assert!(view.messages.is_empty());

        for text in ["first", "second", "third"] {
            log.push_text(text);
        }
        view.refresh_messages(&log, 2);

        let texts: Vec<&str> = view.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["third", "second"]);
        assert_eq!(view.frame, 0);
    }
}
