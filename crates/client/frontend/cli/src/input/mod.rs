//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{Direction, GameMode, PlayerAction};

pub mod held;
pub use held::HeldTracker;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Press or release of a movement key.
    Move { direction: Direction, pressed: bool },
    /// Battle menu choice.
    Battle(PlayerAction),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game commands for the current mode.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// Releases only ever produce movement. Repeats count as presses for
    /// movement and are dropped for everything else.
    pub fn handle_key(&self, key: KeyEvent, mode: GameMode) -> KeyAction {
        match key.kind {
            KeyEventKind::Release => match movement(key.code) {
                Some(direction) => KeyAction::Move {
                    direction,
                    pressed: false,
                },
                None => KeyAction::None,
            },
            KeyEventKind::Repeat => match (mode, movement(key.code)) {
                (GameMode::Exploring, Some(direction)) => KeyAction::Move {
                    direction,
                    pressed: true,
                },
                _ => KeyAction::None,
            },
            KeyEventKind::Press => self.handle_press(key, mode),
        }
    }

    fn handle_press(&self, key: KeyEvent, mode: GameMode) -> KeyAction {
        let is_ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'));
        if is_ctrl_c || matches!(key.code, KeyCode::Esc) {
            return KeyAction::Quit;
        }
        if let KeyCode::Char(ch) = key.code {
            if ch.eq_ignore_ascii_case(&'q') {
                return KeyAction::Quit;
            }
        }

        match mode {
            GameMode::Exploring => match movement(key.code) {
                Some(direction) => KeyAction::Move {
                    direction,
                    pressed: true,
                },
                None => KeyAction::None,
            },
            GameMode::InBattle => battle_action(key.code)
                .map(KeyAction::Battle)
                .unwrap_or(KeyAction::None),
            GameMode::GameOver => KeyAction::None,
        }
    }
}

fn movement(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        },
        _ => None,
    }
}

fn battle_action(code: KeyCode) -> Option<PlayerAction> {
    let KeyCode::Char(ch) = code else {
        return None;
    };
    match ch.to_ascii_lowercase() {
        '1' => Some(PlayerAction::PrimaryAttack),
        '2' => Some(PlayerAction::SecondaryAttack),
        '3' | 'd' => Some(PlayerAction::Defend),
        '4' | 'f' => Some(PlayerAction::Flee),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key_with(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        key_with(code, KeyEventKind::Press)
    }

    #[test]
    fn maps_movement_keys_while_exploring() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('W')), GameMode::Exploring),
            KeyAction::Move {
                direction: Direction::Up,
                pressed: true
            }
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Left), GameMode::Exploring),
            KeyAction::Move {
                direction: Direction::Left,
                pressed: true
            }
        );
        assert_eq!(
            handler.handle_key(
                key_with(KeyCode::Right, KeyEventKind::Release),
                GameMode::Exploring
            ),
            KeyAction::Move {
                direction: Direction::Right,
                pressed: false
            }
        );
    }

    #[test]
    fn battle_keys_depend_on_mode() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('1')), GameMode::InBattle),
            KeyAction::Battle(PlayerAction::PrimaryAttack)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('d')), GameMode::InBattle),
            KeyAction::Battle(PlayerAction::Defend)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('f')), GameMode::InBattle),
            KeyAction::Battle(PlayerAction::Flee)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('1')), GameMode::Exploring),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Up), GameMode::InBattle),
            KeyAction::None
        );
    }

    #[test]
    fn repeats_only_move() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(
                key_with(KeyCode::Char('2'), KeyEventKind::Repeat),
                GameMode::InBattle
            ),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(
                key_with(KeyCode::Char('s'), KeyEventKind::Repeat),
                GameMode::Exploring
            ),
            KeyAction::Move {
                direction: Direction::Down,
                pressed: true
            }
        );
    }

    #[test]
    fn quits_from_any_mode() {
        let handler = InputHandler::new();
        for mode in [GameMode::Exploring, GameMode::InBattle, GameMode::GameOver] {
            assert_eq!(
                handler.handle_key(key(KeyCode::Char('q')), mode),
                KeyAction::Quit
            );
            assert_eq!(handler.handle_key(key(KeyCode::Esc), mode), KeyAction::Quit);
        }
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(
            handler.handle_key(ctrl_c, GameMode::Exploring),
            KeyAction::Quit
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), GameMode::Exploring),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('w')), GameMode::GameOver),
            KeyAction::None
        );
    }
}
