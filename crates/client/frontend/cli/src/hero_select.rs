//! Hero selection screen shown before the runtime exists.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use game_core::Archetype;

use crate::presentation::{terminal::Tui, ui};

/// Show the hero list and wait for a choice.
///
/// Returns `None` when the player quits instead of choosing.
pub fn show_hero_select(terminal: &mut Tui) -> Result<Option<Archetype>> {
    let heroes = Archetype::HEROES;
    let mut selected = 0;

    loop {
        ui::render_hero_select(terminal, selected)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                selected = selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if selected + 1 < heroes.len() {
                    selected += 1;
                }
            }
            KeyCode::Enter => return Ok(Some(heroes[selected])),
            KeyCode::Char(ch @ '1'..='9') => {
                let index = (ch as usize) - ('1' as usize);
                if let Some(&hero) = heroes.get(index) {
                    return Ok(Some(hero));
                }
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None);
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
            _ => {}
        }
    }
}
