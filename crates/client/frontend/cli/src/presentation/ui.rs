//! Composes the widgets into the full terminal UI.
use anyhow::Result;
use client_frontend_core::{MessageEntry, SessionView};
use game_core::GameMode;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};

/// Everything a single frame needs to draw.
pub struct RenderContext<'a> {
    pub view: &'a SessionView,
    /// Centre banner (winner or GAME OVER).
    pub banner: Option<&'a MessageEntry>,
    pub message_panel_height: u16,
}

/// Draw one frame.
///
/// Battle replaces the field with the battle screen; game over keeps the
/// field visible under the banner.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(0),                           // Field or battle
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(2),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.view, &theme);

        match (&ctx.view.battle, ctx.view.mode) {
            (Some(battle), GameMode::InBattle) => {
                widgets::battle::render(
                    frame,
                    chunks[1],
                    &ctx.view.hero,
                    battle,
                    ctx.banner,
                    &theme,
                );
            }
            _ => {
                let banner = ctx.banner.map(|entry| entry.text.as_str());
                widgets::field::render(frame, chunks[1], ctx.view, banner, &theme);
            }
        }

        widgets::messages::render(frame, chunks[2], &ctx.view.messages, &theme);
        widgets::footer::render(frame, chunks[3], ctx.view.mode);
    })?;

    Ok(())
}

/// Draw the hero selection screen.
pub fn render_hero_select(terminal: &mut Tui, selected: usize) -> Result<()> {
    terminal.draw(|frame| {
        widgets::hero_select::render(frame, frame.area(), selected);
    })?;
    Ok(())
}
