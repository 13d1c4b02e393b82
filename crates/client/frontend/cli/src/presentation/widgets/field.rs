//! Overworld view: the walkable field scaled to the terminal.

use client_frontend_core::SessionView;
use game_core::{FieldConfig, GameMode, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

const GRASS: char = '.';
const WALL: char = '#';

/// Map a field position onto a `cols x rows` character grid.
pub fn project(position: Position, field: &FieldConfig, cols: u16, rows: u16) -> (u16, u16) {
    fn scale(value: i32, extent: i32, cells: u16) -> u16 {
        if cells == 0 || extent <= 0 {
            return 0;
        }
        let clamped = value.clamp(0, extent - 1) as i64;
        let cell = clamped * i64::from(cells) / i64::from(extent);
        (cell as u16).min(cells - 1)
    }

    (
        scale(position.x, field.width, cols),
        scale(position.y, field.height, rows),
    )
}

pub fn render(frame: &mut Frame, area: Rect, view: &SessionView, banner: Option<&str>, theme: &RatatuiTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.style_border())
        .title(format!(" Field ({}, {}) ", view.position.x, view.position.y));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let field = &view.field;
    let (_, top_row) = project(Position::new(0, field.top), field, inner.width, inner.height);
    let (hero_col, hero_row) = project(view.position, field, inner.width, inner.height);
    let (glyph, hero_style) = theme.fighter_glyph(view.hero.archetype);
    let hero_style = if view.mode == GameMode::GameOver {
        Style::default().fg(Color::DarkGray)
    } else {
        hero_style
    };

    let lines: Vec<Line> = (0..inner.height)
        .map(|row| {
            if row < top_row {
                return Line::styled(
                    WALL.to_string().repeat(inner.width as usize),
                    Style::default().fg(Color::Gray),
                );
            }
            let mut spans = Vec::with_capacity(3);
            if row == hero_row {
                let before = GRASS.to_string().repeat(hero_col as usize);
                let after = GRASS
                    .to_string()
                    .repeat(inner.width.saturating_sub(hero_col + 1) as usize);
                spans.push(Span::styled(before, Style::default().fg(Color::DarkGray)));
                spans.push(Span::styled(glyph.to_string(), theme.emphasize(hero_style)));
                spans.push(Span::styled(after, Style::default().fg(Color::DarkGray)));
            } else {
                spans.push(Span::styled(
                    GRASS.to_string().repeat(inner.width as usize),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    if let Some(text) = banner {
        let row = Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        };
        let overlay = Paragraph::new(Line::styled(
            text.to_string(),
            theme.style_message(client_frontend_core::MessageLevel::Defeat),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(overlay, row);
    }
}
