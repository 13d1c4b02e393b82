//! Header widget displaying the hero and session progress.

use client_frontend_core::SessionView;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel with hero health, mode, and counters.
pub fn render(frame: &mut Frame, area: Rect, view: &SessionView, theme: &RatatuiTheme) {
    let hero = &view.hero;

    let text = vec![Line::from(vec![
        Span::styled(
            hero.name.clone(),
            theme.emphasize(Style::default().fg(Color::Cyan)),
        ),
        Span::raw(" | HP "),
        Span::styled(
            hero.health_text(),
            theme.style_health(hero.health.current, hero.health.maximum),
        ),
        Span::raw(" | "),
        Span::styled(view.mode.to_string(), theme.style_mode(view.mode)),
        Span::raw(" | Frame: "),
        Span::styled(view.frame.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" | Encounters: "),
        Span::styled(
            view.encounters.to_string(),
            Style::default().fg(Color::LightGreen),
        ),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Quest"));

    frame.render_widget(paragraph, area);
}
