//! Battle screen: both fighters, their health, and the action menu.

use client_frontend_core::{BattleView, FighterView, MessageEntry};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    hero: &FighterView,
    battle: &BattleView,
    banner: Option<&MessageEntry>,
    theme: &RatatuiTheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.style_border())
        .title(" Battle ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Health bars
            Constraint::Min(3),    // Fighters
            Constraint::Length(1), // Banner
            Constraint::Length(3), // Actions
        ])
        .split(inner);

    let bars = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    render_health(frame, bars[0], hero, hero.health_text(), theme);
    render_health(frame, bars[1], &battle.enemy, battle.banner.clone(), theme);

    render_fighters(frame, rows[1], hero, &battle.enemy, theme);

    if let Some(entry) = banner {
        let text = Paragraph::new(Line::styled(
            entry.text.clone(),
            theme.style_message(entry.level),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(text, rows[2]);
    }

    render_actions(frame, rows[3], hero, theme);
}

fn render_health(
    frame: &mut Frame,
    area: Rect,
    fighter: &FighterView,
    label: String,
    theme: &RatatuiTheme,
) {
    let health = fighter.health;
    let ratio = if health.maximum == 0 {
        0.0
    } else {
        f64::from(health.current) / f64::from(health.maximum)
    };

    let title = format!(" {} ", fighter.name);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(theme.style_health(health.current, health.maximum))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_fighters(
    frame: &mut Frame,
    area: Rect,
    hero: &FighterView,
    enemy: &FighterView,
    theme: &RatatuiTheme,
) {
    let (hero_glyph, hero_style) = theme.fighter_glyph(hero.archetype);
    let (enemy_glyph, enemy_style) = theme.fighter_glyph(enemy.archetype);
    let gap = area.width.saturating_sub(8) as usize;

    let mut lines = vec![Line::from(""); (area.height / 2) as usize];
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(hero_glyph.to_string(), theme.emphasize(hero_style)),
        Span::raw(" ".repeat(gap)),
        Span::styled(enemy_glyph.to_string(), theme.emphasize(enemy_style)),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_actions(frame: &mut Frame, area: Rect, hero: &FighterView, theme: &RatatuiTheme) {
    let (primary, secondary) = hero
        .points
        .map(|(p, s)| (p.current, s.current))
        .unwrap_or_default();

    let key = Style::default().fg(Color::Yellow);
    let line = Line::from(vec![
        Span::styled("[1] ", key),
        Span::raw("Attack 1 "),
        Span::styled(format!("({primary})"), theme.style_points(primary)),
        Span::raw("   "),
        Span::styled("[2] ", key),
        Span::raw("Attack 2 "),
        Span::styled(format!("({secondary})"), theme.style_points(secondary)),
        Span::raw("   "),
        Span::styled("[3] ", key),
        Span::raw("Defend   "),
        Span::styled("[4] ", key),
        Span::raw("Flee"),
    ]);

    let menu = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Actions "));
    frame.render_widget(menu, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::{MessageLog, SessionView};
    use game_core::{Archetype, Direction as Heading, GameConfig, GameSession, ScriptedRng};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(view: &SessionView) -> String {
        let battle = view.battle.as_ref().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                render(frame, frame.area(), &view.hero, battle, None, &RatatuiTheme::new());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn health_bars_are_titled_by_name() {
        let mut session = GameSession::new(Archetype::Swordsman, GameConfig::default()).unwrap();
        session.on_move_input(Heading::Right, true);
        // encounter draw, then roster index 1 (ghost)
        session.on_frame_tick(&mut ScriptedRng::new([1, 1]));
        let view = SessionView::from_session(&session, &MessageLog::new(4), 4);

        let text = screen_text(&view);

        assert!(text.contains(" Swordsman "));
        assert!(text.contains(" Ghost "));
        assert!(text.contains("20/20"));
        assert!(text.contains("Ghost! | 13/13"));
        assert!(text.contains("Defend"));
    }
}
