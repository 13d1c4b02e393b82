//! Key hints for the current mode.

use game_core::GameMode;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect, mode: GameMode) {
    let hints: &[(&str, &str)] = match mode {
        GameMode::Exploring => &[("←↑↓→/wasd", " walk  "), ("q", " quit")],
        GameMode::InBattle => &[
            ("1", " attack 1  "),
            ("2", " attack 2  "),
            ("3/d", " defend  "),
            ("4/f", " flee  "),
            ("q", " quit"),
        ],
        GameMode::GameOver => &[("q", " quit")],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, Style::default().fg(Color::Yellow)),
                Span::styled(*label, Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    let footer = Paragraph::new(vec![Line::from(""), Line::from(spans)]).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
