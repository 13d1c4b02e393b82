//! Ratatui styling for the terminal UI.
//!
//! Keeps colour choices in one place so widgets only ask for meaning
//! (health level, message level) rather than concrete colours.

use client_frontend_core::MessageLevel;
use game_core::{Archetype, GameMode};
use ratatui::style::{Color, Modifier, Style};

/// Consistent colour scheme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn style_health(&self, current: u32, maximum: u32) -> Style {
        if maximum == 0 {
            return Style::default().fg(Color::Gray);
        }

        let percent = (current * 100) / maximum;
        let color = match percent {
            75..=100 => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    /// Attack uses left; greys out once a slot is spent.
    pub fn style_points(&self, current: u32) -> Style {
        match current {
            0 => Style::default().fg(Color::DarkGray),
            1..=3 => Style::default().fg(Color::LightBlue),
            _ => Style::default().fg(Color::Cyan),
        }
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Critical => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            MessageLevel::Victory => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            MessageLevel::Defeat => Style::default()
                .fg(Color::Rgb(148, 33, 33))
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn style_mode(&self, mode: GameMode) -> Style {
        let color = match mode {
            GameMode::Exploring => Color::LightGreen,
            GameMode::InBattle => Color::LightRed,
            GameMode::GameOver => Color::Red,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Glyph and style for a fighter drawn on screen.
    pub fn fighter_glyph(&self, archetype: Archetype) -> (char, Style) {
        match archetype {
            Archetype::Swordsman => ('@', Style::default().fg(Color::Yellow)),
            Archetype::Archer => ('@', Style::default().fg(Color::LightGreen)),
            Archetype::Slime => ('s', Style::default().fg(Color::Green)),
            Archetype::Ghost => ('g', Style::default().fg(Color::Gray)),
            Archetype::Jaskirat => ('J', Style::default().fg(Color::Magenta)),
        }
    }

    pub fn style_border(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn emphasize(&self, base_style: Style) -> Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_colour_follows_percentage() {
        let theme = RatatuiTheme::new();
        assert_eq!(theme.style_health(20, 20).fg, Some(Color::Green));
        assert_eq!(theme.style_health(10, 20).fg, Some(Color::Yellow));
        assert_eq!(theme.style_health(1, 20).fg, Some(Color::Red));
        assert_eq!(theme.style_health(0, 0).fg, Some(Color::Gray));
    }
}
