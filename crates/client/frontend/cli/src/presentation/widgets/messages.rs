//! Battle log panel.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the newest messages, oldest at the top.
///
/// `messages` is newest first, as [`client_frontend_core::SessionView`] stores it.
pub fn render(frame: &mut Frame, area: Rect, messages: &[MessageEntry], theme: &RatatuiTheme) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = messages
        .iter()
        .take(visible)
        .rev()
        .map(|entry| Line::styled(entry.text.clone(), theme.style_message(entry.level)))
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}
