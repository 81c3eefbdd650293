//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// One-line status bar with key help and capture progress
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, capturing: bool) {
        let status_text = if capturing {
            "Capturing photo...".to_string()
        } else {
            // Show helpful shortcuts
            "Tab: switch focus • Enter: add • F2: due date • F3: camera • d: remove • q: quit".to_string()
        };

        let status_color = if capturing { Color::Yellow } else { Color::Gray };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
