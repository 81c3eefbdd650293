//! Pending photo panel.
//!
//! Shows the location of the most recent successful capture below the list.
//! The slot is unrelated to any task and is replaced wholesale by the next
//! capture.

use std::path::PathBuf;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::core::{actions::Action, Component};

#[derive(Default)]
pub struct PhotoPanel {
    photo: Option<PathBuf>,
}

impl PhotoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, photo: Option<PathBuf>) {
        self.photo = photo;
    }

    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }
}

impl Component for PhotoPanel {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(photo) = &self.photo else {
            return;
        };

        let line = Line::from(vec![
            Span::styled("Captured: ", Style::default().fg(Color::DarkGray)),
            Span::styled(photo.display().to_string(), Style::default().fg(Color::White)),
        ]);

        let panel = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Photo")
                .border_style(Style::default().fg(Color::Gray)),
        );
        f.render_widget(panel, rect);
    }
}
